//! `SEQ|LINE` record codec.
//!
//! Backup stores every input line as a record whose prefix is the 0-based
//! line index, left-padded with `'0'` to [`SEQ_WIDTH`] digits. The same bytes
//! are used as key and value. Restore sorts records back into input order
//! and strips the prefix again.


use tracing::trace;

use crate::constants::SEPARATOR;
use crate::constants::SEQ_PAD;
use crate::constants::SEQ_WIDTH;
use crate::Error;
use crate::RestoreOrder;
use crate::Result;

/// Renders `index` in decimal, left-padded with `'0'` to at least `width`.
///
/// Indices that already need `width` digits or more are returned as-is, so
/// from 100000 on the prefix is wider than [`SEQ_WIDTH`].
pub fn pad_sequence(
    index: u64,
    width: usize,
) -> String {
    let digits = index.to_string();
    let mut padded = String::with_capacity(width.max(digits.len()));
    for _ in digits.len()..width {
        padded.push(SEQ_PAD);
    }
    padded.push_str(&digits);
    padded
}

/// Builds the record stored for input line `index`.
pub fn encode_record(
    index: u64,
    line: &[u8],
) -> Vec<u8> {
    let prefix = pad_sequence(index, SEQ_WIDTH);
    let mut record = Vec::with_capacity(prefix.len() + 1 + line.len());
    record.extend_from_slice(prefix.as_bytes());
    record.push(SEPARATOR);
    record.extend_from_slice(line);
    record
}

/// Splits a record at the FIRST separator into `(prefix, line)`.
pub fn split_record(record: &[u8]) -> Result<(&[u8], &[u8])> {
    match record.iter().position(|b| *b == SEPARATOR) {
        Some(pos) => Ok((&record[..pos], &record[pos + 1..])),
        None => Err(malformed(record)),
    }
}

/// Returns the original line carried by `record`.
pub fn decode_record(record: &[u8]) -> Result<&[u8]> {
    split_record(record).map(|(_, line)| line)
}

/// Parses the sequence prefix of `record` as an integer.
pub fn record_sequence(record: &[u8]) -> Result<u64> {
    let (prefix, _) = split_record(record)?;
    if prefix.is_empty() || !prefix.iter().all(u8::is_ascii_digit) {
        return Err(malformed(record));
    }

    // All ASCII digits, so the only failure left is overflow
    std::str::from_utf8(prefix)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| malformed(record))
}

/// Puts records back into input order.
pub fn sort_records(
    records: &mut Vec<Vec<u8>>,
    order: RestoreOrder,
) -> Result<()> {
    trace!("sort_records len = {}, order = {:?}", records.len(), order);

    match order {
        RestoreOrder::Lexicographic => {
            records.sort_unstable();
        }
        RestoreOrder::Numeric => {
            let mut keyed = std::mem::take(records)
                .into_iter()
                .map(|r| record_sequence(&r).map(|seq| (seq, r)))
                .collect::<Result<Vec<_>>>()?;
            keyed.sort_unstable_by_key(|(seq, _)| *seq);
            records.extend(keyed.into_iter().map(|(_, r)| r));
        }
    }
    Ok(())
}

fn malformed(record: &[u8]) -> Error {
    Error::MalformedRecord {
        record: String::from_utf8_lossy(record).into_owned(),
    }
}
