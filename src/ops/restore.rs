use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;

use tracing::debug;
use tracing::instrument;
use tracing::trace;

use crate::decode_record;
use crate::file_io::create_output_file;
use crate::sort_records;
use crate::Error;
use crate::RecordStore;
use crate::RestoreOrder;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreReport {
    /// Number of lines written
    pub lines: u64,
}

/// Rewrites the file at `output` from the records in `store`.
///
/// The output file is created (or truncated) before the store is read.
#[instrument(skip(store))]
pub fn restore<S>(
    store: &S,
    output: &Path,
    order: RestoreOrder,
) -> Result<RestoreReport>
where
    S: RecordStore + ?Sized,
{
    let writer = create_output_file(output)?;
    restore_to_writer(store, writer, order)
}

/// Writes the lines held in `store` to `writer` in original input order,
/// each followed by `\n`.
pub fn restore_to_writer<S, W>(
    store: &S,
    mut writer: W,
    order: RestoreOrder,
) -> Result<RestoreReport>
where
    S: RecordStore + ?Sized,
    W: Write,
{
    let mut records = store.values()?;
    debug!("restore loaded {} records", records.len());

    sort_records(&mut records, order)?;

    let mut lines: u64 = 0;
    let mut buf = Vec::new();
    for record in &records {
        let line = decode_record(record)?;

        buf.clear();
        buf.extend_from_slice(line);
        buf.push(b'\n');
        write_line(&mut writer, lines, &buf)?;

        trace!("restored line #{}", lines);
        lines += 1;
    }

    writer.flush().map_err(|e| match e.kind() {
        ErrorKind::WriteZero => Error::DegenerateWrite {
            line: lines.saturating_sub(1),
        },
        _ => e.into(),
    })?;

    debug!("restore wrote {} lines", lines);
    Ok(RestoreReport { lines })
}

/// Writes all of `buf`, failing if the writer ever accepts zero bytes.
fn write_line<W: Write>(
    writer: &mut W,
    line: u64,
    mut buf: &[u8],
) -> Result<()> {
    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => return Err(Error::DegenerateWrite { line }),
            Ok(n) => buf = &buf[n..],
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) if e.kind() == ErrorKind::WriteZero => {
                return Err(Error::DegenerateWrite { line })
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
