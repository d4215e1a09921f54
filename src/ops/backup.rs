use std::io::BufRead;
use std::path::Path;

use tracing::debug;
use tracing::error;
use tracing::instrument;
use tracing::trace;

use crate::encode_record;
use crate::file_io::open_input_file;
use crate::file_io::read_line_bytes;
use crate::Error;
use crate::RecordStore;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupReport {
    /// Number of lines stored
    pub lines: u64,
}

/// Stores every line of the file at `input` into `store`.
#[instrument(skip(store))]
pub fn backup<S>(
    input: &Path,
    store: &S,
) -> Result<BackupReport>
where
    S: RecordStore + ?Sized,
{
    let reader = open_input_file(input)?;
    backup_from_reader(reader, store)
}

/// Stores every line read from `reader` into `store`.
///
/// Line `i` (0-based) is stored as `encode_record(i, line)`, used as both
/// key and value. The first failing insertion aborts the backup and names
/// the line index. The store is flushed once all lines are in.
pub fn backup_from_reader<R, S>(
    mut reader: R,
    store: &S,
) -> Result<BackupReport>
where
    R: BufRead,
    S: RecordStore + ?Sized,
{
    let mut line = Vec::new();
    let mut index: u64 = 0;

    while read_line_bytes(&mut reader, &mut line)? {
        let record = encode_record(index, &line);
        trace!("put record #{}, len = {}", index, record.len());

        store.put(&record, &record).map_err(|e| {
            error!("Failed to store line {}: {:?}", index, e);
            Error::Insert {
                line: index,
                source: Box::new(e),
            }
        })?;
        index += 1;
    }

    store.flush()?;
    debug!("backup stored {} lines", index);

    Ok(BackupReport { lines: index })
}
