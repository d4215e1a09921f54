use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;

use tracing::error;

use crate::Error;
use crate::Result;

/// Opens `path` for buffered line reading.
pub fn open_input_file(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) => {
            error!("Failed to open input file {:?}: {:?}", path, e);
            Err(Error::InputOpen {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

/// Creates `path`, truncating any existing file. Missing parent
/// directories are not created.
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    match File::create(path) {
        Ok(f) => Ok(BufWriter::new(f)),
        Err(e) => {
            error!("Failed to create output file {:?}: {:?}", path, e);
            Err(Error::OutputCreate {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

/// Reads the next line into `buf` without its terminator.
///
/// Strips a trailing `\n`, then a single trailing `\r`, also on a final
/// line with no `\n`. A final line with no terminator is still returned.
/// Returns `false` at end of input.
pub fn read_line_bytes<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(true)
}
