//! Error hierarchy for log backup and restore.
//!
//! Every variant is terminal for the running operation: there is no retry
//! and no partial rollback. Malformed command lines never reach this type,
//! the CLI rejects them before any operation starts.

use std::path::PathBuf;

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration load or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Store and file-system level failures
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Backup input could not be opened
    #[error("Failed to open input file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Restore output could not be created
    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single line could not be stored; `line` is the 0-based input index
    #[error("Failed to store line {line}: {source}")]
    Insert {
        line: u64,
        #[source]
        source: Box<Error>,
    },

    /// Stored value is not a `SEQ|LINE` record
    #[error("Malformed record in store: {record:?}")]
    MalformedRecord { record: String },

    /// Writer accepted zero bytes without reporting an error
    #[error("0 bytes written for restored line {line}")]
    DegenerateWrite { line: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Disk I/O failures while reading input or writing output
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Embedded database errors
    #[error("Embedded database error: {0}")]
    DbError(String),
}

impl From<sled::Error> for Error {
    fn from(e: sled::Error) -> Self {
        StorageError::DbError(e.to_string()).into()
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e).into()
    }
}
