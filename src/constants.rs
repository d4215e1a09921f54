// -
// Record format

/// Minimum width of the zero-padded sequence prefix
pub const SEQ_WIDTH: usize = 5;

/// Separates the sequence prefix from the original line
pub const SEPARATOR: u8 = b'|';

/// Character used to left-pad the sequence prefix
pub(crate) const SEQ_PAD: char = '0';

// -
// Process exit codes

/// Malformed command line
pub const USAGE_EXIT_CODE: i32 = 1;

/// Backup or restore aborted
pub const FATAL_EXIT_CODE: i32 = 2;

// -
// Configuration

/// Environment variable naming an extra configuration file
pub(crate) const CONFIG_PATH_ENV: &str = "LOGBAK_CONFIG_PATH";

/// Prefix of environment variable overrides, e.g. `LOGBAK__RESTORE__ORDER`
pub(crate) const CONFIG_ENV_PREFIX: &str = "LOGBAK";
