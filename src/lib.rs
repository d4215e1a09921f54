//! Backs a plain-text log file up into an embedded ordered key-value store
//! and restores it back, line for line.
//!
//! Every input line becomes one `SEQ|LINE` record, stored as both key and
//! value, where `SEQ` is the zero-padded 0-based line index. Restore sorts
//! the records by that prefix and strips it again.

mod cli;
mod codec;
mod config;
mod errors;
mod ops;
mod storage;
pub mod constants;
pub mod utils;

pub use cli::*;
pub use codec::*;
pub use self::config::*;
pub use errors::*;
pub use ops::*;
pub use storage::*;
pub use utils::*;
