//! Command line surface.
//!
//! ```text
//! logbak b log_file NoSQL_file    backs log_file up into NoSQL_file
//! logbak r log_file NoSQL_file    restores log_file from NoSQL_file
//! ```

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use tracing::info;

use crate::backup;
use crate::restore;
use crate::LogbakConfig;
use crate::Result;
use crate::SledRecordStore;

/// Printed, one per line, for any malformed invocation
pub const USAGE: [&str; 2] = [
    "Usage: logbak b log_file NoSQL_file - backups log_file to NoSQL_file",
    "Usage: logbak r log_file NoSQL_file - restores log_file from NoSQL_file",
];

#[derive(Parser, Debug)]
#[command(name = "logbak")]
#[command(about = "Converts a text log file to an embedded key-value store and back", long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Backs log_file up into the store at store_path
    #[command(name = "b")]
    Backup {
        #[arg(allow_hyphen_values = true)]
        log_file: PathBuf,
        #[arg(allow_hyphen_values = true)]
        store_path: PathBuf,
    },

    /// Restores log_file from the store at store_path
    #[command(name = "r")]
    Restore {
        #[arg(allow_hyphen_values = true)]
        log_file: PathBuf,
        #[arg(allow_hyphen_values = true)]
        store_path: PathBuf,
    },
}

impl Cli {
    /// Parses a full argument list, program name first.
    pub fn parse_args<I, T>(args: I) -> std::result::Result<Command, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map(|cli| cli.command)
    }
}

impl Command {
    /// Opens the store, runs the operation and closes the store again.
    pub fn execute(
        &self,
        config: &LogbakConfig,
    ) -> Result<()> {
        match self {
            Command::Backup {
                log_file,
                store_path,
            } => {
                let store = SledRecordStore::open(store_path, &config.storage)?;
                println!("backup {} to {}", log_file.display(), store_path.display());

                let report = backup(log_file, &store)?;
                store.close()?;
                info!("backed up {} lines into {:?}", report.lines, store_path);
            }
            Command::Restore {
                log_file,
                store_path,
            } => {
                let store = SledRecordStore::open(store_path, &config.storage)?;
                println!("restore {} from {}", log_file.display(), store_path.display());

                let report = restore(&store, log_file, config.restore.order)?;
                store.close()?;
                info!("restored {} lines into {:?}", report.lines, log_file);
            }
        }
        Ok(())
    }
}
