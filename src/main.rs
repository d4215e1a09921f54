use std::process;

use logbak::constants::FATAL_EXIT_CODE;
use logbak::constants::USAGE_EXIT_CODE;
use logbak::Cli;
use logbak::LogbakConfig;
use logbak::USAGE;
use tracing::debug;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    init_observability();

    let command = match Cli::parse_args(std::env::args_os()) {
        Ok(command) => command,
        Err(e) => {
            debug!("rejected command line: {}", e);
            for line in USAGE {
                println!("{}", line);
            }
            process::exit(USAGE_EXIT_CODE);
        }
    };

    let result = LogbakConfig::new()
        .and_then(|c| c.validate())
        .and_then(|config| {
            debug!("loaded {:?}", config);
            command.execute(&config)
        });

    if let Err(e) = result {
        error!("{:?} failed: {:?}", command, e);
        eprintln!("{}", e);
        process::exit(FATAL_EXIT_CODE);
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so stdout only
/// carries status and usage lines.
fn init_observability() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
