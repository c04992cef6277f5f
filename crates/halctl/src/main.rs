//! halctl entry point.
//!
//! Parses the command line, initializes logging at the requested severity
//! and prints the result of one HAL helper command.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use hal_common::LogSeverity;

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over the severity given on the command line.
fn init_logging(severity: LogSeverity) {
    let filter = EnvFilter::builder()
        .with_default_directive(severity.level_filter().into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_severity);

    debug!("Running {:?}", cli.command);

    let output = commands::run(cli.command).and_then(|report| report.render(cli.json));
    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("halctl error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
