//! Hadut CLI entry point.
//!
//! Parses arguments, loads the optional config file, dispatches to the
//! command handler, and maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use hadut::config::ToolConfig;
use hadut::error::Result;
use hadut::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(code) => ExitCode::from(exit_codes::clamp_child_code(code)),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    commands::dispatch(cli.command, config)
}

/// Log to stderr, filtered by `HADUT_LOG` (default `warn`).
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_env("HADUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}
