//! semweave CLI Binary
//!
//! Command-line interface for rendering semantic nodes and inspecting the
//! role registry. Rendered output goes to stdout; logs and errors go to
//! stderr.

use anyhow::Context;
use clap::Parser;
use semweave::cli::{map_error, Cli, RunContext};
use semweave::config::ConfigLoader;
use semweave::error::ApiError;
use semweave::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let logging = apply_log_flags(&cli, configured_logging(&cli));
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("semweave failed: {:#}", e);
            eprintln!("{}", describe(&e));
            process::exit(exit_code(&e));
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = RunContext::new(cli.workspace.clone(), cli.config.clone(), cli.strict)
        .with_context(|| format!("loading workspace {}", cli.workspace.display()))?;
    let output = context.execute(&cli.command)?;
    debug!(bytes = output.len(), "Command finished");
    Ok(output)
}

fn describe(e: &anyhow::Error) -> String {
    match e.downcast_ref::<ApiError>() {
        Some(api_error) => map_error(api_error),
        None => format!("error: {:#}", e),
    }
}

/// 2 for strict-mode diagnostics, 1 for everything else
fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<ApiError>() {
        Some(ApiError::Strict(_)) => 2,
        _ => 1,
    }
}

/// Logging section of the configuration the command will run with. A
/// broken config falls back to defaults here; `run` reports the real error.
fn configured_logging(cli: &Cli) -> LoggingConfig {
    let loaded = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.workspace),
    };
    loaded.map(|config| config.logging).unwrap_or_default()
}

/// CLI flags beat the config file: `--quiet`, then `--verbose`, then the
/// explicit `--log-level` / `--log-format`.
fn apply_log_flags(cli: &Cli, mut logging: LoggingConfig) -> LoggingConfig {
    logging.enabled &= !cli.quiet;
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    logging
}
