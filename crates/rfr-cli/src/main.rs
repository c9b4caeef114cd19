//! Launcher entry point - the composition root.
//!
//! Parses arguments, wires the adapters via [`bootstrap`] and runs the
//! probe, install and launch sequence once.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rfr_cli::presentation::{ConsoleOptions, pause_for_acknowledgment, report_failure};
use rfr_cli::{Cli, CliConfig, CliError, bootstrap};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env overrides before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let options = ConsoleOptions::from_cli(&cli);
    init_tracing(options.verbose);

    match run(&cli).await {
        Ok(pid) => {
            println!("RF Renamer Tool started (pid {pid}).");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            if options.pause_on_error && let Err(e) = pause_for_acknowledgment() {
                tracing::debug!("Pause skipped: {e:#}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<u32, CliError> {
    let config = CliConfig::from_cli(cli)?;
    let mut ctx = bootstrap(&config)?;
    let report = ctx.bootstrapper.run(&ctx.launch).await?;
    Ok(report.receipt.pid)
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
