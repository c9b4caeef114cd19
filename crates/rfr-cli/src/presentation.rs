//! Console output for the launcher.
//!
//! Progress lines go to stdout as each bootstrap step starts.
//! Failures are written to stderr as an `ERROR:` line followed by either a
//! remediation hint or the underlying reason. When the launcher was opened
//! in its own console window, it then waits for a key press so the message
//! stays readable.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use console::Term;
use rfr_core::ports::{BootstrapEvent, ProgressEmitterPort};

use crate::error::CliError;
use crate::parser::Cli;

/// Shown while waiting for the acknowledgment key press.
pub const PAUSE_PROMPT: &str = "Press any key to exit . . .";

/// How the launcher talks to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Wait for a key press after a failure.
    pub pause_on_error: bool,
    /// Debug logging requested.
    pub verbose: bool,
}

impl ConsoleOptions {
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            pause_on_error: !cli.no_pause,
            verbose: cli.verbose,
        }
    }
}

/// Line announcing `event`, if it is shown at all.
pub fn progress_line(event: &BootstrapEvent) -> Option<String> {
    match event {
        BootstrapEvent::CheckingRuntime => Some("Checking for Python installation...".to_string()),
        BootstrapEvent::InstallingPackages { packages } => {
            Some(format!("Installing required packages ({packages})..."))
        }
        BootstrapEvent::Launching { .. } => None,
    }
}

/// `ProgressEmitterPort` that prints progress lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressEmitterPort for ConsoleProgress {
    fn emit(&self, event: BootstrapEvent) {
        if let Some(line) = progress_line(&event) {
            println!("{line}");
        }
    }
}

/// Lines describing `err` for the user, in print order.
pub fn failure_lines(err: &CliError) -> Vec<String> {
    match err {
        CliError::Bootstrap(e) => {
            let mut lines = vec![format!("ERROR: {}", e.user_message())];
            match e.hint() {
                Some(hint) => lines.push(hint.to_string()),
                None => lines.push(format!("Reason: {e}")),
            }
            lines
        }
        CliError::Config(_) => vec![format!("ERROR: {err}")],
    }
}

/// Print `err` to stderr.
pub fn report_failure(err: &CliError) {
    let mut stderr = io::stderr().lock();
    for line in failure_lines(err) {
        // Nothing useful to do if stderr is gone
        let _ = writeln!(stderr, "{line}");
    }
}

/// Block until a key is pressed, if there is someone to press it.
///
/// Returns immediately when stdin or stderr is not a terminal, so piped and
/// scripted runs never hang.
pub fn pause_for_acknowledgment() -> Result<()> {
    pause_on(&Term::stderr(), io::stdin().is_terminal())
}

/// Prompt on `term` and read one key, unless either end is not interactive.
pub fn pause_on(term: &Term, stdin_is_terminal: bool) -> Result<()> {
    if !stdin_is_terminal || !term.is_term() {
        return Ok(());
    }

    term.write_line(PAUSE_PROMPT)
        .context("Failed to write pause prompt")?;
    term.read_key().context("Failed to read key press")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rfr_core::{BootstrapError, ConfigError, PackageList};
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    #[test]
    fn test_console_options_from_flags() {
        let cli = Cli::try_parse_from(["rf-renamer", "--no-pause", "-v"]).unwrap();
        assert_eq!(
            ConsoleOptions::from_cli(&cli),
            ConsoleOptions {
                pause_on_error: false,
                verbose: true,
            }
        );
    }

    #[test]
    fn test_console_options_pause_by_default() {
        let cli = Cli::try_parse_from(["rf-renamer"]).unwrap();
        let options = ConsoleOptions::from_cli(&cli);

        assert_eq!(options.pause_on_error, !cli.no_pause);
        assert!(!options.verbose);
    }

    #[test]
    fn test_pause_returns_at_once_without_interactive_stdin() {
        let started = Instant::now();

        pause_on(&Term::stderr(), false).unwrap();

        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_progress_lines() {
        assert_eq!(
            progress_line(&BootstrapEvent::CheckingRuntime).as_deref(),
            Some("Checking for Python installation...")
        );
        assert_eq!(
            progress_line(&BootstrapEvent::InstallingPackages {
                packages: PackageList::default(),
            })
            .as_deref(),
            Some("Installing required packages (pandas, openpyxl, requests, Pillow)...")
        );
        assert_eq!(
            progress_line(&BootstrapEvent::Launching {
                entry_point: PathBuf::from("GUI.py"),
            }),
            None
        );
    }

    #[test]
    fn test_runtime_missing_lines() {
        let err = CliError::from(BootstrapError::RuntimeMissing {
            tried: "python3, python".to_string(),
        });

        assert_eq!(
            failure_lines(&err),
            vec![
                "ERROR: Python is not installed or not added to PATH.",
                "Please install Python and make sure it is available on your PATH.",
            ]
        );
    }

    #[test]
    fn test_install_failed_lines() {
        let err = CliError::from(BootstrapError::DependencyInstallFailed {
            packages: "pandas".to_string(),
            reason: "pip exited with exit status: 1".to_string(),
        });

        assert_eq!(
            failure_lines(&err),
            vec![
                "ERROR: Failed to install required packages.",
                "Please check your internet connection and try again.",
            ]
        );
    }

    #[test]
    fn test_spawn_failed_lines_carry_reason() {
        let err = CliError::from(BootstrapError::SpawnFailed {
            entry_point: PathBuf::from("GUI.py"),
            reason: "entry point not found".to_string(),
        });

        let lines = failure_lines(&err);
        assert_eq!(lines[0], "ERROR: Failed to launch the RF Renamer Tool.");
        assert_eq!(
            lines[1],
            "Reason: Failed to launch GUI.py: entry point not found"
        );
    }

    #[test]
    fn test_config_error_single_line() {
        let err = CliError::from(ConfigError::EmptyPackageList);
        let lines = failure_lines(&err);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERROR: Configuration error: "));
    }
}
