//! Command-line interface definition.
//!
//! The launcher is meant to be double-clicked, so every option is optional
//! and can also come from the environment (or a `.env` file).

use std::path::PathBuf;

use clap::Parser;
use clap::builder::FalseyValueParser;

/// Check for Python, install the RF Renamer Tool's packages and start its GUI.
#[derive(Parser, Debug)]
#[command(name = "rf-renamer")]
#[command(about = "Check for Python, install required packages and start the RF Renamer Tool")]
#[command(version)]
pub struct Cli {
    /// GUI script to launch (default: GUI.py next to the launcher)
    #[arg(long = "entry-point", env = "RFR_GUI_SCRIPT", value_name = "PATH")]
    pub entry_point: Option<PathBuf>,

    /// Python interpreter to use instead of searching PATH
    #[arg(long = "python", env = "RFR_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Packages to install, comma or space separated (replaces the defaults)
    #[arg(long = "packages", env = "RFR_PACKAGES", value_name = "LIST")]
    pub packages: Option<String>,

    /// Exit immediately on failure instead of waiting for a key press
    #[arg(
        long = "no-pause",
        env = "RFR_NO_PAUSE",
        value_parser = FalseyValueParser::new()
    )]
    pub no_pause: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["rf-renamer"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "rf-renamer",
            "--entry-point",
            "/opt/rf/GUI.py",
            "--python",
            "/usr/bin/python3",
            "--packages",
            "pandas,requests",
            "--no-pause",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.entry_point, Some(PathBuf::from("/opt/rf/GUI.py")));
        assert_eq!(cli.python, Some(PathBuf::from("/usr/bin/python3")));
        assert_eq!(cli.packages.as_deref(), Some("pandas,requests"));
        assert!(cli.no_pause);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["rf-renamer", "--bogus"]).is_err());
    }
}
