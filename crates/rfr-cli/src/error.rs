//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps it
//! to process exit codes.

use rfr_core::{BootstrapError, ConfigError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A bootstrap step failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 69: runtime missing (`EX_UNAVAILABLE`)
    /// - 75: package install failed, usually transient (`EX_TEMPFAIL`)
    /// - 71: GUI could not be spawned (`EX_OSERR`)
    /// - 78: invalid configuration (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Bootstrap(BootstrapError::RuntimeMissing { .. }) => 69,
            Self::Bootstrap(BootstrapError::DependencyInstallFailed { .. }) => 75,
            Self::Bootstrap(BootstrapError::SpawnFailed { .. }) => 71,
            Self::Config(_) => 78,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}
