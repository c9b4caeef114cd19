//! Bootstrap error taxonomy.
//!
//! Every failure is terminal for the launcher. The `Display` text carries
//! the technical cause for logs; [`BootstrapError::user_message`] and
//! [`BootstrapError::hint`] carry the fixed text shown on the console.

use std::path::PathBuf;

use thiserror::Error;

pub const RUNTIME_MISSING_MESSAGE: &str = "Python is not installed or not added to PATH.";
pub const RUNTIME_MISSING_HINT: &str =
    "Please install Python and make sure it is available on your PATH.";

pub const INSTALL_FAILED_MESSAGE: &str = "Failed to install required packages.";
pub const INSTALL_FAILED_HINT: &str = "Please check your internet connection and try again.";

pub const SPAWN_FAILED_MESSAGE: &str = "Failed to launch the RF Renamer Tool.";

/// Errors that stop the bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No interpreter answered the version query.
    #[error("Python runtime not found (tried: {tried})")]
    RuntimeMissing { tried: String },

    /// The package manager could not be run or reported failure.
    #[error("Failed to install packages [{packages}]: {reason}")]
    DependencyInstallFailed { packages: String, reason: String },

    /// The GUI process could not be started.
    #[error("Failed to launch {}: {reason}", entry_point.display())]
    SpawnFailed { entry_point: PathBuf, reason: String },
}

impl BootstrapError {
    /// Fixed first line of the console diagnostic.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::RuntimeMissing { .. } => RUNTIME_MISSING_MESSAGE,
            Self::DependencyInstallFailed { .. } => INSTALL_FAILED_MESSAGE,
            Self::SpawnFailed { .. } => SPAWN_FAILED_MESSAGE,
        }
    }

    /// Fixed follow-up line telling the user what to do, if there is one.
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::RuntimeMissing { .. } => Some(RUNTIME_MISSING_HINT),
            Self::DependencyInstallFailed { .. } => Some(INSTALL_FAILED_HINT),
            Self::SpawnFailed { .. } => None,
        }
    }
}
