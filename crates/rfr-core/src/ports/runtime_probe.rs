//! Runtime probe port.
//!
//! Answers one question: is there a Python interpreter that responds to its
//! version query? The adapter in `rfr-runtime` does the actual `PATH`
//! search and process execution.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::LaunchConfig;
use crate::error::BootstrapError;

/// A Python interpreter that answered `--version` with status zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Resolved interpreter path.
    pub interpreter: PathBuf,
    /// Version reported by the interpreter, e.g. `3.12.1`. Empty when the
    /// output could not be parsed.
    pub version: String,
}

/// Port for locating a working Python runtime.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuntimeProbePort: Send + Sync {
    /// Probe for an interpreter, honouring `config.python` when set.
    ///
    /// Returns [`BootstrapError::RuntimeMissing`] when no candidate
    /// answers the version query with a zero exit status.
    async fn probe(&self, config: &LaunchConfig) -> Result<RuntimeInfo, BootstrapError>;
}
