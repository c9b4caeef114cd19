//! GUI launcher port.
//!
//! # Lifecycle contract
//!
//! A launch hands the GUI process to the operating system and returns as
//! soon as the spawn is accepted. The caller never tracks, waits on, or
//! receives the exit status of the child; the receipt exists for logging
//! only.

use crate::config::LaunchConfig;
use crate::error::BootstrapError;
use crate::ports::RuntimeInfo;

/// Proof that the OS accepted the spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReceipt {
    /// OS process id of the GUI at spawn time.
    pub pid: u32,
}

/// Port for starting the GUI entry point detached and windowless.
#[cfg_attr(test, mockall::automock)]
pub trait GuiLauncherPort: Send + Sync {
    /// Start `config.entry_point` with the windowless variant of `runtime`,
    /// with no arguments.
    ///
    /// Returns [`BootstrapError::SpawnFailed`] if the entry point does not
    /// exist or the OS refuses the spawn.
    fn launch(
        &self,
        runtime: &RuntimeInfo,
        config: &LaunchConfig,
    ) -> Result<LaunchReceipt, BootstrapError>;
}
