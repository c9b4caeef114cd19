//! Package installer port.

use async_trait::async_trait;

use crate::config::PackageList;
use crate::error::BootstrapError;
use crate::ports::RuntimeInfo;

/// Port for installing Python packages into a probed runtime.
///
/// Implementations must be safe to call on every launch: asking for
/// packages that are already present is a no-op as far as the caller is
/// concerned.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageInstallerPort: Send + Sync {
    /// Install every package in `packages` for `runtime`.
    ///
    /// Returns [`BootstrapError::DependencyInstallFailed`] if the package
    /// manager cannot be run or exits non-zero.
    async fn install(
        &self,
        runtime: &RuntimeInfo,
        packages: &PackageList,
    ) -> Result<(), BootstrapError>;
}
