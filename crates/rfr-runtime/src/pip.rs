//! Package installation through `pip`.
//!
//! pip is run as `<interpreter> -m pip` so packages land in the same
//! environment that was probed, whichever `pip` happens to be first on
//! `PATH`.

use std::process::Stdio;

use async_trait::async_trait;
use rfr_core::ports::{PackageInstallerPort, RuntimeInfo};
use rfr_core::{BootstrapError, PackageList};
use tokio::process::Command;
use tracing::debug;

/// Flags that keep pip terse and stop it checking for its own updates.
pub const PIP_QUIET_FLAGS: &[&str] = &["--disable-pip-version-check", "--quiet"];

/// Arguments passed to the interpreter for one install run.
pub fn pip_install_args(packages: &PackageList) -> Vec<String> {
    ["-m", "pip", "install"]
        .iter()
        .chain(PIP_QUIET_FLAGS)
        .map(ToString::to_string)
        .chain(packages.iter().map(String::from))
        .collect()
}

/// `PackageInstallerPort` backed by `python -m pip install`.
///
/// pip's own output is inherited so the user sees its error text when an
/// install fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipInstaller;

impl PipInstaller {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PackageInstallerPort for PipInstaller {
    async fn install(
        &self,
        runtime: &RuntimeInfo,
        packages: &PackageList,
    ) -> Result<(), BootstrapError> {
        let args = pip_install_args(packages);
        debug!("Running {} {}", runtime.interpreter.display(), args.join(" "));

        let status = Command::new(&runtime.interpreter)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| BootstrapError::DependencyInstallFailed {
                packages: packages.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(BootstrapError::DependencyInstallFailed {
                packages: packages.to_string(),
                reason: format!("pip exited with {status}"),
            });
        }

        Ok(())
    }
}
