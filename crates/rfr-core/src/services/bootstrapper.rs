//! The bootstrap sequence: probe, install, launch, exit.
//!
//! Steps run strictly in order and the first failure ends the run. The
//! service owns no processes; it only sequences the three ports and records
//! the stage it reached.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::LaunchConfig;
use crate::error::BootstrapError;
use crate::ports::{
    BootstrapEvent, GuiLauncherPort, LaunchReceipt, NoopProgressEmitter, PackageInstallerPort,
    ProgressEmitterPort, RuntimeInfo, RuntimeProbePort,
};

/// Where the bootstrap sequence currently is (or stopped).
///
/// `Init → CheckRuntime → {Failed, InstallDeps} → {Failed, Launch} → {Failed, Exited}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStage {
    Init,
    CheckRuntime,
    InstallDeps,
    Launch,
    /// The GUI was handed to the OS; terminal, success.
    Exited,
    /// A step failed; terminal.
    Failed,
}

impl BootstrapStage {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exited | Self::Failed)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub runtime: RuntimeInfo,
    pub entry_point: PathBuf,
    pub receipt: LaunchReceipt,
}

/// Drives the probe → install → launch sequence over injected ports.
pub struct Bootstrapper {
    probe: Arc<dyn RuntimeProbePort>,
    installer: Arc<dyn PackageInstallerPort>,
    launcher: Arc<dyn GuiLauncherPort>,
    progress: Arc<dyn ProgressEmitterPort>,
    stage: BootstrapStage,
}

impl Bootstrapper {
    pub fn new(
        probe: Arc<dyn RuntimeProbePort>,
        installer: Arc<dyn PackageInstallerPort>,
        launcher: Arc<dyn GuiLauncherPort>,
    ) -> Self {
        Self {
            probe,
            installer,
            launcher,
            progress: Arc::new(NoopProgressEmitter::new()),
            stage: BootstrapStage::Init,
        }
    }

    /// Report each step to `progress` before it starts.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressEmitterPort>) -> Self {
        self.progress = progress;
        self
    }

    /// Stage reached by the most recent [`run`](Self::run).
    pub const fn stage(&self) -> BootstrapStage {
        self.stage
    }

    /// Run the full sequence once.
    ///
    /// Returns as soon as the GUI spawn is accepted; the GUI process is not
    /// waited on. A `Bootstrapper` can be run again, which restarts from
    /// [`BootstrapStage::Init`].
    pub async fn run(&mut self, config: &LaunchConfig) -> Result<BootstrapReport, BootstrapError> {
        self.stage = BootstrapStage::Init;

        self.enter(BootstrapStage::CheckRuntime);
        self.progress.emit(BootstrapEvent::CheckingRuntime);
        let runtime = match self.probe.probe(config).await {
            Ok(runtime) => runtime,
            Err(e) => return Err(self.fail(e)),
        };
        info!(
            interpreter = %runtime.interpreter.display(),
            version = %runtime.version,
            "Python runtime found"
        );

        self.enter(BootstrapStage::InstallDeps);
        info!(packages = %config.packages, "Ensuring required packages are installed");
        self.progress.emit(BootstrapEvent::InstallingPackages {
            packages: config.packages.clone(),
        });
        if let Err(e) = self.installer.install(&runtime, &config.packages).await {
            return Err(self.fail(e));
        }

        self.enter(BootstrapStage::Launch);
        self.progress.emit(BootstrapEvent::Launching {
            entry_point: config.entry_point.clone(),
        });
        let receipt = match self.launcher.launch(&runtime, config) {
            Ok(receipt) => receipt,
            Err(e) => return Err(self.fail(e)),
        };
        info!(
            pid = receipt.pid,
            entry_point = %config.entry_point.display(),
            "GUI launched detached"
        );

        self.enter(BootstrapStage::Exited);
        Ok(BootstrapReport {
            runtime,
            entry_point: config.entry_point.clone(),
            receipt,
        })
    }

    fn enter(&mut self, stage: BootstrapStage) {
        debug!(from = ?self.stage, to = ?stage, "Bootstrap stage transition");
        self.stage = stage;
    }

    fn fail(&mut self, err: BootstrapError) -> BootstrapError {
        debug!(stage = ?self.stage, error = %err, "Bootstrap step failed");
        self.stage = BootstrapStage::Failed;
        err
    }
}
