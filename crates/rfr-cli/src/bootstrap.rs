//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the concrete adapters are wired
//! together for the launcher:
//! - Runtime probe (via rfr-runtime)
//! - pip installer (via rfr-runtime)
//! - Detached GUI launcher (via rfr-runtime)
//! - Console progress output (via presentation)

use std::path::PathBuf;
use std::sync::Arc;

use rfr_core::ports::{
    GuiLauncherPort, PackageInstallerPort, ProgressEmitterPort, RuntimeProbePort,
};
use rfr_core::{
    Bootstrapper, DEFAULT_ENTRY_POINT, EntryPointSource, LaunchConfig, PackageList,
    resolve_entry_point,
};
use rfr_runtime::{DefaultRuntimeProbe, DetachedGuiLauncher, PipInstaller};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::ConsoleProgress;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// GUI script as given (not yet resolved).
    pub entry_point: PathBuf,
    /// Explicit interpreter, if any.
    pub python: Option<PathBuf>,
    /// Packages to install before launch.
    pub packages: PackageList,
}

impl CliConfig {
    /// Build config from parsed arguments, falling back to the defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let packages = match cli.packages.as_deref() {
            Some(raw) => PackageList::parse(raw)?,
            None => PackageList::default(),
        };

        Ok(Self {
            entry_point: cli
                .entry_point
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY_POINT)),
            python: cli.python.clone(),
            packages,
        })
    }
}

/// Fully composed launcher context.
pub struct CliContext {
    /// Sequencer over the OS adapters.
    pub bootstrapper: Bootstrapper,
    /// Launch configuration with the entry point resolved.
    pub launch: LaunchConfig,
}

/// Resolve the entry point and compose the real adapters.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    bootstrap_with(
        config,
        Arc::new(DefaultRuntimeProbe::new()),
        Arc::new(PipInstaller::new()),
        Arc::new(DetachedGuiLauncher::new()),
        Arc::new(ConsoleProgress),
    )
}

/// Compose the launcher over arbitrary ports.
pub fn bootstrap_with(
    config: &CliConfig,
    probe: Arc<dyn RuntimeProbePort>,
    installer: Arc<dyn PackageInstallerPort>,
    launcher: Arc<dyn GuiLauncherPort>,
    progress: Arc<dyn ProgressEmitterPort>,
) -> Result<CliContext, CliError> {
    let resolution = resolve_entry_point(&config.entry_point)?;
    match resolution.source {
        EntryPointSource::NotFound => warn!(
            path = %resolution.path.display(),
            "GUI entry point not found"
        ),
        source => debug!(
            path = %resolution.path.display(),
            ?source,
            "Resolved GUI entry point"
        ),
    }

    let mut launch = LaunchConfig::with_defaults()
        .with_entry_point(resolution.path)?
        .with_packages(config.packages.clone());
    if let Some(python) = &config.python {
        launch = launch.with_python(python);
    }

    Ok(CliContext {
        bootstrapper: Bootstrapper::new(probe, installer, launcher).with_progress(progress),
        launch,
    })
}
