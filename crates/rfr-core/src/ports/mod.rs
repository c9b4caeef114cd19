//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the bootstrapper expects from the operating system.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `std::process` types in any signature
//! - One intent per port: probe, install, launch, report progress
//! - Implementations live in `rfr-runtime`; tests substitute mocks

pub mod gui_launcher;
pub mod package_installer;
pub mod progress;
pub mod runtime_probe;

pub use gui_launcher::{GuiLauncherPort, LaunchReceipt};
pub use package_installer::PackageInstallerPort;
pub use progress::{BootstrapEvent, NoopProgressEmitter, ProgressEmitterPort};
pub use runtime_probe::{RuntimeInfo, RuntimeProbePort};

#[cfg(test)]
pub use gui_launcher::MockGuiLauncherPort;
#[cfg(test)]
pub use package_installer::MockPackageInstallerPort;
#[cfg(test)]
pub use runtime_probe::MockRuntimeProbePort;
