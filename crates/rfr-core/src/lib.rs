//! Core domain for the RF Renamer Tool launcher.
//!
//! Defines the launch configuration, the bootstrap error taxonomy, the
//! ports the launcher needs from the operating system and the
//! [`Bootstrapper`](services::Bootstrapper) that sequences them. Nothing in
//! this crate executes a process; see `rfr-runtime` for the adapters.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{
    ConfigError, DEFAULT_ENTRY_POINT, DEFAULT_PACKAGES, LaunchConfig, PackageList,
};
pub use error::BootstrapError;
pub use paths::{EntryPointResolution, EntryPointSource, PathError, resolve_entry_point};
pub use ports::{
    BootstrapEvent, GuiLauncherPort, LaunchReceipt, NoopProgressEmitter, PackageInstallerPort,
    ProgressEmitterPort, RuntimeInfo, RuntimeProbePort,
};
pub use services::{BootstrapReport, BootstrapStage, Bootstrapper};
