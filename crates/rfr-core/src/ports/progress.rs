//! Bootstrap progress emitter port.
//!
//! Lets the bootstrapper announce each step without knowing how (or
//! whether) the front end shows it. Adapters never print progress
//! themselves.

use std::path::PathBuf;

use crate::config::PackageList;

/// A step the bootstrapper is about to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEvent {
    /// About to look for a Python interpreter.
    CheckingRuntime,
    /// About to run pip for these packages.
    InstallingPackages { packages: PackageList },
    /// About to hand the entry point to the OS.
    Launching { entry_point: PathBuf },
}

/// Port for emitting bootstrap progress.
///
/// Called synchronously between steps; implementations must not block.
pub trait ProgressEmitterPort: Send + Sync {
    fn emit(&self, event: BootstrapEvent);
}

/// Discards all events. Used when no front end is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressEmitter;

impl NoopProgressEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProgressEmitterPort for NoopProgressEmitter {
    fn emit(&self, _event: BootstrapEvent) {}
}
