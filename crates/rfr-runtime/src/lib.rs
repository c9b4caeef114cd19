//! OS adapters for the RF Renamer Tool launcher.
//!
//! Implements the `rfr-core` ports with real process execution:
//! interpreter probing, `pip` installs and the detached GUI launch.

#![deny(unsafe_code)]

pub mod launch;
pub mod pip;
pub mod system;

pub use launch::DetachedGuiLauncher;
pub use pip::{PipInstaller, pip_install_args};
pub use system::DefaultRuntimeProbe;
