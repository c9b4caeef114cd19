//! Services that sequence the ports.

mod bootstrapper;

pub use bootstrapper::{BootstrapReport, BootstrapStage, Bootstrapper};
