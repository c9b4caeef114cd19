//! Command-line launcher for the RF Renamer Tool.
//!
//! Checks for a Python runtime, installs the tool's packages and starts its
//! GUI detached from the console. All infrastructure is composed in
//! [`bootstrap`]; the binary only parses arguments and reports outcomes.

#![deny(unused_crate_dependencies)]

// Used only by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod error;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use error::CliError;
pub use parser::Cli;
