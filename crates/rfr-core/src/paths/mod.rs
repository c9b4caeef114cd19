//! Path utilities for locating the GUI entry point.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O; the CLI decides what to print
//! - The pure resolver takes its search roots as arguments so it can be
//!   tested without touching the process environment

mod entry_point;
mod error;

pub use entry_point::{
    EntryPointResolution, EntryPointSource, launcher_dir, resolve_entry_point,
    resolve_entry_point_in,
};
pub use error::PathError;
