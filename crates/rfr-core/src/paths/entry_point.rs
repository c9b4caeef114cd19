//! GUI entry-point resolution.
//!
//! Relative entry points are looked up in the working directory first and
//! then next to the launcher executable, so a launcher sitting beside
//! `GUI.py` works no matter where it was started from.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PathError;

/// How the entry point was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPointSource {
    /// The configured path was absolute and used as-is.
    Absolute,
    /// Found relative to the current working directory.
    WorkingDir,
    /// Found next to the launcher executable.
    LauncherDir,
    /// No candidate exists; the path is the working-directory candidate.
    NotFound,
}

/// Resolution result for the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointResolution {
    /// Absolute path to hand to the launcher.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: EntryPointSource,
}

impl EntryPointResolution {
    pub fn exists(&self) -> bool {
        !matches!(self.source, EntryPointSource::NotFound)
    }
}

/// Directory containing the running launcher, if it can be determined.
pub fn launcher_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Resolve `raw` against the current directory and the launcher directory.
pub fn resolve_entry_point(raw: &Path) -> Result<EntryPointResolution, PathError> {
    let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    Ok(resolve_entry_point_in(raw, &cwd, launcher_dir().as_deref()))
}

/// Pure resolver over explicit search roots.
///
/// Resolution order:
/// 1. `raw` itself when absolute
/// 2. `cwd.join(raw)` if it is a file
/// 3. `launcher_dir.join(raw)` if it is a file
/// 4. otherwise `cwd.join(raw)`, marked [`EntryPointSource::NotFound`]
pub fn resolve_entry_point_in(
    raw: &Path,
    cwd: &Path,
    launcher_dir: Option<&Path>,
) -> EntryPointResolution {
    if raw.is_absolute() {
        let source = if raw.is_file() {
            EntryPointSource::Absolute
        } else {
            EntryPointSource::NotFound
        };
        return EntryPointResolution {
            path: raw.to_path_buf(),
            source,
        };
    }

    let in_cwd = cwd.join(raw);
    if in_cwd.is_file() {
        return EntryPointResolution {
            path: in_cwd,
            source: EntryPointSource::WorkingDir,
        };
    }

    if let Some(dir) = launcher_dir {
        let beside_launcher = dir.join(raw);
        if beside_launcher.is_file() {
            debug!(
                "Entry point not in working directory, using {}",
                beside_launcher.display()
            );
            return EntryPointResolution {
                path: beside_launcher,
                source: EntryPointSource::LauncherDir,
            };
        }
    }

    EntryPointResolution {
        path: in_cwd,
        source: EntryPointSource::NotFound,
    }
}
