//! Python interpreter discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

#[cfg(target_os = "windows")]
pub const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Names to try, in order: the explicit override alone, or the defaults.
pub fn interpreter_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    explicit.map_or_else(
        || PYTHON_CANDIDATES.iter().map(PathBuf::from).collect(),
        |path| vec![path.to_path_buf()],
    )
}

/// Resolve a candidate name or path through `PATH`.
pub fn resolve_on_path(candidate: &Path) -> Option<PathBuf> {
    match which::which(candidate) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("{} not found: {e}", candidate.display());
            None
        }
    }
}

/// `pythonw` next to the given interpreter, keeping its extension.
///
/// `C:\Python312\python.exe` -> `C:\Python312\pythonw.exe`
pub fn windowless_sibling(interpreter: &Path) -> Option<PathBuf> {
    let stem = interpreter.file_stem()?.to_str()?;
    if !stem.to_ascii_lowercase().starts_with("python") {
        return None;
    }
    let name = match interpreter.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("pythonw.{ext}"),
        None => "pythonw".to_string(),
    };
    Some(interpreter.with_file_name(name))
}

/// The interpreter to run the GUI with.
///
/// On Windows this is `pythonw` when it sits next to the probed interpreter,
/// so no console is ever allocated. Elsewhere, and as a Windows fallback, the
/// probed interpreter itself; the launcher's detach flags keep it off any
/// terminal.
pub fn windowless_interpreter(interpreter: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        if let Some(pythonw) = windowless_sibling(interpreter)
            && pythonw.is_file()
        {
            return pythonw;
        }
        warn!(
            "pythonw not found next to {}, launching with the console interpreter",
            interpreter.display()
        );
    }
    interpreter.to_path_buf()
}
