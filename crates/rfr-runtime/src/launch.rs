//! Detached, windowless GUI launch.
//!
//! The GUI is started with null stdio, in its own process group (Unix) or
//! as a detached process (Windows), so it neither holds the launcher's
//! console open nor dies with it. The `Child` handle is dropped right after
//! spawn: std never waits on or kills a child when its handle is dropped.

use std::process::{Command, Stdio};

use rfr_core::ports::{GuiLauncherPort, LaunchReceipt, RuntimeInfo};
use rfr_core::{BootstrapError, LaunchConfig};
use tracing::debug;

use crate::system::windowless_interpreter;

/// `GuiLauncherPort` that spawns the entry point and forgets it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedGuiLauncher;

impl DetachedGuiLauncher {
    pub const fn new() -> Self {
        Self
    }
}

impl GuiLauncherPort for DetachedGuiLauncher {
    fn launch(
        &self,
        runtime: &RuntimeInfo,
        config: &LaunchConfig,
    ) -> Result<LaunchReceipt, BootstrapError> {
        let entry_point = &config.entry_point;
        let spawn_failed = |reason: String| BootstrapError::SpawnFailed {
            entry_point: entry_point.clone(),
            reason,
        };

        if !entry_point.is_file() {
            return Err(spawn_failed("entry point not found".to_string()));
        }

        let interpreter = windowless_interpreter(&runtime.interpreter);

        let mut cmd = Command::new(&interpreter);
        cmd.arg(entry_point)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The GUI keeps its config and temp files next to itself
        if entry_point.is_absolute() {
            if let Some(dir) = entry_point.parent() {
                cmd.current_dir(dir);
            }
        }

        detach(&mut cmd);

        debug!(
            "Spawning {} {}",
            interpreter.display(),
            entry_point.display()
        );
        let child = cmd.spawn().map_err(|e| spawn_failed(e.to_string()))?;

        Ok(LaunchReceipt { pid: child.id() })
    }
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    use windows::Win32::System::Threading::{CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS};

    cmd.creation_flags((DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP).0);
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;

    cmd.process_group(0);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}
