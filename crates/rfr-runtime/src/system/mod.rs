//! Runtime probe implementation.
//!
//! This module provides the `DefaultRuntimeProbe` which implements
//! `RuntimeProbePort` from rfr-core. It resolves interpreter candidates on
//! `PATH` and runs their version query.

mod commands;
mod interpreter;

use async_trait::async_trait;
use rfr_core::ports::{RuntimeInfo, RuntimeProbePort};
use rfr_core::{BootstrapError, LaunchConfig};
use tracing::debug;

pub use commands::{get_command_version, parse_python_version};
pub use interpreter::{
    PYTHON_CANDIDATES, interpreter_candidates, resolve_on_path, windowless_interpreter,
    windowless_sibling,
};

/// Default implementation of `RuntimeProbePort`.
///
/// The first candidate that is found on `PATH` and answers `--version`
/// with status zero wins. Construct it in the CLI composition root.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRuntimeProbe;

impl DefaultRuntimeProbe {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RuntimeProbePort for DefaultRuntimeProbe {
    async fn probe(&self, config: &LaunchConfig) -> Result<RuntimeInfo, BootstrapError> {
        let candidates = interpreter_candidates(config.python.as_deref());

        for candidate in &candidates {
            let Some(interpreter) = resolve_on_path(candidate) else {
                continue;
            };

            debug!("Probing {}", interpreter.display());
            if let Some(line) = get_command_version(&interpreter, "--version").await {
                let version = parse_python_version(&line).unwrap_or_default();
                return Ok(RuntimeInfo {
                    interpreter,
                    version,
                });
            }
        }

        Err(BootstrapError::RuntimeMissing {
            tried: candidates
                .iter()
                .map(|c| c.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
