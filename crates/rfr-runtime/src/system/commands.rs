//! Generic command version extraction.
//!
//! A tool counts as present when its version query exits with status zero;
//! the text is only used for logging.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

/// Run `cmd <version_flag>` and return the first line of its output.
///
/// Returns `None` if the command cannot be spawned or exits non-zero. A
/// successful command that prints nothing yields `Some("")`.
pub async fn get_command_version(cmd: &Path, version_flag: &str) -> Option<String> {
    let output = match Command::new(cmd)
        .arg(version_flag)
        .stdin(Stdio::null())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            debug!("Failed to run {} {version_flag}: {e}", cmd.display());
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "{} {version_flag} exited with {}",
            cmd.display(),
            output.status
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Python 2 and some shims print the version to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    Some(
        text.lines()
            .next()
            .map(|line| line.trim().to_string())
            .unwrap_or_default(),
    )
}

/// "Python 3.12.1" -> "3.12.1"
pub fn parse_python_version(line: &str) -> Option<String> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some(name), Some(version))
            if name.eq_ignore_ascii_case("python")
                && version.starts_with(|c: char| c.is_ascii_digit()) =>
        {
            Some(version.to_string())
        }
        _ => None,
    }
}
