//! End-to-end runs of the `rf-renamer` binary.
//!
//! Each test controls `PATH` and the working directory, and uses a fake
//! `python3` shell script that logs its invocations to `calls.log`.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, Instant};

use tempfile::TempDir;

fn fake_python(dir: &Path, pip_status: i32) -> PathBuf {
    let path = dir.join("python3");
    let log = dir.join("calls.log");
    let script = format!(
        r#"#!/bin/sh
case "$1" in
  --version)
    echo "Python 3.12.1"
    ;;
  -m)
    echo "pip $*" >> "{log}"
    exit {pip_status}
    ;;
  *)
    echo "gui $*" >> "{log}"
    sleep 10
    ;;
esac
"#,
        log = log.display(),
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn wait_for_gui(dir: &Path) -> Option<String> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(line) = calls(dir).into_iter().find(|l| l.starts_with("gui ")) {
            return Some(line);
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    None
}

fn launcher(path: &str, cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rf-renamer"));
    cmd.current_dir(cwd)
        .env("PATH", path)
        .env("RFR_NO_PAUSE", "1")
        .env_remove("RFR_GUI_SCRIPT")
        .env_remove("RFR_PYTHON")
        .env_remove("RFR_PACKAGES")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_python_on_path() {
    let app = TempDir::new().unwrap();
    fs::write(app.path().join("GUI.py"), "").unwrap();

    let output = launcher("", app.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(69));
    assert!(stdout(&output).contains("Checking for Python installation..."));
    let err = stderr(&output);
    assert!(
        err.contains("ERROR: Python is not installed or not added to PATH."),
        "stderr: {err}"
    );
    assert!(err.contains("Please install Python"));
}

#[test]
fn test_install_failure_skips_launch() {
    let app = TempDir::new().unwrap();
    fs::write(app.path().join("GUI.py"), "").unwrap();
    let bin = TempDir::new().unwrap();
    fake_python(bin.path(), 1);
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    let output = launcher(&path, app.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(75));
    let err = stderr(&output);
    assert!(
        err.contains("ERROR: Failed to install required packages."),
        "stderr: {err}"
    );
    assert!(err.contains("Please check your internet connection and try again."));

    let log = calls(bin.path());
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("pip -m pip install"));
    assert!(!log.iter().any(|l| l.starts_with("gui ")));
}

#[test]
fn test_launch_returns_without_waiting_for_gui() {
    let app = TempDir::new().unwrap();
    fs::write(app.path().join("GUI.py"), "").unwrap();
    let bin = TempDir::new().unwrap();
    fake_python(bin.path(), 0);
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    let started = Instant::now();
    let output = launcher(&path, app.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(started.elapsed() < Duration::from_secs(8));
    let out = stdout(&output);
    assert!(out.contains("Installing required packages (pandas, openpyxl, requests, Pillow)..."));
    assert!(out.contains("RF Renamer Tool started (pid "));

    let gui = wait_for_gui(bin.path()).expect("GUI was never started");
    assert!(gui.ends_with("GUI.py"), "gui call: {gui}");
}

#[test]
fn test_repeated_runs_each_install_and_launch() {
    let app = TempDir::new().unwrap();
    fs::write(app.path().join("GUI.py"), "").unwrap();
    let bin = TempDir::new().unwrap();
    fake_python(bin.path(), 0);
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    for _ in 0..2 {
        let output = launcher(&path, app.path()).output().unwrap();
        assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut guis = 0;
    while Instant::now() < deadline {
        guis = calls(bin.path())
            .iter()
            .filter(|l| l.starts_with("gui "))
            .count();
        if guis == 2 {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    let pips = calls(bin.path())
        .iter()
        .filter(|l| l.starts_with("pip "))
        .count();
    assert_eq!(pips, 2);
    assert_eq!(guis, 2);
}

#[test]
fn test_missing_gui_script() {
    let app = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_python(bin.path(), 0);
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    let output = launcher(&path, app.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(71));
    let err = stderr(&output);
    assert!(
        err.contains("ERROR: Failed to launch the RF Renamer Tool."),
        "stderr: {err}"
    );
    assert!(err.contains("entry point not found"));
    assert!(!calls(bin.path()).iter().any(|l| l.starts_with("gui ")));
}

#[test]
fn test_invalid_package_override_is_config_error() {
    let app = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_python(bin.path(), 0);
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    let output = launcher(&path, app.path())
        .env("RFR_PACKAGES", "pandas pand@s")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("ERROR: Configuration error: Invalid package name"));
    assert!(calls(bin.path()).is_empty());
}
