//! Launch configuration for the bootstrapper.
//!
//! Everything the launcher needs to know before it runs lives here as data:
//! the GUI entry point, an optional interpreter override and the list of
//! Python packages the GUI imports. Keeping the list out of control flow
//! lets tests swap in a fake installer and assert on exactly what is asked
//! for.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Default GUI entry point, resolved relative to the launcher.
pub const DEFAULT_ENTRY_POINT: &str = "GUI.py";

/// Packages the GUI imports at startup.
pub const DEFAULT_PACKAGES: &[&str] = &["pandas", "openpyxl", "requests", "Pillow"];

/// Errors raised while building a [`LaunchConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No packages were given.
    #[error("Package list cannot be empty")]
    EmptyPackageList,

    /// A name is not a valid Python distribution name.
    #[error("Invalid package name: {0:?}")]
    InvalidPackageName(String),

    /// The same distribution appears twice (after name normalization).
    #[error("Package listed more than once: {0}")]
    DuplicatePackage(String),

    /// The entry point path was blank.
    #[error("Entry point path cannot be empty")]
    EmptyEntryPoint,
}

/// Ordered, non-empty list of Python distribution names.
///
/// Construction validates every name, so holders of a `PackageList` never
/// need to re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList(Vec<String>);

impl PackageList {
    /// Build a list from names, validating each one.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut packages = Vec::new();
        let mut seen = HashSet::new();

        for name in names {
            let name: String = name.into();
            let name = name.trim();

            if !is_valid_package_name(name) {
                return Err(ConfigError::InvalidPackageName(name.to_string()));
            }
            if !seen.insert(normalize_package_name(name)) {
                return Err(ConfigError::DuplicatePackage(name.to_string()));
            }
            packages.push(name.to_string());
        }

        if packages.is_empty() {
            return Err(ConfigError::EmptyPackageList);
        }

        Ok(Self(packages))
    }

    /// Parse a comma or whitespace separated list (`"pandas, requests"`).
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Self::new(
            raw.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty()),
        )
    }

    /// The names, in install order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PackageList {
    fn default() -> Self {
        Self(DEFAULT_PACKAGES.iter().map(ToString::to_string).collect())
    }
}

impl fmt::Display for PackageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Configuration consumed by [`crate::services::Bootstrapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// GUI script handed to the windowless interpreter.
    pub entry_point: PathBuf,
    /// Explicit interpreter; `None` means search `PATH`.
    pub python: Option<PathBuf>,
    /// Packages to ensure before launch.
    pub packages: PackageList,
}

impl LaunchConfig {
    /// Create config with the built-in defaults.
    pub fn with_defaults() -> Self {
        Self {
            entry_point: PathBuf::from(DEFAULT_ENTRY_POINT),
            python: None,
            packages: PackageList::default(),
        }
    }

    /// Override the GUI entry point.
    pub fn with_entry_point(mut self, entry_point: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let entry_point = entry_point.into();
        if entry_point.as_os_str().is_empty() {
            return Err(ConfigError::EmptyEntryPoint);
        }
        self.entry_point = entry_point;
        Ok(self)
    }

    /// Pin the interpreter instead of searching `PATH`.
    #[must_use]
    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = Some(python.into());
        self
    }

    /// Replace the package list.
    #[must_use]
    pub fn with_packages(mut self, packages: PackageList) -> Self {
        self.packages = packages;
        self
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// ASCII alphanumerics, with `.`, `-` and `_` allowed between them.
fn is_valid_package_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last))
            if first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
}

/// Lowercase and collapse separator runs to `-`, so `Pillow` == `pillow`
/// and `typing_extensions` == `typing-extensions`.
fn normalize_package_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.chars() {
        if matches!(c, '.' | '-' | '_') {
            if !in_separator {
                normalized.push('-');
            }
            in_separator = true;
        } else {
            normalized.push(c.to_ascii_lowercase());
            in_separator = false;
        }
    }
    normalized
}
