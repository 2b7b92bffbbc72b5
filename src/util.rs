#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use itertools::Itertools;
use which::{which, which_in};

/// Finds and returns the path to java binary
pub fn java_path() -> Result<OsString> {
    which("java")
        .map(PathBuf::into_os_string)
        .context("Cannot find a Java runtime on path (java)")
}

/// Platform-specific name of the java binary inside a JDK's `bin/`.
pub fn java_binary_name() -> &'static str {
    if cfg!(windows) { "java.exe" } else { "java" }
}

/// Command names to try when asked to run `original`, in order.
///
/// `original` always comes first, followed by the usual Maven spellings for
/// the platform (`.cmd` shims on Windows, the project wrapper on Unix).
/// Names already present are skipped, compared case-insensitively.
///
/// * `original`: the command the caller asked for, eg. `mvn`
/// * `windows`: whether to use the Windows fallbacks
pub fn fallback_commands(original: &str, windows: bool) -> Vec<String> {
    let fallbacks: &[&str] = if windows {
        &["mvn.cmd", "mvnw.cmd", "mvnw", "mvn"]
    } else {
        &["mvnw", "./mvnw", "mvn"]
    };

    std::iter::once(original)
        .chain(fallbacks.iter().copied())
        .unique_by(|name| name.to_ascii_lowercase())
        .map(String::from)
        .collect()
}

/// Resolves `candidate` to an executable path.
///
/// Bare names are searched for on `PATH`; names containing a path separator
/// (eg. `./mvnw`) are resolved relative to `cwd`. Returns `None` when nothing
/// executable is found.
pub fn resolve_command(candidate: &str, cwd: &Path) -> Option<PathBuf> {
    if candidate.trim().is_empty() {
        return None;
    }
    which_in(candidate, std::env::var_os("PATH"), cwd).ok()
}
