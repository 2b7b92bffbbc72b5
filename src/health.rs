#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use walkdir::WalkDir;

use crate::{
    process::run_collect,
    util::{java_binary_name, java_path},
};

/// Oldest Java major version the graded project builds with.
pub const REQUIRED_MAJOR_VERSION: u32 = 21;

/// Environment variable pointing at the preferred JDK.
pub const JAVA_HOME_ENV: &str = "JAVA_HOME";

/// Subdirectories inspected per install root while scanning for JDKs.
const MAX_SCAN_ENTRIES: usize = 20;

/// Extracts the major version from a Java version string.
///
/// Handles both the legacy `1.x` scheme (`1.8.0_292` -> 8) and the modern one
/// (`21.0.3` -> 21). Returns `None` for anything unparseable.
pub fn extract_major_version(version: &str) -> Option<u32> {
    let version = version.trim();
    let component = match version.strip_prefix("1.") {
        Some(rest) => rest.split(['.', '_']).next()?,
        None => version.split(['.', '-', '+']).next()?,
    };
    component.parse().ok()
}

/// Whether `version` is at least [`REQUIRED_MAJOR_VERSION`].
pub fn is_compatible(version: &str) -> bool {
    extract_major_version(version).is_some_and(|major| major >= REQUIRED_MAJOR_VERSION)
}

/// Pulls the quoted version out of `java -version` output, eg.
/// `openjdk version "21.0.3" 2024-04-16` -> `21.0.3`.
pub fn parse_java_version_output(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains("version"))
        .find_map(|line| {
            let (_, rest) = line.split_once('"')?;
            let (version, _) = rest.split_once('"')?;
            Some(version.to_string())
        })
}

/// Runs `java -version` and returns the reported version.
pub async fn current_java_version() -> Result<String> {
    let java = java_path()?;
    let output = run_collect(&java, &[OsString::from("-version")], None, None)
        .await
        .context("Could not run `java -version`")?;

    // java prints its version banner on stderr
    let banner = format!("{}\n{}", output.stderr_lossy(), output.stdout_lossy());
    parse_java_version_output(&banner)
        .with_context(|| format!("Could not find a version in `java -version` output:\n{banner}"))
}

/// Whether `dir` looks like an installation of `required`: its name mentions
/// `jdk` or `java` along with the version, and it has a `bin` directory.
pub fn is_version_match(dir: &Path, required: u32) -> bool {
    let Some(name) = dir.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
        return false;
    };

    (name.contains("jdk") || name.contains("java"))
        && name.contains(&required.to_string())
        && dir.join("bin").exists()
}

/// Whether `dir/bin/java` exists and can be executed.
pub fn is_valid_java_installation(dir: &Path) -> bool {
    let Ok(metadata) = dir.join("bin").join(java_binary_name()).metadata() else {
        return false;
    };
    metadata.is_file() && is_executable(&metadata)
}

/// Whether any execute bit is set.
#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o111 != 0
}

/// Windows has no execute bit; `java.exe` being a file is enough.
#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// Checks the first few subdirectories of `dir` for a matching install.
/// Unreadable directories are skipped.
pub fn scan_directory_for_jdk(dir: &Path, required: u32) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .take(MAX_SCAN_ENTRIES)
        .map(|e| e.into_path())
        .filter(|p| is_version_match(p, required))
        .collect()
}

/// Usual install roots for the current platform.
fn install_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if cfg!(windows) {
        for var in ["PROGRAMFILES", "PROGRAMFILES(X86)"] {
            if let Some(base) = std::env::var_os(var) {
                let base = PathBuf::from(base);
                roots.push(base.join("Java"));
                roots.push(base.join(format!("jdk-{REQUIRED_MAJOR_VERSION}")));
                roots.push(base.join("openjdk"));
            }
        }
        roots.push(PathBuf::from(r"C:\Program Files\Java"));
        roots.push(PathBuf::from(format!(r"C:\jdk-{REQUIRED_MAJOR_VERSION}")));
    } else {
        for root in ["/usr/lib/jvm", "/usr/local/java", "/opt/java", "/opt/jdk"] {
            roots.push(PathBuf::from(root));
        }
        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            roots.push(home.join(".jdks"));
            roots.push(home.join("java"));
        }
    }

    roots
}

/// Scans `roots` for installs of `required`, keeping only those with a
/// runnable `bin/java`.
pub fn scan_roots(roots: &[PathBuf], required: u32) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for root in roots.iter().filter(|r| r.is_dir()) {
        if is_version_match(root, required) {
            found.push(root.clone());
        } else {
            found.extend(scan_directory_for_jdk(root, required));
        }
    }

    found
        .into_iter()
        .filter(|p| is_valid_java_installation(p))
        .unique()
        .collect()
}

/// Scans the platform's usual install roots for installs of `required`.
pub fn scan_for_jdks(required: u32) -> Vec<PathBuf> {
    scan_roots(&install_roots(), required)
}

/// What [`check_java_environment`] found.
#[derive(Debug, Clone, Serialize)]
pub struct JavaReport {
    /// Version reported by `java -version`, if java could be run.
    pub current_version: Option<String>,
    /// Value of `JAVA_HOME`, if set.
    pub java_home:       Option<String>,
    /// Whether the current version satisfies [`REQUIRED_MAJOR_VERSION`].
    pub compatible:      bool,
    /// Matching installs found on disk. Only scanned when incompatible.
    pub candidates:      Vec<PathBuf>,
}

/// Checks the active Java version and, when it is too old or missing, looks
/// for a suitable JDK to point `JAVA_HOME` at.
pub async fn check_java_environment() -> Result<JavaReport> {
    tracing::info!("Checking Java version...");

    let current_version = match current_java_version().await {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::warn!("{e:#}");
            None
        }
    };
    let java_home = std::env::var(JAVA_HOME_ENV).ok();
    let compatible = current_version.as_deref().is_some_and(is_compatible);

    tracing::info!(
        "Current Java version: {}",
        current_version.as_deref().unwrap_or("unknown")
    );
    tracing::info!("Current JAVA_HOME: {}", java_home.as_deref().unwrap_or("unset"));

    let candidates = if compatible {
        tracing::info!("Java version is compatible (Java {REQUIRED_MAJOR_VERSION} or later)");
        Vec::new()
    } else {
        tracing::warn!(
            "Java version is NOT compatible. This project requires Java \
             {REQUIRED_MAJOR_VERSION} or later."
        );
        let found = scan_for_jdks(REQUIRED_MAJOR_VERSION);
        if found.is_empty() {
            tracing::warn!(
                "No Java {REQUIRED_MAJOR_VERSION} installation found. Eclipse Temurin builds are \
                 available at https://adoptium.net/temurin/releases/"
            );
        } else {
            for (i, path) in found.iter().enumerate() {
                tracing::info!("  {}) {}", i + 1, path.display());
            }
            tracing::info!(
                "Set {JAVA_HOME_ENV} to {} and restart your shell to use it.",
                found[0].display()
            );
        }
        found
    };

    Ok(JavaReport {
        current_version,
        java_home,
        compatible,
        candidates,
    })
}
