#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Runs the project's build tool (Maven by default).
//!
//! The configured command names are tried in order. A name that does not
//! resolve to an executable moves on to the next one; a name that resolves
//! but cannot be run stops the search with [`LaunchError::Failed`].

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use anyhow::{Context, Result, ensure};
use thiserror::Error;
use walkdir::WalkDir;

use crate::{config::RunnerConfig, process::run_collect, util::resolve_command};

/// Why a build tool could not be run.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// None of the candidate command names resolved to an executable.
    #[error(
        "No build tool executable found (tried: {}). Install Apache Maven, add it to your \
         PATH, or add a Maven wrapper (mvnw/mvnw.cmd) to the project root.",
        tried.join(", ")
    )]
    NotFound {
        /// Every command name that was tried, in order.
        tried: Vec<String>,
    },
    /// A candidate resolved, but running it failed.
    #[error("Failed to run `{}`: {source:#}", program.display())]
    Failed {
        /// Resolved path of the executable.
        program: PathBuf,
        /// What went wrong while spawning or waiting on it.
        source:  anyhow::Error,
    },
}

/// A build tool invocation that ran to completion.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Resolved path of the executable that ran.
    pub program: PathBuf,
    /// Its exit status.
    pub status:  ExitStatus,
    /// Everything it wrote to stdout.
    pub stdout:  String,
    /// Everything it wrote to stderr.
    pub stderr:  String,
}

impl BuildOutcome {
    /// Whether the build tool exited successfully.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Runs the first configured build tool that resolves, with `args`.
pub async fn run_build_tool(
    config: &RunnerConfig,
    args: &[&str],
) -> std::result::Result<BuildOutcome, LaunchError> {
    let args: Vec<OsString> = args.iter().map(OsString::from).collect();

    for candidate in config.build_tools() {
        let Some(program) = resolve_command(candidate, config.project_dir()) else {
            tracing::warn!("Command not found: {candidate}; trying next fallback if available...");
            continue;
        };

        tracing::info!("Running command: {} {:?}", program.display(), args);
        let output = run_collect(
            &program,
            &args,
            Some(config.project_dir()),
            config.build_timeout(),
        )
        .await
        .map_err(|source| LaunchError::Failed {
            program: program.clone(),
            source,
        })?;

        tracing::info!("Build tool exit code: {}", output.status);
        return Ok(BuildOutcome {
            stdout: output.stdout_lossy(),
            stderr: output.stderr_lossy(),
            status: output.status,
            program,
        });
    }

    Err(LaunchError::NotFound {
        tried: config.build_tools().to_vec(),
    })
}

/// Runs every test in the project (`<tool> test`).
pub async fn run_all_tests(
    config: &RunnerConfig,
) -> std::result::Result<BuildOutcome, LaunchError> {
    run_build_tool(config, &["test"]).await
}

/// Runs a single test class (`<tool> -Dtest=<ShortName> test`).
///
/// * `class_name`: simple or fully qualified test class name
pub async fn run_test_class(
    config: &RunnerConfig,
    class_name: &str,
) -> std::result::Result<BuildOutcome, LaunchError> {
    let short = short_test_name(class_name);
    tracing::info!("Running tests for: {class_name} (pattern={short})");
    let selector = format!("-Dtest={short}");
    run_build_tool(config, &[selector.as_str(), "test"]).await
}

/// Simple name of a possibly package-qualified class, eg.
/// `com.pmu.StudentTest` -> `StudentTest`.
pub fn short_test_name(class_name: &str) -> &str {
    class_name
        .rsplit_once('.')
        .map(|(_, short)| short)
        .unwrap_or(class_name)
}

/// Runs the tests so the coverage plugin writes its report, then copies the
/// report into the artifacts directory. Returns the artifacts directory.
pub async fn collect_coverage(config: &RunnerConfig) -> Result<PathBuf> {
    let outcome = run_all_tests(config).await?;
    if !outcome.success() {
        tracing::warn!(
            "Tests exited with {}; copying whatever coverage was produced",
            outcome.status
        );
    }

    let site = config.coverage_site_dir();
    ensure!(
        site.is_dir(),
        "Coverage site not found at {}. Is the JaCoCo plugin configured for the test phase?",
        site.display()
    );

    let artifacts = config.artifacts_dir();
    copy_tree(&site, &artifacts)?;
    tracing::info!("Copied coverage artifacts to: {}", artifacts.display());
    Ok(artifacts)
}

/// Recursively copies `src` into `dest`, creating directories as needed and
/// overwriting existing files.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("{} is not under {}", entry.path().display(), src.display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
        }
    }

    Ok(())
}
