#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, sync::OnceLock, time::Duration};

use typed_builder::TypedBuilder;

use crate::util::fallback_commands;

/// Build tool asked for when nothing else is configured.
pub const DEFAULT_BUILD_TOOL: &str = "mvn";

/// Environment variable naming the project directory.
pub const PROJECT_DIR_ENV: &str = "GRADEBOOK_PROJECT_DIR";
/// Environment variable naming the preferred build tool command.
pub const BUILD_TOOL_ENV: &str = "GRADEBOOK_BUILD_TOOL";
/// Environment variable replacing the whole candidate list (comma separated).
pub const BUILD_TOOLS_ENV: &str = "GRADEBOOK_BUILD_TOOLS";
/// Environment variable holding a build deadline in seconds.
pub const BUILD_TIMEOUT_ENV: &str = "GRADEBOOK_BUILD_TIMEOUT_SECS";
/// Environment variable holding the log level.
pub const LOG_ENV: &str = "GRADEBOOK_LOG";

/// Where the build tool runs, and which command names to try for it.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct RunnerConfig {
    /// Directory the build tool runs in.
    #[builder(setter(into))]
    project_dir:   PathBuf,
    /// Command names to try in order until one resolves.
    #[builder(default = fallback_commands(DEFAULT_BUILD_TOOL, cfg!(windows)))]
    build_tools:   Vec<String>,
    /// Optional deadline for a single build tool invocation.
    #[builder(default, setter(strip_option))]
    build_timeout: Option<Duration>,
}

impl RunnerConfig {
    /// Reads the config from the environment; see the `*_ENV` constants.
    ///
    /// Unset or unparseable values fall back to defaults: the current
    /// directory, `mvn` with its platform fallbacks, and no deadline.
    pub fn from_env() -> Self {
        let project_dir = std::env::var_os(PROJECT_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let build_tools = match std::env::var(BUILD_TOOLS_ENV) {
            Ok(list) => parse_command_list(&list),
            Err(_) => Vec::new(),
        };
        let build_tools = if build_tools.is_empty() {
            let primary = std::env::var(BUILD_TOOL_ENV)
                .ok()
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BUILD_TOOL.to_owned());
            fallback_commands(&primary, cfg!(windows))
        } else {
            build_tools
        };

        let build_timeout = std::env::var(BUILD_TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            project_dir,
            build_tools,
            build_timeout,
        }
    }

    /// Directory the build tool runs in.
    pub fn project_dir(&self) -> &std::path::Path {
        self.project_dir.as_path()
    }

    /// Candidate command names, in the order they are tried.
    pub fn build_tools(&self) -> &[String] {
        &self.build_tools
    }

    /// Deadline for one build tool invocation, if any.
    pub fn build_timeout(&self) -> Option<Duration> {
        self.build_timeout
    }

    /// Where the coverage plugin writes its HTML site.
    pub fn coverage_site_dir(&self) -> PathBuf {
        self.project_dir.join("target").join("site").join("jacoco")
    }

    /// Where coverage artifacts are copied to.
    pub fn artifacts_dir(&self) -> PathBuf {
        self.project_dir.join("target").join("artifacts")
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::builder().project_dir(".").build()
    }
}

/// Splits a comma separated list of command names, dropping blanks.
pub fn parse_command_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a log level name, defaulting to `INFO`.
pub fn log_level(val: Option<String>) -> tracing::Level {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("info")
    {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Process-wide runner config, read from the environment on first use.
pub fn runner_config() -> &'static RunnerConfig {
    static CONFIG: OnceLock<RunnerConfig> = OnceLock::new();
    CONFIG.get_or_init(RunnerConfig::from_env)
}
