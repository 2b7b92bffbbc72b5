#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::{config::RunnerConfig, driver, health, runner};

/// Test classes that can be run on their own from the menu.
pub const TEST_CLASSES: [&str; 3] =
    ["com.pmu.StudentTest", "com.pmu.CourseTest", "com.pmu.GradeCalculatorTest"];

/// Something the menu can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Leave the menu.
    Exit,
    /// Run the classification driver in-process.
    RunDriver,
    /// Run every test through the build tool.
    RunAllTests,
    /// Run one test class through the build tool.
    RunTestClass(&'static str),
    /// Run the tests and copy the coverage report into the artifacts dir.
    Coverage,
}

/// Input that does not select a menu entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuInputError {
    /// The line was not a number.
    #[error("Invalid option `{0}`. Please enter a number.")]
    NotANumber(String),
    /// The number does not map to an entry.
    #[error("Unknown selection: {0}")]
    Unknown(i64),
}

/// Parses one line of menu input. Blank lines select nothing.
pub fn parse_choice(line: &str) -> Result<Option<MenuAction>, MenuInputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let choice: i64 = line
        .parse()
        .map_err(|_| MenuInputError::NotANumber(line.to_string()))?;

    let action = match choice {
        0 => MenuAction::Exit,
        1 => MenuAction::RunDriver,
        2 => MenuAction::RunAllTests,
        3 => MenuAction::RunTestClass(TEST_CLASSES[0]),
        4 => MenuAction::RunTestClass(TEST_CLASSES[1]),
        5 => MenuAction::RunTestClass(TEST_CLASSES[2]),
        6 => MenuAction::Coverage,
        n => return Err(MenuInputError::Unknown(n)),
    };
    Ok(Some(action))
}

/// Menu text listing every entry.
pub fn menu_text() -> String {
    [
        "----------------------------------------",
        "Project Runner - choose an action:",
        "0) Exit",
        "1) Run grade classifier driver",
        "2) Run all tests (build tool)",
        "3) Run StudentTest",
        "4) Run CourseTest",
        "5) Run GradeCalculatorTest",
        "6) Run coverage and copy artifacts to target/artifacts",
        "----------------------------------------",
    ]
    .join("\n")
}

/// Writes a build tool's output, stderr after stdout, and its exit status.
fn write_build(out: &mut impl Write, outcome: &runner::BuildOutcome) -> Result<()> {
    write!(out, "{}", outcome.stdout)?;
    write!(out, "{}", outcome.stderr)?;
    writeln!(out, "Build tool exit code: {}", outcome.status)?;
    Ok(())
}

/// Carries out one action, writing what happened to `out`.
pub async fn perform(action: MenuAction, config: &RunnerConfig, out: &mut impl Write) -> Result<()> {
    match action {
        MenuAction::Exit => {}
        MenuAction::RunDriver => {
            let report = driver::run_default();
            writeln!(out, "{}", report.render())?;
        }
        MenuAction::RunAllTests => {
            let outcome = runner::run_all_tests(config).await?;
            write_build(out, &outcome)?;
        }
        MenuAction::RunTestClass(class) => {
            let outcome = runner::run_test_class(config, class).await?;
            write_build(out, &outcome)?;
        }
        MenuAction::Coverage => {
            let artifacts = runner::collect_coverage(config).await?;
            writeln!(out, "Copied coverage artifacts to: {}", artifacts.display())?;
        }
    }
    Ok(())
}

/// Checks the Java installation, then runs the menu. A failed check is
/// logged and the menu is shown anyway.
pub async fn run_interactive(
    input: impl BufRead,
    config: &RunnerConfig,
    out: &mut impl Write,
) -> Result<()> {
    if let Err(e) = health::check_java_environment().await {
        tracing::error!("Java check failed: {e:#}");
    }
    run_menu(input, config, out).await
}

/// Reads selections from `input` until `0` or end of input.
///
/// Bad selections and failed actions are reported to `out` and the loop
/// carries on.
pub async fn run_menu(
    mut input: impl BufRead,
    config: &RunnerConfig,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        writeln!(out, "{}", menu_text())?;
        write!(out, "Enter selection: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read selection")? == 0 {
            writeln!(out, "No input available; exiting.")?;
            return Ok(());
        }

        let action = match parse_choice(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        if action == MenuAction::Exit {
            writeln!(out, "Exiting.")?;
            return Ok(());
        }

        if let Err(e) = perform(action, config, out).await {
            tracing::error!("{e:#}");
            writeln!(out, "Error: {e:#}")?;
        }
    }
}
