use std::{fs, io::Cursor};

use gradebook::{
    config::RunnerConfig,
    menu::{run_interactive, run_menu},
};
use uuid::Uuid;

fn config() -> RunnerConfig {
    RunnerConfig::builder()
        .project_dir(std::env::temp_dir())
        .build_tools(vec!["gradebook-missing-tool".to_string()])
        .build()
}

async fn transcript(input: &str) -> String {
    let mut out = Vec::new();
    run_menu(Cursor::new(input.to_string()), &config(), &mut out)
        .await
        .expect("menu loop");
    String::from_utf8(out).expect("utf8 transcript")
}

#[tokio::test]
async fn exits_on_zero() {
    let out = transcript("0\n").await;
    assert!(out.contains("Project Runner - choose an action:"));
    assert!(out.trim_end().ends_with("Exiting."));
}

#[tokio::test]
async fn exits_when_input_runs_out() {
    let out = transcript("").await;
    assert!(out.contains("No input available; exiting."));
}

#[tokio::test]
async fn bad_selections_are_reported_and_the_loop_continues() {
    let out = transcript("abc\n42\n\n0\n").await;
    assert!(out.contains("Invalid option `abc`. Please enter a number."));
    assert!(out.contains("Unknown selection: 42"));
    assert!(out.contains("Exiting."));
}

#[tokio::test]
async fn driver_selection_prints_the_report() {
    let out = transcript("1\n0\n").await;
    assert!(out.contains("Passed: 33"));
}

#[tokio::test]
async fn missing_build_tool_is_reported_not_fatal() {
    let out = transcript("2\n0\n").await;
    assert!(out.contains("No build tool executable found (tried: gradebook-missing-tool)"));
    assert!(out.contains("Exiting."));
}

#[cfg(unix)]
#[tokio::test]
async fn build_tool_stderr_is_shown() {
    let root = std::env::temp_dir().join(format!("gradebook-menu-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create project");
    // `sh test` runs this script in the project dir
    fs::write(root.join("test"), "echo compiled\necho 'BUILD FAILURE' >&2\nexit 1\n")
        .expect("write script");

    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec!["sh".to_string()])
        .build();
    let mut out = Vec::new();
    run_menu(Cursor::new("2\n0\n".to_string()), &config, &mut out)
        .await
        .expect("menu loop");
    let out = String::from_utf8(out).expect("utf8 transcript");

    assert!(out.contains("compiled"));
    assert!(out.contains("BUILD FAILURE"));
    assert!(out.contains("Build tool exit code: exit status: 1"));

    let _ = fs::remove_dir_all(root);
}

#[tokio::test]
async fn interactive_start_checks_java_then_shows_the_menu() {
    let mut out = Vec::new();
    run_interactive(Cursor::new("1\n0\n".to_string()), &config(), &mut out)
        .await
        .expect("menu loop");
    let out = String::from_utf8(out).expect("utf8 transcript");

    assert!(out.contains("Project Runner - choose an action:"));
    assert!(out.contains("Passed: 33"));
    assert!(out.trim_end().ends_with("Exiting."));
}
