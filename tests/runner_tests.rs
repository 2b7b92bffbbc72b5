use std::{fs, path::PathBuf, time::Duration};

use gradebook::{
    config::RunnerConfig,
    runner::{LaunchError, collect_coverage, copy_tree, run_build_tool, short_test_name},
    util::resolve_command,
};
use uuid::Uuid;

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("gradebook-runner-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

#[test]
fn short_test_name_drops_the_package() {
    assert_eq!(short_test_name("com.pmu.StudentTest"), "StudentTest");
    assert_eq!(short_test_name("CourseTest"), "CourseTest");
}

#[tokio::test]
async fn unresolvable_candidates_report_every_name_tried() {
    let root = temp_root();
    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec![
            "gradebook-missing-tool".to_string(),
            "./gradebook-missing-wrapper".to_string(),
        ])
        .build();

    let err = run_build_tool(&config, &["test"])
        .await
        .expect_err("nothing should resolve");
    match err {
        LaunchError::NotFound { tried } => {
            assert_eq!(tried, vec!["gradebook-missing-tool", "./gradebook-missing-wrapper"]);
        }
        other => panic!("expected NotFound, got {other}"),
    }

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[tokio::test]
async fn falls_back_to_the_next_candidate_that_resolves() {
    let root = temp_root();
    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec!["gradebook-missing-tool".to_string(), "sh".to_string()])
        .build();

    let outcome = run_build_tool(&config, &["-c", "echo built; exit 3"])
        .await
        .expect("sh should run");
    assert_eq!(outcome.stdout.trim(), "built");
    assert!(!outcome.success());
    assert_eq!(outcome.status.code(), Some(3));

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[tokio::test]
async fn resolved_tool_that_times_out_is_a_launch_failure() {
    let root = temp_root();
    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec!["sh".to_string(), "true".to_string()])
        .build_timeout(Duration::from_secs(1))
        .build();

    let err = run_build_tool(&config, &["-c", "sleep 5"])
        .await
        .expect_err("sh should be killed at the deadline");
    match err {
        LaunchError::Failed { program, source } => {
            assert_eq!(Some(program), resolve_command("sh", &root));
            assert!(format!("{source:#}").contains("timed out"));
        }
        other => panic!("expected Failed, got {other}"),
    }

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[tokio::test]
async fn build_tool_runs_in_the_project_dir() {
    let root = temp_root();
    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec!["sh".to_string()])
        .build();

    let outcome = run_build_tool(&config, &["-c", "pwd"]).await.expect("sh should run");
    let reported = PathBuf::from(outcome.stdout.trim());
    assert_eq!(
        fs::canonicalize(reported).expect("canonical pwd"),
        fs::canonicalize(&root).expect("canonical root")
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn copy_tree_mirrors_nested_files() {
    let root = temp_root();
    let src = root.join("site");
    fs::create_dir_all(src.join("com.pmu")).expect("create site");
    fs::write(src.join("index.html"), "<html/>").expect("write index");
    fs::write(src.join("com.pmu").join("Student.html"), "student").expect("write nested");

    let dest = root.join("artifacts");
    fs::create_dir_all(&dest).expect("create dest");
    fs::write(dest.join("index.html"), "stale").expect("write stale");

    copy_tree(&src, &dest).expect("copy");

    assert_eq!(fs::read_to_string(dest.join("index.html")).unwrap(), "<html/>");
    assert_eq!(
        fs::read_to_string(dest.join("com.pmu").join("Student.html")).unwrap(),
        "student"
    );

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[tokio::test]
async fn coverage_copies_the_site_into_artifacts() {
    let root = temp_root();
    let site = root.join("target/site/jacoco");
    fs::create_dir_all(&site).expect("create site");
    fs::write(site.join("index.html"), "coverage").expect("write report");

    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec!["true".to_string()])
        .build();

    let artifacts = collect_coverage(&config).await.expect("coverage");
    assert_eq!(artifacts, root.join("target").join("artifacts"));
    assert_eq!(fs::read_to_string(artifacts.join("index.html")).unwrap(), "coverage");

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[tokio::test]
async fn coverage_without_a_site_is_an_error() {
    let root = temp_root();
    let config = RunnerConfig::builder()
        .project_dir(root.clone())
        .build_tools(vec!["true".to_string()])
        .build();

    let err = collect_coverage(&config).await.expect_err("no site");
    assert!(err.to_string().contains("Coverage site not found"));

    let _ = fs::remove_dir_all(root);
}
