#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! Command line front end: classify scores, compute a student's GPA, run the
//! classifier driver, and drive the Java project's build tool.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use bpaf::*;
use dotenvy::dotenv;
use tabled::{
    Table,
    settings::{Panel, Style},
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

use gradebook::{
    Course, Student, classify,
    config::{self, LOG_ENV, runner_config},
    driver, health, menu, runner,
};

/// A course given on the command line as `NAME:HOURS:GRADE`.
#[derive(Debug, Clone)]
struct CourseArg {
    /// Course name, possibly empty.
    name:         String,
    /// Credit hours as given; sanitized by `Course::new`.
    credit_hours: i64,
    /// Letter grade as given; sanitized by `Course::new`.
    letter_grade: String,
}

impl FromStr for CourseArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(letter_grade), Some(hours), Some(name)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected NAME:HOURS:GRADE, got `{s}`"));
        };
        let credit_hours = hours
            .trim()
            .parse()
            .map_err(|_| format!("credit hours must be a whole number, got `{hours}`"))?;

        Ok(Self {
            name: name.to_string(),
            credit_hours,
            letter_grade: letter_grade.trim().to_string(),
        })
    }
}

impl CourseArg {
    /// Builds the sanitized course.
    fn to_course(&self) -> Course {
        Course::new(self.name.as_str(), self.credit_hours, self.letter_grade.as_str())
    }
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the classifier driver
    Driver,
    /// Classify scores
    Classify(Vec<i64>),
    /// Compute a GPA
    Gpa {
        /// Student id
        id:      Option<String>,
        /// Student name
        name:    Option<String>,
        /// Enrolled courses
        courses: Vec<CourseArg>,
        /// Print JSON instead of a table
        json:    bool,
    },
    /// Run tests through the build tool
    Test(Option<String>),
    /// Collect coverage artifacts
    Coverage,
    /// Check the Java installation
    CheckJava(bool),
    /// Interactive menu
    Menu,
}

/// Command line parser producing a `Cmd` enum
fn options() -> OptionParser<Cmd> {
    /// parses the --json switch
    fn json() -> impl Parser<bool> {
        long("json").help("Print JSON instead of a table").switch()
    }

    /// parses scores, negative ones included, without needing `--`
    fn scores() -> impl Parser<Vec<i64>> {
        any::<String, _, _>("SCORE", |s| s.parse::<i64>().ok())
            .help("Numeric score to classify")
            .some("at least one score is required")
    }

    let driver = pure(Cmd::Driver)
        .to_options()
        .command("driver")
        .help("Run the equivalence-partitioning and boundary-value driver");

    let scores = scores();
    let classify = construct!(Cmd::Classify(scores))
        .to_options()
        .command("classify")
        .help("Print the letter grade for each score");

    let id = long("id").help("Student id").argument::<String>("ID").optional();
    let name = long("name")
        .help("Student name")
        .argument::<String>("NAME")
        .optional();
    let courses = long("course")
        .short('c')
        .help("Course as NAME:HOURS:GRADE, eg. Math:3:A")
        .argument::<CourseArg>("COURSE")
        .many();
    let json = json();
    let gpa = construct!(Cmd::Gpa {
        id,
        name,
        courses,
        json
    })
    .to_options()
    .command("gpa")
    .help("Compute a student's credit-weighted GPA");

    let class = positional::<String>("CLASS")
        .help("Test class to run, eg. com.pmu.StudentTest")
        .optional();
    let test = construct!(Cmd::Test(class))
        .to_options()
        .command("test")
        .help("Run tests through the build tool");

    let coverage = pure(Cmd::Coverage)
        .to_options()
        .command("coverage")
        .help("Run tests and copy the coverage report to target/artifacts");

    let report_json = long("json").help("Print the report as JSON").switch();
    let check_java = construct!(Cmd::CheckJava(report_json))
        .to_options()
        .command("check-java")
        .help("Check the active Java version and scan for suitable JDKs");

    let menu = pure(Cmd::Menu)
        .to_options()
        .command("menu")
        .help("Interactive menu");

    let cmd = construct!([driver, classify, gpa, test, coverage, check_java, menu]);

    cmd.to_options()
        .descr("Grade classification, GPA, and Java project runner")
}

/// Prints a build tool's output and turns a failing exit into an error.
fn report_build(outcome: runner::BuildOutcome) -> Result<()> {
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    if !outcome.success() {
        bail!("{} exited with {}", outcome.program.display(), outcome.status);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(config::log_level(std::env::var(LOG_ENV).ok()));
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options().run() {
        Cmd::Driver => {
            let report = driver::run_default();
            println!("{}", report.render());
            if !report.all_passed() {
                bail!("{} of {} driver cases failed", report.failed(), report.total());
            }
        }
        Cmd::Classify(scores) => {
            for score in scores {
                println!("{score}: {}", classify(score));
            }
        }
        Cmd::Gpa {
            id,
            name,
            courses,
            json,
        } => {
            let mut student = Student::new(id.as_deref(), name.as_deref());
            for course in &courses {
                student.enroll(course.to_course());
            }
            let gpa = student.calculate_gpa();

            if json {
                let value = serde_json::json!({ "student": student, "gpa": gpa });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "{}",
                    Table::new(student.courses())
                        .with(Panel::header(format!("{} ({})", student.name(), student.id())))
                        .with(Panel::footer(format!(
                            "GPA: {gpa:.2} over {} credits",
                            student.total_credits()
                        )))
                        .with(Style::modern())
                );
            }
        }
        Cmd::Test(class) => {
            let config = runner_config();
            let outcome = match class {
                Some(class) => runner::run_test_class(config, &class).await?,
                None => runner::run_all_tests(config).await?,
            };
            report_build(outcome)?;
        }
        Cmd::Coverage => {
            let artifacts = runner::collect_coverage(runner_config()).await?;
            println!("Copied coverage artifacts to: {}", artifacts.display());
        }
        Cmd::CheckJava(json) => {
            let report = health::check_java_environment().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Cmd::Menu => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            menu::run_interactive(stdin.lock(), runner_config(), &mut stdout)
                .await
                .context("Menu failed")?;
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses `args` as if given on the command line.
    fn parse(args: &[&str]) -> std::result::Result<Cmd, ParseFailure> {
        options().run_inner(args)
    }

    #[test]
    fn classify_accepts_negative_scores() {
        match parse(&["classify", "-5", "101", "90"]).expect("arguments should parse") {
            Cmd::Classify(scores) => assert_eq!(scores, vec![-5, 101, 90]),
            other => panic!("expected Classify, got {other:?}"),
        }
    }

    #[test]
    fn classify_needs_a_score() {
        assert!(parse(&["classify"]).is_err());
        assert!(parse(&["classify", "ninety"]).is_err());
    }

    #[test]
    fn course_argument_splits_from_the_right() {
        let course: CourseArg = "Intro: Part 2:3: A".parse().expect("course");
        assert_eq!(course.name, "Intro: Part 2");
        assert_eq!(course.credit_hours, 3);
        assert_eq!(course.letter_grade, "A");
        assert!("Math:three:A".parse::<CourseArg>().is_err());
        assert!("Math".parse::<CourseArg>().is_err());
    }
}
