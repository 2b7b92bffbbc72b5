//! # gradebook
//!
//! Letter-grade classification and credit-weighted GPA for students and their
//! courses, plus the tooling around them: a black-box test driver for the
//! classifier, a Maven runner with command fallbacks, and a Java version
//! check.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven configuration for the build tool runner
pub mod config;
/// Courses and their grade points
pub mod course;
/// Equivalence-partitioning and boundary-value driver for the classifier
pub mod driver;
/// Score to letter-grade classification
pub mod grade;
/// Java installation checks
pub mod health;
/// Interactive numbered menu
pub mod menu;
/// Spawning subprocesses and collecting their output
pub mod process;
/// Build tool invocation and coverage collection
pub mod runner;
/// Students and GPA calculation
pub mod student;
/// Utility functions for convenience
pub mod util;

pub use course::Course;
pub use grade::{Classification, LetterGrade, classify};
pub use student::Student;
