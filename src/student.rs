#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::course::Course;

/// Id given to a student constructed without one.
pub const UNKNOWN_STUDENT_ID: &str = "0000";
/// Name given to a student constructed without one.
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown";
/// Ceiling on any computed GPA.
pub const MAX_GPA: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A student and the courses they are enrolled in, in enrollment order.
pub struct Student {
    /// Student id, `"0000"` when none was given.
    id:      String,
    /// Student name, `"Unknown"` when none was given.
    name:    String,
    /// Enrolled courses. Only ever appended to.
    courses: Vec<Course>,
}

impl Student {
    /// Creates a student with no courses -
    /// * `id` - missing or empty ids become `"0000"`
    /// * `name` - missing or empty names become `"Unknown"`
    pub fn new<'a>(id: impl Into<Option<&'a str>>, name: impl Into<Option<&'a str>>) -> Self {
        /// Falls back to `default` for a missing or empty value.
        fn or_default(value: Option<&str>, default: &str) -> String {
            match value {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => default.to_string(),
            }
        }

        Self {
            id:      or_default(id.into(), UNKNOWN_STUDENT_ID),
            name:    or_default(name.into(), UNKNOWN_STUDENT_NAME),
            courses: Vec::new(),
        }
    }

    /// Student id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolled courses, in the order they were enrolled.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Appends a course. `None` is ignored.
    ///
    /// The same course may be enrolled more than once; each enrollment counts
    /// towards the GPA.
    pub fn enroll(&mut self, course: impl Into<Option<Course>>) {
        if let Some(course) = course.into() {
            self.courses.push(course);
        }
    }

    /// Sum of credit hours across every enrollment.
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(Course::credit_hours).sum()
    }

    /// Credit-weighted mean of grade points, in `0.0..=4.0`.
    ///
    /// No courses (or, defensively, no credits) gives `0.0`. The quotient is
    /// returned unrounded.
    pub fn calculate_gpa(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }

        let (total_points, total_credits) = self
            .courses
            .iter()
            .fold((0f64, 0u32), |(points, credits), course| {
                (points + course.quality_points(), credits + course.credit_hours())
            });

        // unreachable while courses keep credit_hours >= 1
        if total_credits == 0 {
            return 0.0;
        }

        let gpa = total_points / f64::from(total_credits);
        if gpa > MAX_GPA { MAX_GPA } else { gpa }
    }
}
