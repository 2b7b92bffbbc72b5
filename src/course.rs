#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;
use tabled::Tabled;

use crate::grade::LetterGrade;

/// Name given to a course constructed without one.
pub const UNKNOWN_COURSE_NAME: &str = "Unknown";
/// Fewest credit hours a course may carry.
pub const MIN_CREDIT_HOURS: u32 = 1;
/// Most credit hours a course may carry.
pub const MAX_CREDIT_HOURS: u32 = 6;
/// Credit hours substituted for anything outside
/// `MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS`.
pub const DEFAULT_CREDIT_HOURS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
/// A course a student can enroll in.
///
/// Construction never fails: every field is sanitized on the way in, so
/// `credit_hours` is always within `1..=6` and the grade point always within
/// `0.0..=4.0`.
pub struct Course {
    #[tabled(rename = "Course")]
    /// * `name`: display name of the course
    name:         String,
    #[tabled(rename = "Credits")]
    /// * `credit_hours`: weight of this course in a GPA
    credit_hours: u32,
    #[tabled(rename = "Grade")]
    /// * `letter_grade`: letter earned in this course
    letter_grade: LetterGrade,
}

impl Course {
    /// Creates a new course -
    /// * `name` - missing or empty names become `"Unknown"`
    /// * `credit_hours` - anything outside `1..=6` becomes `3`
    /// * `letter_grade` - anything other than exactly `A`, `B`, `C`, `D` or
    ///   `F` becomes `F`
    pub fn new<'a>(
        name: impl Into<Option<&'a str>>,
        credit_hours: i64,
        letter_grade: impl Into<Option<&'a str>>,
    ) -> Self {
        let name = match name.into() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_COURSE_NAME.to_string(),
        };

        let credit_hours = u32::try_from(credit_hours)
            .ok()
            .filter(|hours| (MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(hours))
            .unwrap_or(DEFAULT_CREDIT_HOURS);

        let letter_grade = letter_grade
            .into()
            .and_then(LetterGrade::from_letter)
            .unwrap_or(LetterGrade::F);

        Self {
            name,
            credit_hours,
            letter_grade,
        }
    }

    /// Name of the course.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit hours, always within `1..=6`.
    pub fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    /// Letter grade earned.
    pub fn letter_grade(&self) -> LetterGrade {
        self.letter_grade
    }

    /// Grade points for the letter earned; recomputed on every call.
    pub fn grade_point(&self) -> f64 {
        self.letter_grade.grade_point()
    }

    /// `grade_point * credit_hours`, this course's share of a GPA numerator.
    pub fn quality_points(&self) -> f64 {
        self.grade_point() * f64::from(self.credit_hours)
    }
}
