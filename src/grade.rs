#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lowest score that still classifies as a letter.
pub const MIN_SCORE: i64 = 0;
/// Highest score that still classifies as a letter.
pub const MAX_SCORE: i64 = 100;

/// One of the five letter grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// 90-100, worth 4.0 points
    A,
    /// 80-89, worth 3.0 points
    B,
    /// 70-79, worth 2.0 points
    C,
    /// 60-69, worth 1.0 point
    D,
    /// 0-59, worth nothing
    F,
}

impl LetterGrade {
    /// Every letter, best first.
    pub const ALL: [LetterGrade; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Grade points this letter contributes to a GPA.
    pub fn grade_point(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Exact, case-sensitive lookup of a single-letter grade.
    ///
    /// Returns `None` for anything that is not exactly one of `A`, `B`, `C`,
    /// `D` or `F`. Callers decide what an unknown letter degrades to.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            _ => None,
        }
    }

    /// The letter as text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a numeric score.
///
/// A score outside `0..=100` is not an error, it simply classifies as
/// [`Classification::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// The score fell inside one of the letter bands.
    Letter(LetterGrade),
    /// The score was below 0 or above 100.
    Invalid,
}

impl Classification {
    /// Label for this classification: a letter, or `"Invalid"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Letter(letter) => letter.as_str(),
            Self::Invalid => "Invalid",
        }
    }

    /// The letter, if the score was in range.
    pub fn letter(self) -> Option<LetterGrade> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Invalid => None,
        }
    }

    /// Whether the score was outside `0..=100`.
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl From<LetterGrade> for Classification {
    fn from(letter: LetterGrade) -> Self {
        Self::Letter(letter)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a numeric score onto a letter grade.
///
/// | score      | result    |
/// |------------|-----------|
/// | < 0        | `Invalid` |
/// | 0 ..= 59   | `F`       |
/// | 60 ..= 69  | `D`       |
/// | 70 ..= 79  | `C`       |
/// | 80 ..= 89  | `B`       |
/// | 90 ..= 100 | `A`       |
/// | > 100      | `Invalid` |
pub fn classify(score: i64) -> Classification {
    match score {
        90..=MAX_SCORE => LetterGrade::A.into(),
        80..=89 => LetterGrade::B.into(),
        70..=79 => LetterGrade::C.into(),
        60..=69 => LetterGrade::D.into(),
        MIN_SCORE..=59 => LetterGrade::F.into(),
        _ => Classification::Invalid,
    }
}
