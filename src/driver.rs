#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Black-box driver for [`classify`].
//!
//! Cases are picked by equivalence partitioning (one representative range per
//! class) and boundary value analysis (each transition point on both sides).
//! A run returns its own [`DriverReport`]; nothing is tallied globally, so
//! independent runs never interfere with each other.

use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::grade::{Classification, LetterGrade, classify};

/// Black-box technique a case was selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Technique {
    /// One representative value from each equivalence class.
    EquivalencePartitioning,
    /// Values on either side of each class boundary.
    BoundaryValue,
}

impl Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EquivalencePartitioning => f.write_str("EP"),
            Self::BoundaryValue => f.write_str("BVA"),
        }
    }
}

/// A single score to classify, and what it should classify as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteCase {
    /// How the case was chosen.
    pub technique: Technique,
    /// Human readable description, eg. `EC1: Grade A [90-100]`.
    pub label:     String,
    /// Score passed to the classifier.
    pub score:     i64,
    /// Expected classification.
    pub expected:  Classification,
}

impl SuiteCase {
    /// Creates a new case.
    pub fn new(
        technique: Technique,
        label: impl Into<String>,
        score: i64,
        expected: impl Into<Classification>,
    ) -> Self {
        Self {
            technique,
            label: label.into(),
            score,
            expected: expected.into(),
        }
    }
}

/// Expands one equivalence class into a case per representative score.
fn class_cases(
    label: &str,
    scores: [i64; 3],
    expected: Classification,
) -> impl Iterator<Item = SuiteCase> + '_ {
    scores.into_iter().map(move |score| {
        SuiteCase::new(Technique::EquivalencePartitioning, label, score, expected)
    })
}

/// Equivalence classes: five valid letter bands and two invalid ranges,
/// three representatives each (low, middle, high).
pub fn equivalence_cases() -> Vec<SuiteCase> {
    let classes: [(&str, [i64; 3], Classification); 7] = [
        ("EC1: Grade A [90-100]", [90, 95, 100], LetterGrade::A.into()),
        ("EC2: Grade B [80-89]", [80, 85, 89], LetterGrade::B.into()),
        ("EC3: Grade C [70-79]", [70, 75, 79], LetterGrade::C.into()),
        ("EC4: Grade D [60-69]", [60, 65, 69], LetterGrade::D.into()),
        ("EC5: Grade F [0-59]", [0, 30, 59], LetterGrade::F.into()),
        ("EC6: Invalid (< 0)", [-1, -50, -100], Classification::Invalid),
        ("EC7: Invalid (> 100)", [101, 150, 200], Classification::Invalid),
    ];

    classes
        .into_iter()
        .flat_map(|(label, scores, expected)| class_cases(label, scores, expected))
        .collect()
}

/// Boundary values: both ends of the valid range, the first invalid value
/// past each end, and both sides of every letter transition.
pub fn boundary_cases() -> Vec<SuiteCase> {
    use LetterGrade::*;

    let case = |label: &str, score: i64, expected: Classification| {
        SuiteCase::new(Technique::BoundaryValue, label, score, expected)
    };

    vec![
        case("BVA1: Lower bound of valid range", 0, F.into()),
        case("BVA2: Just below valid range", -1, Classification::Invalid),
        case("BVA3: F/D transition", 59, F.into()),
        case("BVA3: F/D transition", 60, D.into()),
        case("BVA4: D/C transition", 69, D.into()),
        case("BVA4: D/C transition", 70, C.into()),
        case("BVA5: C/B transition", 79, C.into()),
        case("BVA5: C/B transition", 80, B.into()),
        case("BVA6: B/A transition", 89, B.into()),
        case("BVA6: B/A transition", 90, A.into()),
        case("BVA7: Upper bound of valid range", 100, A.into()),
        case("BVA8: Just above valid range", 101, Classification::Invalid),
    ]
}

/// Both suites, equivalence classes first.
pub fn default_cases() -> Vec<SuiteCase> {
    let mut cases = equivalence_cases();
    cases.extend(boundary_cases());
    cases
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
/// Outcome of running one [`SuiteCase`].
pub struct CaseOutcome {
    #[tabled(rename = "Technique")]
    /// * `technique`: how the case was chosen
    pub technique: Technique,
    #[tabled(rename = "Case")]
    /// * `label`: description of the case
    pub label:     String,
    #[tabled(rename = "Score")]
    /// * `score`: score given to the classifier
    pub score:     i64,
    #[tabled(rename = "Expected")]
    /// * `expected`: classification the case expects
    pub expected:  Classification,
    #[tabled(rename = "Got")]
    /// * `actual`: classification the classifier returned
    pub actual:    Classification,
    #[tabled(rename = "Result", display = "display_passed")]
    /// * `passed`: whether `expected == actual`
    pub passed:    bool,
}

/// Renders the pass/fail column.
fn display_passed(passed: &bool) -> String {
    if *passed {
        "PASS".green().to_string()
    } else {
        "FAIL".red().to_string()
    }
}

/// Tally of a driver run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriverReport {
    /// Every case run, in the order it ran.
    outcomes: Vec<CaseOutcome>,
}

impl DriverReport {
    /// Records an outcome.
    pub fn record(&mut self, outcome: CaseOutcome) {
        self.outcomes.push(outcome);
    }

    /// Every outcome recorded so far.
    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    /// Outcomes that did not match their expectation.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Number of cases run.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of cases that passed.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of cases that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whether every case passed. Vacuously true for an empty report.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Percentage of cases that passed, `0.0` for an empty report.
    pub fn pass_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.passed() as f64 * 100.0 / self.total() as f64
    }

    /// Appends every outcome of `other` to this report.
    pub fn merge(&mut self, other: DriverReport) {
        self.outcomes.extend(other.outcomes);
    }

    /// Table of every outcome with a header and a totals footer.
    pub fn render(&self) -> String {
        Table::new(&self.outcomes)
            .with(Panel::header("Grade Classifier - Black Box Testing Driver"))
            .with(Panel::footer(self.summary()))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }

    /// One-line summary of the tally.
    pub fn summary(&self) -> String {
        let failed_rate = if self.outcomes.is_empty() { 0.0 } else { 100.0 - self.pass_rate() };
        format!(
            "Total: {} | Passed: {} ({:.1}%) | Failed: {} ({:.1}%)",
            self.total(),
            self.passed(),
            self.pass_rate(),
            self.failed(),
            failed_rate,
        )
    }
}

/// Runs every case through `classifier`, returning a fresh report.
pub fn run_suite<F>(cases: impl IntoIterator<Item = SuiteCase>, classifier: F) -> DriverReport
where
    F: Fn(i64) -> Classification,
{
    let mut report = DriverReport::default();
    for case in cases {
        let actual = classifier(case.score);
        let passed = actual == case.expected;
        if !passed {
            tracing::debug!(
                "{}: score {} expected {} got {}",
                case.label,
                case.score,
                case.expected,
                actual
            );
        }
        report.record(CaseOutcome {
            technique: case.technique,
            label: case.label,
            score: case.score,
            expected: case.expected,
            actual,
            passed,
        });
    }
    report
}

/// Runs both suites against [`classify`].
pub fn run_default() -> DriverReport {
    run_suite(default_cases(), classify)
}
