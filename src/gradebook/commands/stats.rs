use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::RecordStore;
use std::fmt;

/// What a set of statistics was computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsScope {
    All,
    /// Subject filter as typed by the user.
    Subject(String),
}

impl fmt::Display for StatsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsScope::All => write!(f, "Statistics (all students)"),
            StatsScope::Subject(subject) => write!(f, "Statistics for subject: {}", subject),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeStats {
    pub scope: StatsScope,
    pub count: usize,
    pub mean: f64,
    pub highest: u8,
    pub lowest: u8,
}

impl GradeStats {
    /// `None` when no student in the slice has a grade.
    pub fn compute(scope: StatsScope, students: &[&Student]) -> Option<Self> {
        let grades: Vec<u8> = students
            .iter()
            .filter_map(|s| s.grade.map(|g| g.value()))
            .collect();
        let highest = *grades.iter().max()?;
        let lowest = *grades.iter().min()?;
        let sum: u64 = grades.iter().map(|&g| g as u64).sum();

        Some(Self {
            scope,
            count: grades.len(),
            mean: sum as f64 / grades.len() as f64,
            highest,
            lowest,
        })
    }
}

/// Case-insensitive exact subject match. Substrings do not match.
pub fn subject_matches(subject: &str, filter: &str) -> bool {
    subject.to_lowercase() == filter.to_lowercase()
}

pub fn run<S: RecordStore>(store: &mut S, filter: Option<&str>) -> Result<CmdResult> {
    let students = store.load_all()?;
    if students.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No students to compute statistics.")));
    }

    let filter = filter.map(str::trim).filter(|f| !f.is_empty());
    let (scope, selected): (_, Vec<&Student>) = match filter {
        Some(subject) => (
            StatsScope::Subject(subject.to_string()),
            students
                .iter()
                .filter(|s| subject_matches(&s.subject, subject))
                .collect(),
        ),
        None => (StatsScope::All, students.iter().collect()),
    };

    match GradeStats::compute(scope, &selected) {
        Some(stats) => Ok(CmdResult::default().with_stats(stats)),
        None => Ok(CmdResult::default().with_message(CmdMessage::info(
            "No graded students found for this selection.",
        ))),
    }
}
