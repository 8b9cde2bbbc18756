//! # Command Layer
//!
//! One module per user command. Each command loads the roster once, works
//! on it in memory, and saves it once if it mutates anything. Commands
//! return a [`CmdResult`] and never print.
//!
//! Input parsing helpers (`add::parse_grade`, `delete::parse_id`, ...) live
//! next to the command that uses them so the CLI can validate each prompt
//! as soon as it is answered.

use crate::model::Student;

pub mod add;
pub mod delete;
pub mod list;
pub mod stats;

pub use stats::{GradeStats, StatsScope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Student>,
    pub listed: Vec<Student>,
    pub stats: Option<GradeStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, students: Vec<Student>) -> Self {
        self.affected = students;
        self
    }

    pub fn with_listed(mut self, students: Vec<Student>) -> Self {
        self.listed = students;
        self
    }

    pub fn with_stats(mut self, stats: GradeStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
