use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::RecordStore;

pub const DEFAULT_LIMIT: usize = 20;

/// Newest first (highest id first), at most `limit` records. The input is
/// left untouched.
pub fn select(students: &[Student], limit: usize) -> Vec<Student> {
    let mut sorted = students.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(limit);
    sorted
}

/// Lists an already loaded roster.
pub fn from_loaded(students: &[Student], limit: usize) -> CmdResult {
    if students.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No students to list."));
    }
    CmdResult::default().with_listed(select(students, limit))
}

pub fn run<S: RecordStore>(store: &mut S, limit: usize) -> Result<CmdResult> {
    let students = store.load_all()?;
    Ok(from_loaded(&students, limit))
}
