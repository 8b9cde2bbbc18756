//! Deleting is a short conversation: show the roster, ask for an id, ask for
//! confirmation, then remove. [`DeleteSession`] holds the roster loaded at
//! the start so the whole exchange costs one load and at most one save.

use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::{GradebookError, Result};
use crate::model::{Student, StudentId};
use crate::store::RecordStore;
use tracing::info;

/// The single response that confirms a delete.
pub const CONFIRM_TOKEN: &str = "yes";

pub fn parse_id(raw: &str) -> Result<StudentId> {
    raw.trim()
        .parse::<StudentId>()
        .map_err(|_| GradebookError::InvalidInput("Invalid id.".into()))
}

/// Only the exact confirmation token counts; case and surrounding spaces are
/// ignored.
pub fn confirmed(raw: &str) -> bool {
    raw.trim().to_lowercase() == CONFIRM_TOKEN
}

#[derive(Debug)]
pub struct DeleteSession {
    students: Vec<Student>,
}

impl DeleteSession {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The roster as the `list` command would show it.
    pub fn listing(&self, limit: usize) -> CmdResult {
        list::from_loaded(&self.students, limit)
    }

    pub fn target(&self, id: StudentId) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(not_found)
    }

    /// Removes the student with `id` and saves the rest.
    pub fn commit<S: RecordStore>(self, store: &mut S, id: StudentId) -> Result<CmdResult> {
        let mut students = self.students;
        let pos = students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(not_found)?;
        let removed = students.remove(pos);

        store.save_all(&students)?;
        info!(id, "deleted student");

        Ok(CmdResult::default()
            .with_affected(vec![removed])
            .with_message(CmdMessage::success(format!("Deleted student id={}.", id))))
    }
}

fn not_found() -> GradebookError {
    GradebookError::NotFound("No student with that id. Nothing deleted.".into())
}

/// Loads the roster for a delete conversation.
pub fn prepare<S: RecordStore>(store: &mut S) -> Result<DeleteSession> {
    let students = store.load_all()?;
    Ok(DeleteSession { students })
}
