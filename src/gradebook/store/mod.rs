//! # Storage Layer
//!
//! The roster is persisted as one flat table. The [`RecordStore`] trait is the
//! seam between commands and persistence:
//!
//! - [`fs::CsvStore`]: production store, one comma-delimited file with a
//!   header row (`id,name,subject,grade`).
//! - [`memory::InMemoryStore`]: a `Vec` for tests, with write-failure
//!   simulation.
//!
//! Every command loads the whole roster, works on it in memory, and (for
//! mutations) writes the whole roster back. There are no partial updates.
//!
//! ## Normalization
//!
//! Loading never fails on bad rows. Rows whose id is missing or not a
//! positive integer are dropped; grades that are empty, non-numeric, or out
//! of range load as unknown (`None`); text fields are trimmed. Only I/O
//! faults surface as errors.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

/// Column order of the persisted table.
pub const COLUMNS: [&str; 4] = ["id", "name", "subject", "grade"];

/// Abstract interface for roster storage.
pub trait RecordStore {
    /// Make sure the backing table exists with its header. Idempotent.
    fn ensure_initialized(&mut self) -> Result<()>;

    /// Read every valid record, in stored order.
    fn load_all(&mut self) -> Result<Vec<Student>>;

    /// Replace the stored roster with `students`.
    fn save_all(&mut self, students: &[Student]) -> Result<()>;
}
