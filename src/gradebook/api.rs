//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! gradebook operations, whatever the UI. It dispatches to `commands::*`,
//! carries the configured limits, and returns structured results. It does
//! no business logic and no terminal I/O.
//!
//! `GradebookApi<S: RecordStore>` is generic over the storage backend:
//! `CsvStore` in production, `InMemoryStore` in tests.

use crate::commands::{self, delete::DeleteSession};
use crate::config::GradebookConfig;
use crate::error::Result;
use crate::model::{NewStudent, StudentId};
use crate::store::RecordStore;

pub struct GradebookApi<S: RecordStore> {
    store: S,
    config: GradebookConfig,
}

impl<S: RecordStore> GradebookApi<S> {
    pub fn new(store: S, config: GradebookConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn init(&mut self) -> Result<()> {
        self.store.ensure_initialized()
    }

    pub fn add_student(&mut self, draft: NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn begin_delete(&mut self) -> Result<DeleteSession> {
        commands::delete::prepare(&mut self.store)
    }

    pub fn commit_delete(
        &mut self,
        session: DeleteSession,
        id: StudentId,
    ) -> Result<commands::CmdResult> {
        session.commit(&mut self.store, id)
    }

    pub fn list_students(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store, self.config.list_limit)
    }

    pub fn stats(&mut self, subject: Option<&str>) -> Result<commands::CmdResult> {
        commands::stats::run(&mut self.store, subject)
    }
}

pub use commands::{CmdMessage, CmdResult, GradeStats, MessageLevel, StatsScope};
