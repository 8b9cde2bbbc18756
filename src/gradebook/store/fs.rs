use super::{RecordStore, COLUMNS};
use crate::error::{GradebookError, Result};
use crate::model::{Grade, Student, StudentId};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store: one CSV file, rewritten in full on every save.
pub struct CsvStore {
    path: PathBuf,
}

/// Positions of the known columns in a file's header row. Files written by
/// hand may reorder or omit columns; fields are looked up by name.
struct ColumnMap {
    id: Option<usize>,
    name: Option<usize>,
    subject: Option<usize>,
    grade: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |wanted: &str| headers.iter().position(|h| h.trim() == wanted);
        Self {
            id: find(COLUMNS[0]),
            name: find(COLUMNS[1]),
            subject: find(COLUMNS[2]),
            grade: find(COLUMNS[3]),
        }
    }

    fn field<'r>(record: &'r StringRecord, idx: Option<usize>) -> &'r str {
        idx.and_then(|i| record.get(i)).unwrap_or("").trim()
    }

    fn parse(&self, record: &StringRecord) -> Option<Student> {
        let id = parse_id(Self::field(record, self.id))?;
        Some(Student {
            id,
            name: Self::field(record, self.name).to_string(),
            subject: Self::field(record, self.subject).to_string(),
            grade: Self::field(record, self.grade).parse::<Grade>().ok(),
        })
    }
}

fn parse_id(raw: &str) -> Option<StudentId> {
    match raw.parse::<StudentId>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GradebookError::Io)?;
            }
        }
        Ok(())
    }

    fn write_rows(&self, students: &[Student]) -> Result<()> {
        let mut writer = Writer::from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for s in students {
            let id = s.id.to_string();
            let grade = s.grade.map(|g| g.to_string()).unwrap_or_default();
            writer.write_record([id.as_str(), s.name.as_str(), s.subject.as_str(), grade.as_str()])?;
        }
        writer.flush().map_err(GradebookError::Io)?;
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn ensure_initialized(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.ensure_parent_dir()?;
        self.write_rows(&[])?;
        debug!(path = %self.path.display(), "created empty roster");
        Ok(())
    }

    fn load_all(&mut self) -> Result<Vec<Student>> {
        self.ensure_initialized()?;

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let columns = ColumnMap::from_headers(reader.headers()?);

        let mut students = Vec::new();
        let mut skipped = 0usize;
        for (row, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!(row = row + 1, error = %e, "skipping unreadable row");
                    skipped += 1;
                    continue;
                }
            };
            match columns.parse(&record) {
                Some(student) => students.push(student),
                None => {
                    debug!(row = row + 1, "skipping row without a valid id");
                    skipped += 1;
                }
            }
        }

        debug!(
            path = %self.path.display(),
            loaded = students.len(),
            skipped,
            "loaded roster"
        );
        Ok(students)
    }

    fn save_all(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_parent_dir()?;
        self.write_rows(students)?;
        debug!(path = %self.path.display(), saved = students.len(), "saved roster");
        Ok(())
    }
}
