use super::RecordStore;
use crate::error::{GradebookError, Result};
use crate::model::Student;

/// In-memory roster for testing.
///
/// Counts loads and saves so tests can check that a command touched the
/// store exactly as often as it should.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
    initialized: bool,
    loads: usize,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students,
            initialized: true,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl RecordStore for InMemoryStore {
    fn ensure_initialized(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn load_all(&mut self) -> Result<Vec<Student>> {
        self.ensure_initialized()?;
        self.loads += 1;
        Ok(self.students.clone())
    }

    fn save_all(&mut self, students: &[Student]) -> Result<()> {
        if self.simulate_write_error {
            return Err(GradebookError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        self.initialized = true;
        self.saves += 1;
        self.students = students.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Grade, StudentId};

    pub struct StoreFixture {
        students: Vec<Student>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                students: Vec::new(),
            }
        }

        pub fn with_student(
            mut self,
            id: StudentId,
            name: &str,
            subject: &str,
            grade: u8,
        ) -> Self {
            self.students
                .push(Student::new(id, name, subject, Grade::new(grade as i64)));
            self
        }

        pub fn with_ungraded(mut self, id: StudentId, name: &str, subject: &str) -> Self {
            self.students.push(Student::new(id, name, subject, None));
            self
        }

        pub fn with_students(mut self, count: StudentId) -> Self {
            for i in 1..=count {
                let grade = Grade::new((60 + i % 40) as i64);
                self.students
                    .push(Student::new(i, format!("Student {}", i), "General", grade));
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_students(self.students)
        }
    }
}
