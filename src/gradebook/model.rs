use std::fmt;
use std::str::FromStr;

pub type StudentId = u64;

/// Subject recorded when the user leaves the subject prompt blank.
pub const DEFAULT_SUBJECT: &str = "General";

pub const MIN_GRADE: u8 = 0;
pub const MAX_GRADE: u8 = 100;

/// A grade in `[0, 100]`. The only way to build one is through a range check,
/// so a `Grade` held anywhere in the crate is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    pub fn new(value: i64) -> Option<Self> {
        if (MIN_GRADE as i64..=MAX_GRADE as i64).contains(&value) {
            Some(Grade(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeParseError {
    NotAnInteger,
    OutOfRange(i64),
}

impl fmt::Display for GradeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeParseError::NotAnInteger => write!(f, "not an integer"),
            GradeParseError::OutOfRange(v) => {
                write!(f, "{} is outside {}-{}", v, MIN_GRADE, MAX_GRADE)
            }
        }
    }
}

impl std::error::Error for GradeParseError {}

impl FromStr for Grade {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| GradeParseError::NotAnInteger)?;
        Grade::new(value).ok_or(GradeParseError::OutOfRange(value))
    }
}

/// One row of the gradebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub subject: String,
    /// `None` is an unknown grade: missing, unparseable, or out of range on load.
    pub grade: Option<Grade>,
}

impl Student {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        subject: impl Into<String>,
        grade: Option<Grade>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subject: subject.into(),
            grade,
        }
    }
}

/// A validated request to add a student. The id is assigned by the store's
/// current contents at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub subject: String,
    pub grade: Grade,
}

impl NewStudent {
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            subject: self.subject,
            grade: Some(self.grade),
        }
    }
}
