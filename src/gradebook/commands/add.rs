use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GradebookError, Result};
use crate::ids::next_id;
use crate::model::{Grade, GradeParseError, NewStudent, DEFAULT_SUBJECT};
use crate::store::RecordStore;
use tracing::info;

pub fn parse_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(GradebookError::InvalidInput("Name cannot be empty.".into()));
    }
    Ok(name.to_string())
}

/// Blank subjects fall back to [`DEFAULT_SUBJECT`].
pub fn parse_subject(raw: &str) -> String {
    match raw.trim() {
        "" => DEFAULT_SUBJECT.to_string(),
        subject => subject.to_string(),
    }
}

pub fn parse_grade(raw: &str) -> Result<Grade> {
    raw.parse::<Grade>().map_err(|e| match e {
        GradeParseError::NotAnInteger => GradebookError::InvalidInput(
            "Invalid grade. Use an integer between 0 and 100.".into(),
        ),
        GradeParseError::OutOfRange(_) => {
            GradebookError::InvalidInput("Grade must be between 0 and 100.".into())
        }
    })
}

pub fn run<S: RecordStore>(store: &mut S, draft: NewStudent) -> Result<CmdResult> {
    let mut students = store.load_all()?;
    let id = next_id(&students).ok_or_else(|| {
        GradebookError::InvalidInput("No free student id left.".into())
    })?;
    let student = draft.into_student(id);

    students.push(student.clone());
    store.save_all(&students)?;
    info!(id, "added student");

    let message = format!(
        "Added student id={}: {} ({}) grade={}",
        student.id,
        student.name,
        student.subject,
        student.grade.map(|g| g.to_string()).unwrap_or_default()
    );
    Ok(CmdResult::default()
        .with_affected(vec![student])
        .with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentId;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn draft(name: &str, subject: &str, grade: i64) -> NewStudent {
        NewStudent {
            name: name.into(),
            subject: subject.into(),
            grade: Grade::new(grade).unwrap(),
        }
    }

    #[test]
    fn first_student_gets_id_one() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("Ada", "CS", 95)).unwrap();

        assert_eq!(store.students().len(), 1);
        let stored = &store.students()[0];
        assert_eq!(stored.id, 1);
        assert_eq!(stored.name, "Ada");
        assert_eq!(stored.grade, Grade::new(95));
        assert_eq!(
            result.messages[0].content,
            "Added student id=1: Ada (CS) grade=95"
        );
    }

    #[test]
    fn id_follows_highest_existing() {
        let mut store = StoreFixture::new()
            .with_student(1, "A", "X", 50)
            .with_student(2, "B", "X", 60)
            .with_student(4, "D", "X", 70)
            .build();

        let result = run(&mut store, draft("E", "X", 80)).unwrap();
        assert_eq!(result.affected[0].id, 5);
    }

    #[test]
    fn loads_once_and_saves_once() {
        let mut store = StoreFixture::new().with_students(3).build();
        run(&mut store, draft("New", "Math", 88)).unwrap();
        assert_eq!(store.loads(), 1);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn appends_without_touching_existing_records() {
        let mut store = StoreFixture::new()
            .with_student(1, "A", "X", 50)
            .with_ungraded(2, "B", "Y")
            .build();
        let before = store.students().to_vec();

        run(&mut store, draft("C", "Z", 70)).unwrap();
        assert_eq!(&store.students()[..2], before.as_slice());
    }

    #[test]
    fn refuses_to_reuse_the_maximum_id() {
        let mut store = StoreFixture::new()
            .with_student(StudentId::MAX, "Max", "X", 50)
            .build();

        let err = run(&mut store, draft("New", "X", 60)).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "No free student id left.");
        assert_eq!(store.students().len(), 1);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn write_failure_is_fatal() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let err = run(&mut store, draft("Ada", "CS", 95)).unwrap_err();
        assert!(!err.is_recoverable());
        assert!(store.students().is_empty());
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(parse_name("  Ada ").unwrap(), "Ada");
        let err = parse_name("   ").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn blank_subject_defaults_to_general() {
        assert_eq!(parse_subject(""), "General");
        assert_eq!(parse_subject("   "), "General");
        assert_eq!(parse_subject(" Math "), "Math");
    }

    #[test]
    fn grade_validation_messages() {
        assert_eq!(parse_grade("95").unwrap().value(), 95);
        assert_eq!(
            parse_grade("150").unwrap_err().to_string(),
            "Grade must be between 0 and 100."
        );
        assert_eq!(
            parse_grade("-5").unwrap_err().to_string(),
            "Grade must be between 0 and 100."
        );
        assert_eq!(
            parse_grade("ninety").unwrap_err().to_string(),
            "Invalid grade. Use an integer between 0 and 100."
        );
    }
}
