//! Id allocation.
//!
//! The next id is one past the largest id currently stored. Gaps left by
//! deletes are never filled.

use crate::model::{Student, StudentId};

/// Returns `1` for an empty roster, otherwise `max(id) + 1`. `None` once the
/// largest id is `StudentId::MAX`: there is no fresh id left to hand out.
pub fn next_id(students: &[Student]) -> Option<StudentId> {
    match students.iter().map(|s| s.id).max() {
        None => Some(1),
        Some(max) => max.checked_add(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: StudentId) -> Student {
        Student::new(id, format!("Student {}", id), "General", None)
    }

    #[test]
    fn empty_roster_starts_at_one() {
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn skips_gaps_left_by_deletes() {
        let students = vec![student(1), student(2), student(4)];
        assert_eq!(next_id(&students), Some(5));
    }

    #[test]
    fn ignores_file_order() {
        let students = vec![student(9), student(3), student(5)];
        assert_eq!(next_id(&students), Some(10));
    }

    #[test]
    fn ids_above_u32_keep_counting() {
        let students = vec![student(5_000_000_000)];
        assert_eq!(next_id(&students), Some(5_000_000_001));
    }

    #[test]
    fn exhausted_at_max_id() {
        let students = vec![student(1), student(StudentId::MAX)];
        assert_eq!(next_id(&students), None);
    }
}
