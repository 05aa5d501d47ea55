//! Error types for exam timetabling.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the build → color → validate pipeline.
///
/// Empty input, duplicate enrollment records, and subjects without students
/// are not errors; they are handled as ordinary data.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Enrollment records carried malformed identifiers.
    ///
    /// Identifiers must be non-empty and trimmed before reaching the core.
    #[error("invalid enrollment input: {}", describe(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The produced schedule puts a student in two exams at once.
    ///
    /// Never expected for a graph built from the same enrollment; indicates
    /// a defect in graph construction or coloring.
    #[error(
        "schedule conflict detected for {students} student(s) (first: {first}); \
         this is an internal error, please report it"
    )]
    ConflictDetected {
        /// Number of students with colliding slots.
        students: usize,
        /// Identifier of the first offending student.
        first: String,
    },
}

fn describe(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}

/// Result alias for timetabling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message() {
        let err = ScheduleError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyStudentId, "record 0: empty student_id"),
            ValidationError::new(ValidationErrorKind::EmptySubjectId, "record 3: empty subject_id"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("record 0: empty student_id"));
        assert!(msg.contains("1 more"));
    }

    #[test]
    fn test_conflict_message() {
        let err = ScheduleError::ConflictDetected {
            students: 2,
            first: "S1".into(),
        };
        assert!(err.to_string().contains("2 student(s)"));
        assert!(err.to_string().contains("S1"));
    }
}
