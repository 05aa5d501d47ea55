//! Input and output validation for exam timetabling.
//!
//! Two independent checks bracket the pipeline:
//!
//! - [`validate_records`] rejects malformed identifiers before a graph is
//!   built (empty or untrimmed student/subject IDs).
//! - [`validate_schedule`] re-checks a finished schedule against the
//!   enrollment data: no student may have two exams in one slot, and every
//!   enrolled subject must have a slot.
//!
//! The schedule check is an oracle over the colorer's output, not a repair
//! step. A non-empty report after a normal run means a bug upstream.

use std::collections::BTreeMap;

use crate::graph::Enrollment;
use crate::models::{
    ConflictReport, EnrollmentRecord, Schedule, Slot, StudentConflict, UnassignedSubject,
};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A record has an empty student ID.
    EmptyStudentId,
    /// A record (or registered subject) has an empty subject ID.
    EmptySubjectId,
    /// An identifier has leading or trailing whitespace.
    UntrimmedIdentifier,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Checks one identifier. `empty_kind` is reported when the value is blank.
pub(crate) fn check_identifier(
    location: &str,
    field: &str,
    value: &str,
    empty_kind: ValidationErrorKind,
) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::new(
            empty_kind,
            format!("{location}: empty {field}"),
        ))
    } else if value.trim() != value {
        Some(ValidationError::new(
            ValidationErrorKind::UntrimmedIdentifier,
            format!("{location}: {field} '{value}' has surrounding whitespace"),
        ))
    } else {
        None
    }
}

/// Checks both identifiers of one record.
pub(crate) fn check_record(index: usize, record: &EnrollmentRecord) -> Vec<ValidationError> {
    let location = format!("record {index}");
    check_identifier(
        &location,
        "student_id",
        &record.student_id,
        ValidationErrorKind::EmptyStudentId,
    )
    .into_iter()
    .chain(check_identifier(
        &location,
        "subject_id",
        &record.subject_id,
        ValidationErrorKind::EmptySubjectId,
    ))
    .collect()
}

/// Validates raw enrollment records.
///
/// Checks every record for:
/// 1. Non-empty student ID
/// 2. Non-empty subject ID
/// 3. No leading/trailing whitespace in either ID
///
/// Duplicates are not errors. Student names are not checked.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[EnrollmentRecord]) -> ValidationResult {
    let errors: Vec<ValidationError> = records
        .iter()
        .enumerate()
        .flat_map(|(i, record)| check_record(i, record))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a schedule against enrollment data.
///
/// For each student, groups the slots of all enrolled subjects; any slot
/// holding two or more of the student's subjects becomes a
/// [`StudentConflict`]. Enrolled subjects missing from the schedule, or
/// holding the invalid slot 0, are listed separately in
/// [`ConflictReport::unassigned`].
///
/// # Complexity
/// O(E log E) where E = number of distinct enrollments.
pub fn validate_schedule(enrollment: &Enrollment, schedule: &Schedule) -> ConflictReport {
    let mut report = ConflictReport::new();

    for (student_id, subjects) in enrollment.students() {
        let mut by_slot: BTreeMap<Slot, Vec<String>> = BTreeMap::new();

        for subject_id in subjects {
            match schedule.slot_of(subject_id).filter(|&slot| slot >= 1) {
                Some(slot) => by_slot.entry(slot).or_default().push(subject_id.clone()),
                None => report.unassigned.push(UnassignedSubject {
                    student_id: student_id.to_string(),
                    subject_id: subject_id.clone(),
                }),
            }
        }

        for (slot, subject_ids) in by_slot {
            if subject_ids.len() > 1 {
                report.conflicts.push(StudentConflict {
                    student_id: student_id.to_string(),
                    student_name: enrollment.student_name(student_id).map(str::to_string),
                    slot,
                    subject_ids,
                });
            }
        }
    }

    report
}
