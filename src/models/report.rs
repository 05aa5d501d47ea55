//! Conflict report model.
//!
//! Output of schedule validation. Purely observational: a report never
//! repairs the schedule it describes.

use serde::{Deserialize, Serialize};

use super::Slot;

/// A student with two or more exams in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentConflict {
    /// Offending student.
    pub student_id: String,
    /// Student display name, if known.
    pub student_name: Option<String>,
    /// The shared slot.
    pub slot: Slot,
    /// Subjects sharing `slot` (sorted, at least two).
    pub subject_ids: Vec<String>,
}

/// A subject a student is enrolled in that has no slot at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedSubject {
    /// Enrolled student.
    pub student_id: String,
    /// Subject missing from the schedule.
    pub subject_id: String,
}

/// Result of validating a schedule against enrollment data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Slot collisions, ordered by student then slot.
    pub conflicts: Vec<StudentConflict>,
    /// Enrolled subjects without a slot, ordered by student then subject.
    pub unassigned: Vec<UnassignedSubject>,
}

impl ConflictReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the schedule passed validation.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.unassigned.is_empty()
    }

    /// Distinct students affected by collisions or missing slots.
    pub fn affected_students(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .conflicts
            .iter()
            .map(|c| c.student_id.as_str())
            .chain(self.unassigned.iter().map(|u| u.student_id.as_str()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
