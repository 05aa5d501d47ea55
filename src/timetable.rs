//! Tabular views of a finished schedule.
//!
//! Row-oriented projections for presentation and export: one table keyed
//! by slot, one keyed by student. Rendering and file formats belong to the
//! caller.

use serde::{Deserialize, Serialize};

use crate::graph::Enrollment;
use crate::models::{Schedule, Slot};

/// One subject in the per-slot table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRow {
    /// Exam slot.
    pub slot: Slot,
    /// Subject examined in the slot.
    pub subject_id: String,
    /// Students sitting the exam.
    pub student_count: usize,
}

/// One (student, subject) line in the per-student timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    /// Student identifier.
    pub student_id: String,
    /// Student display name, if known.
    pub student_name: Option<String>,
    /// Slot of the exam; `None` if the subject is unscheduled.
    pub slot: Option<Slot>,
    /// Subject identifier.
    pub subject_id: String,
}

/// Per-slot table: slot ascending, then larger exams first, then ID.
pub fn slot_table(enrollment: &Enrollment, schedule: &Schedule) -> Vec<SlotRow> {
    let mut rows: Vec<SlotRow> = schedule
        .iter()
        .map(|(subject, slot)| SlotRow {
            slot,
            subject_id: subject.to_string(),
            student_count: enrollment.class_size(subject),
        })
        .collect();

    rows.sort_by(|a, b| {
        a.slot
            .cmp(&b.slot)
            .then(b.student_count.cmp(&a.student_count))
            .then_with(|| a.subject_id.cmp(&b.subject_id))
    });
    rows
}

/// Per-student timetable: student ID, then slot (unscheduled last), then subject.
pub fn student_timetable(enrollment: &Enrollment, schedule: &Schedule) -> Vec<StudentRow> {
    let mut rows = Vec::with_capacity(enrollment.enrollment_count());

    for (student_id, subjects) in enrollment.students() {
        let name = enrollment.student_name(student_id);
        rows.extend(subjects.iter().map(|subject| StudentRow {
            student_id: student_id.to_string(),
            student_name: name.map(str::to_string),
            slot: schedule.slot_of(subject),
            subject_id: subject.clone(),
        }));
    }

    rows.sort_by(|a, b| {
        a.student_id
            .cmp(&b.student_id)
            .then(a.slot.is_none().cmp(&b.slot.is_none()))
            .then(a.slot.cmp(&b.slot))
            .then_with(|| a.subject_id.cmp(&b.subject_id))
    });
    rows
}
