//! Bipartite student ↔ subject relation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::EnrollmentRecord;

/// Deduplicated enrollment data derived from records.
///
/// Holds both directions of the relation plus the first non-empty display
/// name seen for each student. Subjects registered without students appear
/// in the subject map with an empty student set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    student_subjects: BTreeMap<String, BTreeSet<String>>,
    subject_students: BTreeMap<String, BTreeSet<String>>,
    student_names: BTreeMap<String, String>,
}

impl Enrollment {
    /// Inserts a record. Returns `false` if the pair was already present.
    pub(crate) fn insert(&mut self, record: &EnrollmentRecord) -> bool {
        if let Some(name) = record.student_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                self.student_names
                    .entry(record.student_id.clone())
                    .or_insert_with(|| name.to_string());
            }
        }

        self.subject_students
            .entry(record.subject_id.clone())
            .or_default()
            .insert(record.student_id.clone());
        self.student_subjects
            .entry(record.student_id.clone())
            .or_default()
            .insert(record.subject_id.clone())
    }

    pub(crate) fn register_subject(&mut self, subject_id: &str) {
        self.subject_students
            .entry(subject_id.to_string())
            .or_default();
    }

    /// Subjects a student is enrolled in.
    pub fn subjects_of(&self, student_id: &str) -> Option<&BTreeSet<String>> {
        self.student_subjects.get(student_id)
    }

    /// Students enrolled in a subject.
    pub fn students_of(&self, subject_id: &str) -> Option<&BTreeSet<String>> {
        self.subject_students.get(subject_id)
    }

    /// Number of students sitting a subject's exam (0 if unknown).
    pub fn class_size(&self, subject_id: &str) -> usize {
        self.students_of(subject_id).map_or(0, BTreeSet::len)
    }

    /// Display name of a student, if one was supplied.
    pub fn student_name(&self, student_id: &str) -> Option<&str> {
        self.student_names.get(student_id).map(String::as_str)
    }

    /// Students whose ID or display name contains `query`, ignoring case.
    ///
    /// Surrounding whitespace in the query is ignored; a blank query
    /// matches every student. Results are in student order.
    pub fn find_students(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.student_subjects
            .keys()
            .map(String::as_str)
            .filter(|id| {
                id.to_lowercase().contains(&needle)
                    || self
                        .student_name(id)
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Iterates `(student_id, subjects)` in student order.
    pub fn students(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.student_subjects.iter().map(|(s, subs)| (s.as_str(), subs))
    }

    /// Iterates subject IDs in subject order, including empty subjects.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subject_students.keys().map(String::as_str)
    }

    /// Number of distinct students.
    pub fn student_count(&self) -> usize {
        self.student_subjects.len()
    }

    /// Number of distinct subjects.
    pub fn subject_count(&self) -> usize {
        self.subject_students.len()
    }

    /// Number of distinct (student, subject) pairs.
    pub fn enrollment_count(&self) -> usize {
        self.student_subjects.values().map(BTreeSet::len).sum()
    }
}
