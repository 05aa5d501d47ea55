//! Conflict graph construction.
//!
//! # Algorithm
//!
//! 1. Validate identifiers of all records and registered subjects.
//! 2. Collapse records into the bipartite student ↔ subject relation,
//!    registering subjects in order of first appearance.
//! 3. For every student, join each unordered pair of their subjects.
//!
//! # Complexity
//! O(Σ_s deg(s)²) over students s, where deg(s) is the student's course
//! load. Course loads are small relative to the subject count.

use tracing::debug;

use super::{ConflictGraph, Enrollment};
use crate::error::{Result, ScheduleError};
use crate::models::EnrollmentRecord;
use crate::validation::{check_identifier, check_record, ValidationErrorKind};

#[derive(Debug, Clone)]
enum Entry {
    Record(EnrollmentRecord),
    Subject(String),
}

/// The derived structures of one build: enrollment maps and conflict graph.
///
/// Rebuilt from scratch on every build; never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct ExamInstance {
    /// Student ↔ subject relation.
    pub enrollment: Enrollment,
    /// Subject conflict graph.
    pub graph: ConflictGraph,
}

/// Builds an [`ExamInstance`] from enrollment records.
///
/// Records and explicitly registered subjects are kept in call order;
/// that order fixes each subject's vertex index.
///
/// # Example
/// ```
/// use exam_timetable::graph::ConflictGraphBuilder;
/// use exam_timetable::models::EnrollmentRecord;
///
/// let instance = ConflictGraphBuilder::new()
///     .with_records(EnrollmentRecord::for_student("S1", ["Math", "Phys"]))
///     .with_subject("Art")
///     .build()
///     .unwrap();
///
/// assert!(instance.graph.are_adjacent("Math", "Phys"));
/// assert_eq!(instance.graph.degree("Art"), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictGraphBuilder {
    entries: Vec<Entry>,
}

impl ConflictGraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one enrollment record.
    pub fn with_record(mut self, record: EnrollmentRecord) -> Self {
        self.entries.push(Entry::Record(record));
        self
    }

    /// Adds enrollment records.
    pub fn with_records(mut self, records: impl IntoIterator<Item = EnrollmentRecord>) -> Self {
        self.entries
            .extend(records.into_iter().map(Entry::Record));
        self
    }

    /// Registers a subject that must be scheduled even with no students.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.entries.push(Entry::Subject(subject_id.into()));
        self
    }

    /// Registers several subjects.
    pub fn with_subjects<I, S>(mut self, subject_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(subject_ids.into_iter().map(|s| Entry::Subject(s.into())));
        self
    }

    /// Builds the enrollment maps and conflict graph.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] if any identifier is empty or
    /// untrimmed. All problems are reported together.
    pub fn build(&self) -> Result<ExamInstance> {
        self.validate()?;

        let mut instance = ExamInstance::default();
        let mut duplicates = 0usize;

        for entry in &self.entries {
            match entry {
                Entry::Record(record) => {
                    instance.graph.add_subject(&record.subject_id);
                    if !instance.enrollment.insert(record) {
                        duplicates += 1;
                    }
                }
                Entry::Subject(subject_id) => {
                    instance.graph.add_subject(subject_id);
                    instance.enrollment.register_subject(subject_id);
                }
            }
        }

        let ExamInstance { enrollment, graph } = &mut instance;
        for (_, subjects) in enrollment.students() {
            let indices: Vec<usize> = subjects
                .iter()
                .filter_map(|s| graph.index_of(s))
                .collect();
            for (i, &a) in indices.iter().enumerate() {
                for &b in &indices[i + 1..] {
                    graph.add_edge(a, b);
                }
            }
        }

        debug!(
            subjects = instance.graph.subject_count(),
            students = instance.enrollment.student_count(),
            edges = instance.graph.edge_count(),
            duplicates,
            "conflict graph built"
        );

        Ok(instance)
    }

    fn validate(&self) -> Result<()> {
        let records = self.entries.iter().filter_map(|e| match e {
            Entry::Record(r) => Some(r),
            Entry::Subject(_) => None,
        });
        let mut errors: Vec<_> = records
            .enumerate()
            .flat_map(|(i, record)| check_record(i, record))
            .collect();

        let subjects = self.entries.iter().filter_map(|e| match e {
            Entry::Subject(s) => Some(s),
            Entry::Record(_) => None,
        });
        for (i, subject_id) in subjects.enumerate() {
            errors.extend(check_identifier(
                &format!("registered subject {i}"),
                "subject_id",
                subject_id,
                ValidationErrorKind::EmptySubjectId,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidInput(errors))
        }
    }
}
