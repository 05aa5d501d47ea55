//! Enrollment record model.
//!
//! An enrollment record states that one student sits one subject's exam.
//! Records are the raw input of the pipeline; duplicates are allowed and
//! collapse to a single enrollment when the conflict graph is built.

use serde::{Deserialize, Serialize};

/// One student-subject enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Student identifier (non-empty, trimmed).
    pub student_id: String,
    /// Subject (exam) identifier (non-empty, trimmed).
    pub subject_id: String,
    /// Display name of the student, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}

impl EnrollmentRecord {
    /// Creates a record without a student name.
    pub fn new(student_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            subject_id: subject_id.into(),
            student_name: None,
        }
    }

    /// Sets the student's display name.
    pub fn with_student_name(mut self, name: impl Into<String>) -> Self {
        self.student_name = Some(name.into());
        self
    }

    /// Expands one student's course load into records.
    pub fn for_student<I, S>(student_id: &str, subject_ids: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        subject_ids
            .into_iter()
            .map(|subject| Self::new(student_id, subject))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let r = EnrollmentRecord::new("S1", "Math").with_student_name("An Nguyen");
        assert_eq!(r.student_id, "S1");
        assert_eq!(r.subject_id, "Math");
        assert_eq!(r.student_name.as_deref(), Some("An Nguyen"));
    }

    #[test]
    fn test_for_student() {
        let records = EnrollmentRecord::for_student("S1", ["Math", "Phys"]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.student_id == "S1"));
        assert_eq!(records[1].subject_id, "Phys");
    }

    #[test]
    fn test_record_json_without_name() {
        let json = r#"{"student_id":"S1","subject_id":"Chem"}"#;
        let r: EnrollmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r, EnrollmentRecord::new("S1", "Chem"));
        assert_eq!(serde_json::to_string(&r).unwrap(), json);
    }
}
