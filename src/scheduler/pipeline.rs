//! Build → color → validate pipeline.
//!
//! # Algorithm
//!
//! 1. Build the enrollment relation and conflict graph from the records.
//! 2. Color the graph with DSatur under the configured tie-break.
//! 3. Re-validate the schedule against the enrollment.
//! 4. Compute statistics.
//!
//! Each run builds its own state from scratch; nothing is shared between
//! runs, so independent datasets may be scheduled on separate threads.

use tracing::{error, info, warn};

use super::{ScheduleStats, SchedulerConfig};
use crate::coloring::DSaturColorer;
use crate::error::{Result, ScheduleError};
use crate::graph::{ConflictGraphBuilder, ExamInstance};
use crate::models::{ConflictReport, EnrollmentRecord, Schedule};
use crate::validation::validate_schedule;

/// Input container for scheduling.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Enrollment records (duplicates allowed).
    pub records: Vec<EnrollmentRecord>,
    /// Extra subjects to schedule even without students.
    ///
    /// Registered after all subjects seen in `records`.
    pub subjects: Vec<String>,
}

impl ScheduleRequest {
    /// Creates a request from enrollment records.
    pub fn new(records: Vec<EnrollmentRecord>) -> Self {
        Self {
            records,
            subjects: Vec::new(),
        }
    }

    /// Adds subjects that must receive a slot.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Enrollment relation and conflict graph.
    pub instance: ExamInstance,
    /// Subject → slot assignment.
    pub schedule: Schedule,
    /// Validation result (empty on a correct run).
    pub report: ConflictReport,
    /// Summary statistics.
    pub stats: ScheduleStats,
}

impl ScheduleOutcome {
    /// Whether validation found no problems.
    pub fn is_clean(&self) -> bool {
        self.report.is_clean()
    }
}

/// Exam scheduler: runs the full pipeline with one configuration.
///
/// # Example
///
/// ```
/// use exam_timetable::models::EnrollmentRecord;
/// use exam_timetable::scheduler::ExamScheduler;
///
/// let mut records = EnrollmentRecord::for_student("S1", ["A"]);
/// records.extend(EnrollmentRecord::for_student("S2", ["B"]));
///
/// let outcome = ExamScheduler::new().schedule(&records).unwrap();
/// assert_eq!(outcome.schedule.slot_count(), 1);
/// assert!(outcome.is_clean());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExamScheduler {
    config: SchedulerConfig,
}

impl ExamScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules the given enrollment records.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidInput`] for malformed identifiers.
    /// - [`ScheduleError::ConflictDetected`] if validation fails and
    ///   `fail_on_conflict` is set.
    pub fn schedule(&self, records: &[EnrollmentRecord]) -> Result<ScheduleOutcome> {
        self.run(ConflictGraphBuilder::new().with_records(records.iter().cloned()))
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<ScheduleOutcome> {
        self.run(
            ConflictGraphBuilder::new()
                .with_records(request.records.iter().cloned())
                .with_subjects(request.subjects.iter().cloned()),
        )
    }

    fn run(&self, builder: ConflictGraphBuilder) -> Result<ScheduleOutcome> {
        let instance = builder.build()?;

        let schedule = DSaturColorer::new()
            .with_tie_break(self.config.tie_break)
            .color(&instance.graph);

        let report = validate_schedule(&instance.enrollment, &schedule);
        self.check_report(&report)?;

        let stats = ScheduleStats::calculate(&instance, &schedule);
        info!(
            subjects = stats.subject_count,
            students = stats.student_count,
            conflicts = stats.conflict_edges,
            slots = stats.slots_used,
            "exam schedule produced"
        );

        Ok(ScheduleOutcome {
            instance,
            schedule,
            report,
            stats,
        })
    }

    fn check_report(&self, report: &ConflictReport) -> Result<()> {
        if report.is_clean() {
            return Ok(());
        }

        let affected = report.affected_students();
        let first = affected.first().copied().unwrap_or_default().to_string();

        if self.config.fail_on_conflict {
            error!(
                students = affected.len(),
                first = %first,
                collisions = report.conflicts.len(),
                unassigned = report.unassigned.len(),
                "schedule failed validation"
            );
            Err(ScheduleError::ConflictDetected {
                students: affected.len(),
                first,
            })
        } else {
            warn!(
                students = affected.len(),
                first = %first,
                "schedule failed validation; returning it anyway"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::TieBreak;
    use crate::models::StudentConflict;

    fn sample_records() -> Vec<EnrollmentRecord> {
        let mut records = EnrollmentRecord::for_student("S1", ["Math", "Phys"]);
        records.extend(EnrollmentRecord::for_student("S2", ["Phys", "Chem"]));
        records.extend(EnrollmentRecord::for_student("S3", ["Chem", "Math"]));
        records
    }

    fn broken_report() -> ConflictReport {
        ConflictReport {
            conflicts: vec![StudentConflict {
                student_id: "S7".into(),
                student_name: None,
                slot: 1,
                subject_ids: vec!["A".into(), "B".into()],
            }],
            unassigned: Vec::new(),
        }
    }

    #[test]
    fn test_schedule_triangle() {
        let outcome = ExamScheduler::new().schedule(&sample_records()).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.schedule.slot_count(), 3);
        assert_eq!(outcome.stats.slots_used, 3);
        assert_eq!(outcome.instance.graph.edge_count(), 3);
    }

    #[test]
    fn test_schedule_request_with_extra_subjects() {
        let request = ScheduleRequest::new(sample_records()).with_subjects(["Art", "Music"]);
        let outcome = ExamScheduler::new().schedule_request(&request).unwrap();

        assert_eq!(outcome.schedule.len(), 5);
        assert_eq!(outcome.schedule.slot_of("Art"), Some(1));
        assert_eq!(outcome.schedule.slot_of("Music"), Some(1));
        assert_eq!(
            outcome.instance.graph.subject_ids().last().map(String::as_str),
            Some("Music")
        );
    }

    #[test]
    fn test_schedule_empty() {
        let outcome = ExamScheduler::new().schedule(&[]).unwrap();
        assert!(outcome.schedule.is_empty());
        assert_eq!(outcome.schedule.slot_count(), 0);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_invalid_input_propagates() {
        let err = ExamScheduler::new()
            .schedule(&[EnrollmentRecord::new("S1", "")])
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_config_tie_break_applied() {
        let records = vec![EnrollmentRecord::new("S1", "Zoo"), EnrollmentRecord::new("S2", "Art")];
        let scheduler = ExamScheduler::new()
            .with_config(SchedulerConfig::new().with_tie_break(TieBreak::ById));
        assert_eq!(scheduler.config().tie_break, TieBreak::ById);

        let outcome = scheduler.schedule(&records).unwrap();
        assert_eq!(outcome.schedule.slot_of("Zoo"), Some(1));
        assert_eq!(outcome.schedule.slot_of("Art"), Some(1));
    }

    #[test]
    fn test_conflict_is_fatal_by_default() {
        let err = ExamScheduler::new().check_report(&broken_report()).unwrap_err();
        match err {
            ScheduleError::ConflictDetected { students, first } => {
                assert_eq!(students, 1);
                assert_eq!(first, "S7");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_conflict_tolerated_when_configured() {
        let scheduler = ExamScheduler::new()
            .with_config(SchedulerConfig::new().with_fail_on_conflict(false));
        assert!(scheduler.check_report(&broken_report()).is_ok());
        assert!(scheduler.check_report(&ConflictReport::new()).is_ok());
    }
}
