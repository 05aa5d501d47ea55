//! Schedule statistics.
//!
//! Summarizes a built instance and its schedule for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slots used | Largest assigned slot |
//! | Degree bound | Max degree + 1 (DSatur upper bound) |
//! | Conflict density | Edges / (n·(n−1)/2) |
//! | Subjects per slot | Exams running in parallel |
//! | Students per slot | Seats needed in parallel |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::ExamInstance;
use crate::models::{Schedule, Slot};

/// Summary figures for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Distinct subjects.
    pub subject_count: usize,
    /// Distinct students.
    pub student_count: usize,
    /// Distinct (student, subject) pairs.
    pub enrollment_count: usize,
    /// Conflict graph edges.
    pub conflict_edges: usize,
    /// Largest subject degree.
    pub max_degree: usize,
    /// Slots used by the schedule.
    pub slots_used: Slot,
    /// Upper bound on slots guaranteed by DSatur.
    pub degree_bound: usize,
    /// Fraction of subject pairs in conflict (0.0..=1.0).
    pub conflict_density: f64,
    /// Number of subjects examined in each slot.
    pub subjects_per_slot: BTreeMap<Slot, usize>,
    /// Number of exam seats taken in each slot.
    pub students_per_slot: BTreeMap<Slot, usize>,
}

impl ScheduleStats {
    /// Computes statistics for a schedule of the given instance.
    pub fn calculate(instance: &ExamInstance, schedule: &Schedule) -> Self {
        let graph = &instance.graph;
        let enrollment = &instance.enrollment;

        let n = graph.subject_count();
        let pairs = n * n.saturating_sub(1) / 2;
        let conflict_density = if pairs == 0 {
            0.0
        } else {
            graph.edge_count() as f64 / pairs as f64
        };

        let mut subjects_per_slot: BTreeMap<Slot, usize> = BTreeMap::new();
        let mut students_per_slot: BTreeMap<Slot, usize> = BTreeMap::new();
        for (subject, slot) in schedule.iter() {
            *subjects_per_slot.entry(slot).or_insert(0) += 1;
            *students_per_slot.entry(slot).or_insert(0) += enrollment.class_size(subject);
        }

        Self {
            subject_count: n,
            student_count: enrollment.student_count(),
            enrollment_count: enrollment.enrollment_count(),
            conflict_edges: graph.edge_count(),
            max_degree: graph.max_degree(),
            slots_used: schedule.slot_count(),
            degree_bound: if n == 0 { 0 } else { graph.max_degree() + 1 },
            conflict_density,
            subjects_per_slot,
            students_per_slot,
        }
    }

    /// Whether the schedule fits in `max_slots` slots.
    pub fn within_slot_budget(&self, max_slots: Slot) -> bool {
        self.slots_used <= max_slots
    }

    /// Slot with the most exam seats; lowest slot wins ties.
    pub fn busiest_slot(&self) -> Option<(Slot, usize)> {
        self.students_per_slot
            .iter()
            .map(|(&slot, &seats)| (slot, seats))
            .fold(None, |best, (slot, seats)| match best {
                Some((_, top)) if top >= seats => best,
                _ => Some((slot, seats)),
            })
    }
}
