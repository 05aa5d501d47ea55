//! Property-based tests for graph construction and coloring.
//!
//! Invariants checked over random enrollments:
//! - Conflict graph is symmetric and matches shared enrollment exactly
//! - Coloring is proper and within the max-degree + 1 bound
//! - Edge set does not depend on record order
//! - Coloring is deterministic for a fixed tie-break

use exam_timetable::coloring::{DSaturColorer, TieBreak};
use exam_timetable::graph::{ConflictGraphBuilder, ExamInstance};
use exam_timetable::models::EnrollmentRecord;
use exam_timetable::validation::validate_schedule;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Random enrollment over a small student/subject universe so conflicts are dense.
fn arb_records() -> impl Strategy<Value = Vec<EnrollmentRecord>> {
    proptest::collection::vec((0u8..15, 0u8..12), 0..80).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(student, subject)| {
                EnrollmentRecord::new(format!("S{student}"), format!("C{subject}"))
            })
            .collect()
    })
}

fn arb_tie_break() -> impl Strategy<Value = TieBreak> {
    prop_oneof![
        Just(TieBreak::InputOrder),
        Just(TieBreak::ById),
        any::<u64>().prop_map(TieBreak::Seeded),
    ]
}

fn build(records: Vec<EnrollmentRecord>) -> ExamInstance {
    ConflictGraphBuilder::new()
        .with_records(records)
        .build()
        .unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: adjacency is symmetric and equals "share a student"
    #[test]
    fn prop_graph_symmetric_and_exact(records in arb_records()) {
        let instance = build(records);
        let ids = instance.graph.subject_ids();

        for a in ids {
            prop_assert!(!instance.graph.are_adjacent(a, a));
            for b in ids {
                let ab = instance.graph.are_adjacent(a, b);
                prop_assert_eq!(ab, instance.graph.are_adjacent(b, a));

                if a != b {
                    let (sa, sb) = (
                        instance.enrollment.students_of(a).unwrap(),
                        instance.enrollment.students_of(b).unwrap(),
                    );
                    let shared = sa.intersection(sb).next().is_some();
                    prop_assert_eq!(ab, shared, "{} vs {}", a, b);
                }
            }
        }
    }

    /// Property: no student has two exams in one slot
    #[test]
    fn prop_coloring_is_proper(records in arb_records(), tie_break in arb_tie_break()) {
        let instance = build(records);
        let schedule = DSaturColorer::new().with_tie_break(tie_break).color(&instance.graph);

        prop_assert_eq!(schedule.len(), instance.graph.subject_count());
        for (a, b) in instance.graph.edges() {
            prop_assert_ne!(schedule.slot_of(a), schedule.slot_of(b));
        }
        prop_assert!(schedule.iter().all(|(_, slot)| slot >= 1));
        prop_assert!(validate_schedule(&instance.enrollment, &schedule).is_clean());
    }

    /// Property: slots used ≤ max degree + 1
    #[test]
    fn prop_degree_bound(records in arb_records(), tie_break in arb_tie_break()) {
        let instance = build(records);
        let schedule = DSaturColorer::new().with_tie_break(tie_break).color(&instance.graph);

        if instance.graph.is_empty() {
            prop_assert_eq!(schedule.slot_count(), 0);
        } else {
            prop_assert!(schedule.slot_count() as usize <= instance.graph.max_degree() + 1);
        }
    }

    /// Property: shuffling the records does not change the edge set
    #[test]
    fn prop_build_order_independent(
        (records, shuffled) in arb_records()
            .prop_flat_map(|r| (Just(r.clone()), Just(r).prop_shuffle()))
    ) {
        let a = build(records);
        let b = build(shuffled);
        prop_assert_eq!(a.graph.edges(), b.graph.edges());
        prop_assert_eq!(a.enrollment, b.enrollment);
    }

    /// Property: repeated runs give identical schedules
    #[test]
    fn prop_coloring_deterministic(records in arb_records(), tie_break in arb_tie_break()) {
        let instance = build(records.clone());
        let colorer = DSaturColorer::new().with_tie_break(tie_break);
        let first = colorer.color(&instance.graph);

        prop_assert_eq!(&colorer.color(&instance.graph), &first);
        prop_assert_eq!(&colorer.color(&build(records).graph), &first);
    }

    /// Property: ById results do not depend on record order
    #[test]
    fn prop_by_id_order_independent(
        (records, shuffled) in arb_records()
            .prop_flat_map(|r| (Just(r.clone()), Just(r).prop_shuffle()))
    ) {
        let colorer = DSaturColorer::new().with_tie_break(TieBreak::ById);
        let a = colorer.color(&build(records).graph);
        let b = colorer.color(&build(shuffled).graph);
        prop_assert_eq!(a, b);
    }
}
