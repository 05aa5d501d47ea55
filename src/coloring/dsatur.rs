//! DSatur slot assignment.
//!
//! # Algorithm
//!
//! 1. Every subject starts with saturation 0 and a fixed degree.
//! 2. Pop the uncolored subject with the highest (saturation, degree),
//!    ties resolved by [`TieBreak`] rank.
//! 3. Give it the smallest slot not used by an already-colored neighbor.
//! 4. For each uncolored neighbor that gained a *new distinct* slot among
//!    its colored neighbors, push a fresh heap entry with the raised
//!    saturation.
//! 5. Repeat until every subject is colored.
//!
//! The heap never decreases keys: outdated entries stay in place and are
//! skipped at pop time once their subject is colored (lazy deletion).
//!
//! # Complexity
//! O((V + E) log(V + E)) heap operations.
//!
//! # Reference
//! Brélaz (1979), "New methods to color the vertices of a graph",
//! Communications of the ACM 22(4), 251–256

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::debug;

use super::TieBreak;
use crate::graph::ConflictGraph;
use crate::models::{Schedule, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    saturation: usize,
    degree: usize,
    rank: Reverse<usize>,
    vertex: usize,
}

/// Distinct slots seen among each vertex's colored neighbors.
#[derive(Debug)]
struct SaturationTable {
    neighbor_slots: Vec<BTreeSet<Slot>>,
}

impl SaturationTable {
    fn new(vertices: usize) -> Self {
        Self {
            neighbor_slots: vec![BTreeSet::new(); vertices],
        }
    }

    /// Records that a neighbor of `vertex` took `slot`.
    /// Returns `true` if the saturation went up.
    fn record(&mut self, vertex: usize, slot: Slot) -> bool {
        self.neighbor_slots[vertex].insert(slot)
    }

    fn saturation(&self, vertex: usize) -> usize {
        self.neighbor_slots[vertex].len()
    }

    fn smallest_free_slot(&self, vertex: usize) -> Slot {
        let mut slot: Slot = 1;
        for &used in &self.neighbor_slots[vertex] {
            if used != slot {
                break;
            }
            slot += 1;
        }
        slot
    }
}

struct ColoringRun {
    slots: Vec<Slot>,
    #[cfg(test)]
    order: Vec<usize>,
    /// Heap entries popped, stale ones included.
    pops: usize,
    /// Pops that found their subject already colored.
    stale: usize,
}

/// Greedy saturation-degree colorer.
///
/// Produces a proper coloring using at most `max_degree + 1` slots. The
/// result is a heuristic, not a minimum, and is fully determined by the
/// graph and the tie-break policy.
///
/// # Example
/// ```
/// use exam_timetable::coloring::DSaturColorer;
/// use exam_timetable::graph::ConflictGraphBuilder;
/// use exam_timetable::models::EnrollmentRecord;
///
/// let mut records = EnrollmentRecord::for_student("S1", ["Math", "Phys"]);
/// records.extend(EnrollmentRecord::for_student("S2", ["Phys", "Chem"]));
/// records.extend(EnrollmentRecord::for_student("S3", ["Chem", "Math"]));
/// let instance = ConflictGraphBuilder::new().with_records(records).build().unwrap();
///
/// let schedule = DSaturColorer::new().color(&instance.graph);
/// assert_eq!(schedule.slot_of("Math"), Some(1));
/// assert_eq!(schedule.slot_of("Phys"), Some(2));
/// assert_eq!(schedule.slot_of("Chem"), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DSaturColorer {
    tie_break: TieBreak,
}

impl DSaturColorer {
    /// Creates a colorer with the default (input order) tie-break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The configured tie-break policy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Assigns a slot to every subject in the graph.
    ///
    /// Subjects without conflicts still receive a slot (always slot 1).
    /// An empty graph yields an empty schedule.
    pub fn color(&self, graph: &ConflictGraph) -> Schedule {
        let run = self.run(graph);
        debug!(
            subjects = graph.subject_count(),
            slots_used = run.slots.iter().copied().max().unwrap_or(0),
            heap_pops = run.pops,
            stale_entries = run.stale,
            tie_break = ?self.tie_break,
            "dsatur coloring finished"
        );

        graph
            .subject_ids()
            .iter()
            .zip(run.slots)
            .map(|(subject, slot)| (subject.clone(), slot))
            .collect()
    }

    fn run(&self, graph: &ConflictGraph) -> ColoringRun {
        let n = graph.subject_count();
        let ranks = self.tie_break.ranks(graph);
        let degree: Vec<usize> = (0..n).map(|v| graph.neighbor_indices(v).len()).collect();

        let mut saturation = SaturationTable::new(n);
        let mut slots: Vec<Option<Slot>> = vec![None; n];
        #[cfg(test)]
        let mut order = Vec::with_capacity(n);
        let mut pops = 0usize;
        let mut stale = 0usize;

        let mut heap: BinaryHeap<HeapEntry> = (0..n)
            .map(|v| HeapEntry {
                saturation: 0,
                degree: degree[v],
                rank: Reverse(ranks[v]),
                vertex: v,
            })
            .collect();

        while let Some(entry) = heap.pop() {
            pops += 1;
            let v = entry.vertex;
            if slots[v].is_some() {
                stale += 1;
                continue;
            }

            let slot = saturation.smallest_free_slot(v);
            slots[v] = Some(slot);
            #[cfg(test)]
            order.push(v);

            for &neighbor in graph.neighbor_indices(v) {
                if slots[neighbor].is_none() && saturation.record(neighbor, slot) {
                    heap.push(HeapEntry {
                        saturation: saturation.saturation(neighbor),
                        degree: degree[neighbor],
                        rank: Reverse(ranks[neighbor]),
                        vertex: neighbor,
                    });
                }
            }
        }

        ColoringRun {
            slots: slots.into_iter().flatten().collect(),
            #[cfg(test)]
            order,
            pops,
            stale,
        }
    }
}
