//! Subject conflict graph.

use std::collections::{BTreeSet, HashMap};

/// Undirected simple graph over subjects.
///
/// An edge joins two distinct subjects that share at least one student.
/// Subjects are stored densely in registration order; that order is the
/// colorer's default tie-break. No self-loops, no multi-edges, and
/// `adjacent(u, v) ⇔ adjacent(v, u)` by construction.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    subjects: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl ConflictGraph {
    /// Registers a subject, returning its vertex index.
    pub(crate) fn add_subject(&mut self, subject_id: &str) -> usize {
        if let Some(&idx) = self.index.get(subject_id) {
            return idx;
        }
        let idx = self.subjects.len();
        self.subjects.push(subject_id.to_string());
        self.index.insert(subject_id.to_string(), idx);
        self.adjacency.push(BTreeSet::new());
        idx
    }

    /// Adds an undirected edge. Self-loops are ignored.
    pub(crate) fn add_edge(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &BTreeSet<usize> {
        &self.adjacency[idx]
    }

    /// Number of subjects (vertices).
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the graph has no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Subject IDs in registration order.
    pub fn subject_ids(&self) -> &[String] {
        &self.subjects
    }

    /// Vertex index of a subject.
    pub fn index_of(&self, subject_id: &str) -> Option<usize> {
        self.index.get(subject_id).copied()
    }

    /// Degree (number of conflicting subjects) of a subject.
    pub fn degree(&self, subject_id: &str) -> Option<usize> {
        self.index_of(subject_id).map(|i| self.adjacency[i].len())
    }

    /// Largest degree in the graph (0 when empty).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Subjects conflicting with `subject_id`, sorted by ID.
    pub fn neighbors(&self, subject_id: &str) -> Vec<&str> {
        let Some(idx) = self.index_of(subject_id) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self.adjacency[idx]
            .iter()
            .map(|&n| self.subjects[n].as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// Whether two subjects share a student.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => self.adjacency[ia].contains(&ib),
            _ => false,
        }
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// All edges as `(smaller_id, larger_id)`, sorted.
    ///
    /// Independent of registration order, so two graphs built from
    /// permutations of the same records compare equal here.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (a, neighbors) in self.adjacency.iter().enumerate() {
            for &b in neighbors.iter().filter(|&&b| b > a) {
                let (x, y) = (self.subjects[a].as_str(), self.subjects[b].as_str());
                out.push(if x < y { (x, y) } else { (y, x) });
            }
        }
        out.sort_unstable();
        out
    }
}
