//! Deterministic tie-breaking for equal (saturation, degree) priorities.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::graph::ConflictGraph;

/// How the colorer orders subjects whose saturation and degree tie.
///
/// Every policy is reproducible: identical input and policy always yield
/// the identical schedule. The seeded policy draws from ChaCha8, whose
/// output stream is fixed for a given seed on every platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First appearance in the input (default).
    #[default]
    InputOrder,
    /// Lexicographic by subject ID.
    ById,
    /// Seeded random permutation of the subjects.
    Seeded(u64),
}

impl TieBreak {
    /// Rank of every vertex under this policy. Lower rank wins a tie.
    ///
    /// Returns a permutation of `0..graph.subject_count()` indexed by vertex.
    pub fn ranks(&self, graph: &ConflictGraph) -> Vec<usize> {
        let ids = graph.subject_ids();
        let mut order: Vec<usize> = (0..ids.len()).collect();

        match self {
            TieBreak::InputOrder => {}
            TieBreak::ById => order.sort_by(|&a, &b| ids[a].cmp(&ids[b])),
            TieBreak::Seeded(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                order.shuffle(&mut rng);
            }
        }

        let mut ranks = vec![0; order.len()];
        for (rank, &vertex) in order.iter().enumerate() {
            ranks[vertex] = rank;
        }
        ranks
    }
}
