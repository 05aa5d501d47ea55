//! Enrollment relation and subject conflict graph.
//!
//! Turns raw [`EnrollmentRecord`](crate::models::EnrollmentRecord)s into a
//! bipartite student ↔ subject relation and an undirected conflict graph
//! over subjects: two subjects conflict iff at least one student sits both.
//!
//! Building twice from any permutation of the same records yields the same
//! edge set. Empty input yields an empty graph.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

mod builder;
mod conflict;
mod enrollment;

pub use builder::{ConflictGraphBuilder, ExamInstance};
pub use conflict::ConflictGraph;
pub use enrollment::Enrollment;
