//! Exam timetabling by conflict-graph coloring.
//!
//! Assigns every subject (exam) to a numbered slot so that no student sits
//! two exams in the same slot, while keeping the number of slots low.
//!
//! # Modules
//!
//! - **`models`**: Data types: `EnrollmentRecord`, `Schedule`, `ConflictReport`
//! - **`graph`**: Enrollment relation and subject conflict graph construction
//! - **`coloring`**: DSatur slot assignment with deterministic tie-breaking
//! - **`validation`**: Identifier checks and post-hoc schedule verification
//! - **`scheduler`**: End-to-end pipeline, configuration, and statistics
//! - **`timetable`**: Per-slot and per-student tabular views
//!
//! # Pipeline
//!
//! ```text
//! EnrollmentRecord* ──build──▶ ExamInstance ──color──▶ Schedule ──validate──▶ ConflictReport
//! ```
//!
//! The crate is synchronous and performs no I/O. Loading spreadsheets,
//! rendering, and export are left to the caller.
//!
//! # References
//!
//! - Brélaz (1979), "New methods to color the vertices of a graph"
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"

pub mod coloring;
pub mod error;
pub mod graph;
pub mod models;
pub mod scheduler;
pub mod timetable;
pub mod validation;

pub use error::{Result, ScheduleError};
