//! Exam scheduling pipeline and schedule statistics.
//!
//! `ExamScheduler` wires the three stages into one side-effect-free call:
//! `build(records) → color(graph) → validate(enrollment, schedule)`. Every
//! stage returns a new immutable value; no state survives between runs.
//!
//! # Statistics
//!
//! `ScheduleStats` summarizes a run: sizes, conflict density, slots used
//! against the degree bound, and per-slot load.
//!
//! # References
//!
//! - Brélaz (1979), "New methods to color the vertices of a graph"
//! - Carter, Laporte & Lee (1996), "Examination timetabling: Algorithmic
//!   strategies and applications"

mod config;
mod pipeline;
mod stats;

pub use config::SchedulerConfig;
pub use pipeline::{ExamScheduler, ScheduleOutcome, ScheduleRequest};
pub use stats::ScheduleStats;
