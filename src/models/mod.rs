//! Exam timetabling domain models.
//!
//! Plain data types flowing through the pipeline: raw enrollment input,
//! the produced schedule, and the validation report.
//!
//! # Domain Mappings
//!
//! | exam-timetable | Graph coloring | University |
//! |----------------|----------------|------------|
//! | Subject | Vertex | Course exam |
//! | Student | Clique generator | Enrolled student |
//! | Slot | Color | Exam session |
//! | Schedule | Coloring | Exam timetable |

mod enrollment;
mod report;
mod schedule;

pub use enrollment::EnrollmentRecord;
pub use report::{ConflictReport, StudentConflict, UnassignedSubject};
pub use schedule::{Schedule, Slot};
