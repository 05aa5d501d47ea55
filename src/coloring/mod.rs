//! Slot assignment by graph coloring.
//!
//! Colors the subject conflict graph so that no two conflicting subjects
//! share a slot, trying to keep the slot count low.
//!
//! # Guarantees
//!
//! - Proper coloring: adjacent subjects never share a slot.
//! - Slots used ≤ max degree + 1.
//! - Deterministic for a fixed graph and [`TieBreak`].
//!
//! The minimum slot count (chromatic number) is NP-hard to find; DSatur is
//! a heuristic and may use more slots than necessary.

mod dsatur;
mod tie_break;

pub use dsatur::DSaturColorer;
pub use tie_break::TieBreak;
