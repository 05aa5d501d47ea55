//! Schedule (solution) model.
//!
//! A schedule maps every subject to an exam slot. Slots are positive
//! integers; two subjects in the same slot are examined at the same time.
//! A schedule is produced once per coloring run and is read-only afterward.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An exam time slot (color). Always ≥ 1.
pub type Slot = u32;

/// A complete subject → slot assignment.
///
/// Deserialization rejects slot 0. Collecting from `(subject, slot)` pairs
/// does not check slots; [`crate::validation::validate_schedule`] reports
/// any subject left at slot 0 as unassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleData")]
pub struct Schedule {
    assignments: BTreeMap<String, Slot>,
}

#[derive(Deserialize)]
struct ScheduleData {
    assignments: BTreeMap<String, Slot>,
}

impl TryFrom<ScheduleData> for Schedule {
    type Error = String;

    fn try_from(data: ScheduleData) -> Result<Self, Self::Error> {
        match data.assignments.iter().find(|&(_, &slot)| slot == 0) {
            Some((subject, _)) => Err(format!("subject '{subject}' has slot 0; slots start at 1")),
            None => Ok(Self {
                assignments: data.assignments,
            }),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn assign(&mut self, subject_id: impl Into<String>, slot: Slot) {
        self.assignments.insert(subject_id.into(), slot);
    }

    /// Slot assigned to a subject.
    pub fn slot_of(&self, subject_id: &str) -> Option<Slot> {
        self.assignments.get(subject_id).copied()
    }

    /// Number of slots used: the largest assigned slot, or 0 when empty.
    pub fn slot_count(&self) -> Slot {
        self.assignments.values().copied().max().unwrap_or(0)
    }

    /// Number of scheduled subjects.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no subject is scheduled.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates `(subject_id, slot)` in subject order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> {
        self.assignments.iter().map(|(s, &slot)| (s.as_str(), slot))
    }

    /// Subjects examined in the given slot, in subject order.
    pub fn subjects_in_slot(&self, slot: Slot) -> Vec<&str> {
        self.iter()
            .filter(|&(_, s)| s == slot)
            .map(|(subject, _)| subject)
            .collect()
    }

    /// Groups subjects by slot.
    pub fn by_slot(&self) -> BTreeMap<Slot, Vec<&str>> {
        let mut groups: BTreeMap<Slot, Vec<&str>> = BTreeMap::new();
        for (subject, slot) in self.iter() {
            groups.entry(slot).or_default().push(subject);
        }
        groups
    }
}

impl<S: Into<String>> FromIterator<(S, Slot)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (S, Slot)>>(iter: I) -> Self {
        let mut schedule = Schedule::new();
        for (subject, slot) in iter {
            schedule.assign(subject, slot);
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        [("Math", 1), ("Phys", 2), ("Chem", 3), ("Bio", 1)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_slot_count() {
        assert_eq!(sample_schedule().slot_count(), 3);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.slot_count(), 0);
        assert!(s.is_empty());
        assert!(s.by_slot().is_empty());
    }

    #[test]
    fn test_slot_of() {
        let s = sample_schedule();
        assert_eq!(s.slot_of("Phys"), Some(2));
        assert_eq!(s.slot_of("History"), None);
    }

    #[test]
    fn test_subjects_in_slot() {
        let s = sample_schedule();
        assert_eq!(s.subjects_in_slot(1), vec!["Bio", "Math"]);
        assert!(s.subjects_in_slot(7).is_empty());
    }

    #[test]
    fn test_by_slot() {
        let schedule = sample_schedule();
        let groups = schedule.by_slot();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&1], vec!["Bio", "Math"]);
        assert_eq!(groups[&3], vec!["Chem"]);
    }

    #[test]
    fn test_json_shape() {
        let s: Schedule = [("A", 1)].into_iter().collect();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"assignments":{"A":1}}"#);
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_json_rejects_slot_zero() {
        let err = serde_json::from_str::<Schedule>(r#"{"assignments":{"A":1,"B":0}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("'B' has slot 0"));
    }
}
