//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::coloring::TieBreak;

/// Options for [`ExamScheduler`](super::ExamScheduler).
///
/// Deserializes with defaults for missing fields, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Tie-break policy for equal (saturation, degree) priorities.
    pub tie_break: TieBreak,
    /// Return an error when validation finds a conflict (default: true).
    ///
    /// When false, the conflict is logged and returned in the outcome.
    pub fail_on_conflict: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::InputOrder,
            fail_on_conflict: true,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets whether conflicts are fatal.
    pub fn with_fail_on_conflict(mut self, fail: bool) -> Self {
        self.fail_on_conflict = fail;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::new();
        assert_eq!(config.tie_break, TieBreak::InputOrder);
        assert!(config.fail_on_conflict);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: SchedulerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_json_overrides() {
        let json = r#"{"tie_break":{"seeded":11},"fail_on_conflict":false}"#;
        let config: SchedulerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tie_break, TieBreak::Seeded(11));
        assert!(!config.fail_on_conflict);
    }
}
