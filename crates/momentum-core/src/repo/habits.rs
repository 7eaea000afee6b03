use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::new_id;

/// A daily habit. `completed` only means something for the current day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub completed: bool,
}

/// Result of flipping a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub completed: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitSet {
    habits: Vec<Habit>,
}

impl HabitSet {
    /// Fresh pending habits for each non-blank label.
    pub fn seeded<S: AsRef<str>>(labels: &[S]) -> Self {
        let habits = labels
            .iter()
            .map(|l| l.as_ref().trim())
            .filter(|l| !l.is_empty())
            .map(|label| Habit {
                id: new_id(),
                label: label.to_string(),
                completed: false,
            })
            .collect();
        Self { habits }
    }

    pub fn add(&mut self, label: &str) -> Result<&Habit, ValidationError> {
        let label = ValidationError::require_text("label", label)?;
        self.habits.push(Habit {
            id: new_id(),
            label: label.to_string(),
            completed: false,
        });
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Rename in place. History keeps the old label. Returns `Ok(false)` for
    /// an unknown id.
    pub fn rename(&mut self, id: &str, label: &str) -> Result<bool, ValidationError> {
        let label = ValidationError::require_text("label", label)?;
        match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.label = label.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flip `completed`. `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<ToggleOutcome> {
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        habit.completed = !habit.completed;
        Some(ToggleOutcome {
            completed: habit.completed,
            label: habit.label.clone(),
        })
    }

    /// Set every habit back to pending. Returns how many were completed.
    pub fn reset_completion(&mut self) -> usize {
        let mut cleared = 0;
        for habit in self.habits.iter_mut().filter(|h| h.completed) {
            habit.completed = false;
            cleared += 1;
        }
        cleared
    }

    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

/// Labels completed per calendar day, insertion ordered, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitHistory {
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl HabitHistory {
    /// Add `label` under `day`. Returns false when it was already recorded.
    pub fn record(&mut self, day: NaiveDate, label: &str) -> bool {
        let labels = self.days.entry(day).or_default();
        if labels.iter().any(|l| l == label) {
            return false;
        }
        labels.push(label.to_string());
        true
    }

    pub fn on(&self, day: NaiveDate) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn days(&self) -> &BTreeMap<NaiveDate, Vec<String>> {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn seeded_skips_blank_labels() {
        let set = HabitSet::seeded(&["Water", "  ", "Walk"]);
        assert_eq!(set.list().len(), 2);
        assert!(set.list().iter().all(|h| !h.completed));
    }

    #[test]
    fn toggle_flips_and_reports_label() {
        let mut set = HabitSet::seeded(&["Water"]);
        let id = set.list()[0].id.clone();
        assert_eq!(
            set.toggle(&id),
            Some(ToggleOutcome { completed: true, label: "Water".into() })
        );
        assert_eq!(set.toggle(&id).map(|o| o.completed), Some(false));
        assert_eq!(set.toggle("missing"), None);
    }

    #[test]
    fn reset_completion_counts_cleared() {
        let mut set = HabitSet::seeded(&["a", "b", "c"]);
        let ids: Vec<_> = set.list().iter().map(|h| h.id.clone()).collect();
        set.toggle(&ids[0]);
        set.toggle(&ids[2]);
        assert_eq!(set.reset_completion(), 2);
        assert_eq!(set.reset_completion(), 0);
    }

    #[test]
    fn rename_validates_and_ignores_unknown() {
        let mut set = HabitSet::seeded(&["a"]);
        let id = set.list()[0].id.clone();
        assert!(set.rename(&id, "").is_err());
        assert_eq!(set.rename("ghost", "b"), Ok(false));
        assert_eq!(set.rename(&id, " b "), Ok(true));
        assert_eq!(set.list()[0].label, "b");
    }

    #[test]
    fn history_is_set_like_per_day() {
        let mut history = HabitHistory::default();
        assert!(history.record(day(1), "Water"));
        assert!(!history.record(day(1), "Water"));
        assert!(history.record(day(1), "Walk"));
        assert!(history.record(day(2), "Water"));
        assert_eq!(history.on(day(1)), ["Water", "Walk"]);
        assert!(history.on(day(3)).is_empty());
    }

    #[test]
    fn history_serializes_with_iso_day_keys() {
        let mut history = HabitHistory::default();
        history.record(day(9), "Water");
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"2026-04-09":["Water"]}"#);
        let back: HabitHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
