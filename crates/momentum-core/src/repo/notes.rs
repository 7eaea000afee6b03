use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One "future cost" reflection per calendar day, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FutureCostNotes {
    notes: BTreeMap<NaiveDate, String>,
}

impl FutureCostNotes {
    pub fn set(&mut self, day: NaiveDate, text: &str) -> Result<(), ValidationError> {
        let text = ValidationError::require_text("note", text)?;
        self.notes.insert(day, text.to_string());
        Ok(())
    }

    pub fn get(&self, day: NaiveDate) -> Option<&str> {
        self.notes.get(&day).map(String::as_str)
    }

    pub fn all(&self) -> &BTreeMap<NaiveDate, String> {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins_per_day() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let mut notes = FutureCostNotes::default();
        notes.set(day, "skipping the gym costs me sleep").unwrap();
        notes.set(day, "skipping the gym costs me mood").unwrap();
        assert_eq!(notes.all().len(), 1);
        assert_eq!(notes.get(day), Some("skipping the gym costs me mood"));
    }

    #[test]
    fn blank_note_keeps_previous() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let mut notes = FutureCostNotes::default();
        notes.set(day, "kept").unwrap();
        assert!(notes.set(day, "  ").is_err());
        assert_eq!(notes.get(day), Some("kept"));
    }
}
