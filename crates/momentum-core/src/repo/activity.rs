use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::new_id;

/// One logged action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub text: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

/// Activity log, most recent entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Prepend a new entry stamped `now_ms`.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyField` if `text` trims to empty.
    pub fn append(&mut self, text: &str, now_ms: i64) -> Result<&ActivityEntry, ValidationError> {
        let text = ValidationError::require_text("text", text)?;
        self.entries.insert(
            0,
            ActivityEntry {
                id: new_id(),
                text: text.to_string(),
                timestamp: now_ms,
            },
        );
        Ok(&self.entries[0])
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Reorder most recent first. Entries with equal timestamps keep their
    /// relative order.
    pub fn sort_newest_first(&mut self) {
        self.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    /// First problem that makes this log unusable: a blank text or an id
    /// that appears twice.
    pub fn find_defect(&self) -> Option<String> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.text.trim().is_empty() {
                return Some(format!("entry '{}' has empty text", entry.id));
            }
            if !seen.insert(entry.id.as_str()) {
                return Some(format!("duplicate entry id '{}'", entry.id));
            }
        }
        None
    }

    pub fn list_all(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn append_rejects_blank_text() {
        let mut log = ActivityLog::default();
        assert!(log.append("   ", 1).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn append_trims_and_prepends() {
        let mut log = ActivityLog::default();
        log.append("first", 1).unwrap();
        log.append("  second ", 2).unwrap();
        let texts: Vec<_> = log.list_all().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn same_tick_entries_get_distinct_ids() {
        let mut log = ActivityLog::default();
        let a = log.append("a", 5).unwrap().id.clone();
        let b = log.append("b", 5).unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut log = ActivityLog::default();
        log.append("keep", 1).unwrap();
        assert!(!log.remove("nope"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn sort_newest_first_orders_by_timestamp() {
        let mut log: ActivityLog = serde_json::from_str(
            r#"[{"id":"a","text":"old","timestamp":1},{"id":"b","text":"new","timestamp":9},{"id":"c","text":"mid","timestamp":5}]"#,
        )
        .unwrap();
        log.sort_newest_first();
        let ids: Vec<_> = log.list_all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn find_defect_reports_blank_text_and_duplicate_ids() {
        let mut log = ActivityLog::default();
        log.append("fine", 1).unwrap();
        assert_eq!(log.find_defect(), None);

        let dup: ActivityLog = serde_json::from_str(
            r#"[{"id":"x","text":"one","timestamp":1},{"id":"x","text":"two","timestamp":2}]"#,
        )
        .unwrap();
        assert!(dup.find_defect().unwrap().contains("duplicate"));

        let blank: ActivityLog = serde_json::from_str(r#"[{"id":"y","text":"  ","timestamp":1}]"#).unwrap();
        assert!(blank.find_defect().unwrap().contains("empty text"));
    }

    proptest! {
        #[test]
        fn list_is_newest_first_and_counts_match(
            texts in proptest::collection::vec("[a-z ]{0,6}", 0..30),
            removals in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
        ) {
            let mut log = ActivityLog::default();
            let mut accepted = 0usize;
            for (i, text) in texts.iter().enumerate() {
                if log.append(text, i as i64).is_ok() {
                    accepted += 1;
                }
            }

            let mut removed = 0usize;
            for idx in removals {
                if log.is_empty() {
                    break;
                }
                let id = log.list_all()[idx.index(log.len())].id.clone();
                if log.remove(&id) {
                    removed += 1;
                }
            }

            prop_assert_eq!(log.len(), accepted - removed);
            let stamps: Vec<i64> = log.list_all().iter().map(|e| e.timestamp).collect();
            prop_assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
