//! Portable export document and partial-merge import.
//!
//! Export writes every repository. Import is a field-by-field overwrite:
//! each recognized key that is present and truthy replaces its repository
//! wholesale, absent keys leave state alone. All fields are decoded before
//! any is applied, so a bad document changes nothing.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormatError;
use crate::progression::Analytics;
use crate::repo::{ActivityLog, FutureCostNotes, GoalSet, HabitHistory, HabitSet, PlanSet, WoopPlan};
use crate::state::State;
use crate::storage::Slot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub entries: ActivityLog,
    pub habits: HabitSet,
    pub vision: String,
    pub mini_goals: GoalSet,
    pub if_then_plans: PlanSet,
    pub woop: WoopPlan,
    pub points: u64,
    pub theme: String,
    pub habit_history: HabitHistory,
    pub future_cost_notes: FutureCostNotes,
    pub analytics: Analytics,
    pub exported_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture(state: &State, exported_at: DateTime<Utc>) -> Self {
        Self {
            entries: state.entries.clone(),
            habits: state.habits.clone(),
            vision: state.vision.clone(),
            mini_goals: state.goals.clone(),
            if_then_plans: state.plans.clone(),
            woop: state.woop.clone(),
            points: state.points,
            theme: state.theme.clone(),
            habit_history: state.habit_history.clone(),
            future_cost_notes: state.future_cost_notes.clone(),
            analytics: state.analytics,
            exported_at,
        }
    }
}

/// Keys that a successful import replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub applied: Vec<&'static str>,
}

/// Decoded import document, one optional replacement per repository.
#[derive(Debug, Clone, Default)]
pub struct ImportPatch {
    entries: Option<ActivityLog>,
    habits: Option<HabitSet>,
    vision: Option<String>,
    mini_goals: Option<GoalSet>,
    if_then_plans: Option<PlanSet>,
    woop: Option<WoopPlan>,
    points: Option<u64>,
    theme: Option<String>,
    habit_history: Option<HabitHistory>,
    future_cost_notes: Option<FutureCostNotes>,
    analytics: Option<Analytics>,
}

/// JavaScript-style truthiness, with empty containers counted as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn field<T: DeserializeOwned>(doc: &Map<String, Value>, key: &'static str) -> Result<Option<T>, FormatError> {
    match doc.get(key) {
        Some(value) if is_present(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| FormatError::Field {
                field: key,
                message: e.to_string(),
            }),
        _ => Ok(None),
    }
}

impl ImportPatch {
    /// Decode every recognized key. Unknown keys are ignored. Imported
    /// entries are put back in most-recent-first order.
    ///
    /// # Errors
    /// `FormatError` if the text is not a JSON object, any recognized key
    /// has the wrong shape, or `entries` holds a blank text or a repeated id.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let value: Value = serde_json::from_str(text).map_err(|e| FormatError::Unparseable(e.to_string()))?;
        let doc = value.as_object().ok_or(FormatError::NotAnObject)?;
        let entries = match field::<ActivityLog>(doc, "entries")? {
            Some(mut log) => {
                if let Some(message) = log.find_defect() {
                    return Err(FormatError::Field {
                        field: "entries",
                        message,
                    });
                }
                log.sort_newest_first();
                Some(log)
            }
            None => None,
        };
        Ok(Self {
            entries,
            habits: field(doc, "habits")?,
            vision: field(doc, "vision")?,
            mini_goals: field(doc, "miniGoals")?,
            if_then_plans: field(doc, "ifThenPlans")?,
            woop: field(doc, "woop")?,
            points: field(doc, "points")?,
            theme: field(doc, "theme")?,
            habit_history: field(doc, "habitHistory")?,
            future_cost_notes: field(doc, "futureCostNotes")?,
            analytics: field(doc, "analytics")?,
        })
    }

    /// Overwrite the repositories this patch carries. Returns the touched
    /// slots (for persistence) and the applied keys.
    pub fn apply(self, state: &mut State) -> (Vec<Slot>, ImportSummary) {
        let mut slots = Vec::new();
        let mut summary = ImportSummary::default();
        let mut mark = |slot: Slot, key: &'static str| {
            slots.push(slot);
            summary.applied.push(key);
        };

        if let Some(v) = self.entries {
            state.entries = v;
            mark(Slot::Entries, "entries");
        }
        if let Some(v) = self.habits {
            state.habits = v;
            mark(Slot::Habits, "habits");
        }
        if let Some(v) = self.vision {
            state.vision = v;
            mark(Slot::Vision, "vision");
        }
        if let Some(v) = self.mini_goals {
            state.goals = v;
            mark(Slot::MiniGoals, "miniGoals");
        }
        if let Some(v) = self.if_then_plans {
            state.plans = v;
            mark(Slot::IfThenPlans, "ifThenPlans");
        }
        if let Some(v) = self.woop {
            state.woop = v;
            mark(Slot::Woop, "woop");
        }
        if let Some(v) = self.points {
            state.points = v;
            mark(Slot::Points, "points");
        }
        if let Some(v) = self.theme {
            state.theme = v;
            mark(Slot::ActiveTheme, "theme");
        }
        if let Some(v) = self.habit_history {
            state.habit_history = v;
            mark(Slot::HabitHistory, "habitHistory");
        }
        if let Some(v) = self.future_cost_notes {
            state.future_cost_notes = v;
            mark(Slot::FutureCostNotes, "futureCostNotes");
        }
        if let Some(v) = self.analytics {
            state.analytics = v;
            mark(Slot::Analytics, "analytics");
        }

        (slots, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values_are_skipped() {
        let patch = ImportPatch::parse(
            r#"{"points": 0, "vision": "", "entries": [], "woop": {}, "theme": null, "analytics": false}"#,
        )
        .unwrap();
        let mut state = State::default();
        state.points = 9;
        let before = state.clone();
        let (slots, summary) = patch.apply(&mut state);
        assert!(slots.is_empty());
        assert!(summary.applied.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(matches!(ImportPatch::parse("[1,2]"), Err(FormatError::NotAnObject)));
        assert!(matches!(ImportPatch::parse("not json"), Err(FormatError::Unparseable(_))));
    }

    #[test]
    fn wrong_shape_names_the_field() {
        let err = ImportPatch::parse(r#"{"points": 5, "habits": "lots"}"#).unwrap_err();
        assert!(matches!(err, FormatError::Field { field: "habits", .. }));
        let err = ImportPatch::parse(r#"{"points": -5}"#).unwrap_err();
        assert!(matches!(err, FormatError::Field { field: "points", .. }));
    }

    #[test]
    fn imported_entries_are_reordered_newest_first() {
        let patch = ImportPatch::parse(
            r#"{"entries": [{"id":"a","text":"first","timestamp":100},{"id":"b","text":"second","timestamp":300},{"id":"c","text":"middle","timestamp":200}]}"#,
        )
        .unwrap();
        let mut state = State::default();
        patch.apply(&mut state);
        let ids: Vec<_> = state.entries.list_all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn duplicate_or_blank_entries_are_rejected() {
        let err = ImportPatch::parse(
            r#"{"entries": [{"id":"a","text":"x","timestamp":1},{"id":"a","text":"y","timestamp":2}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::Field { field: "entries", .. }));
        let err = ImportPatch::parse(r#"{"entries": [{"id":"a","text":" ","timestamp":1}]}"#).unwrap_err();
        assert!(matches!(err, FormatError::Field { field: "entries", .. }));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let patch = ImportPatch::parse(r#"{"exportedAt": "whenever", "unicorns": 3, "points": 7}"#).unwrap();
        let mut state = State::default();
        let (slots, summary) = patch.apply(&mut state);
        assert_eq!(slots, vec![Slot::Points]);
        assert_eq!(summary.applied, vec!["points"]);
        assert_eq!(state.points, 7);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let snapshot = Snapshot::capture(&State::default(), DateTime::<Utc>::default());
        let value = serde_json::to_value(&snapshot).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "entries", "habits", "vision", "miniGoals", "ifThenPlans", "woop", "points",
            "theme", "habitHistory", "futureCostNotes", "analytics", "exportedAt",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj["analytics"]["timerSessions"], 0);
    }
}
