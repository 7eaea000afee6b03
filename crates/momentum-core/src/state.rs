//! The full in-memory state surface and its mapping onto storage slots.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::PersistenceError;
use crate::progression::{Analytics, DEFAULT_THEME};
use crate::repo::{ActivityLog, FutureCostNotes, GoalSet, HabitHistory, HabitSet, PlanSet, WoopPlan};
use crate::storage::slots::{self, Slot};
use crate::storage::SlotStore;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub entries: ActivityLog,
    pub habits: HabitSet,
    pub vision: String,
    pub goals: GoalSet,
    pub plans: PlanSet,
    pub woop: WoopPlan,
    pub points: u64,
    pub last_reset_day: Option<NaiveDate>,
    /// Color identifier of the active theme.
    pub theme: String,
    pub audio_shield: bool,
    pub reminders: bool,
    pub analytics: Analytics,
    pub habit_history: HabitHistory,
    pub future_cost_notes: FutureCostNotes,
}

impl Default for State {
    fn default() -> Self {
        Self {
            entries: ActivityLog::default(),
            habits: HabitSet::default(),
            vision: String::new(),
            goals: GoalSet::default(),
            plans: PlanSet::default(),
            woop: WoopPlan::default(),
            points: 0,
            last_reset_day: None,
            theme: DEFAULT_THEME.color.to_string(),
            audio_shield: false,
            reminders: false,
            analytics: Analytics::default(),
            habit_history: HabitHistory::default(),
            future_cost_notes: FutureCostNotes::default(),
        }
    }
}

/// Startup always succeeds; unreadable slots degrade to defaults.
fn read(store: &dyn SlotStore, slot: Slot) -> Option<String> {
    match store.load(slot.key()) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "slot unreadable, using default");
            None
        }
    }
}

impl State {
    /// Load every slot. The second value is true when the habits slot was
    /// absent and `seed_habits` were used.
    pub fn load(store: &dyn SlotStore, seed_habits: &[String]) -> (Self, bool) {
        Self::decode_all(|slot| read(store, slot), seed_habits)
    }

    /// Like [`State::load`], but a store that cannot be read is an error
    /// rather than a silent fallback to defaults.
    pub fn reload(store: &dyn SlotStore, seed_habits: &[String]) -> Result<(Self, bool), PersistenceError> {
        let mut raw = HashMap::new();
        for slot in Slot::ALL {
            if let Some(value) = store.load(slot.key())? {
                raw.insert(slot, value);
            }
        }
        Ok(Self::decode_all(|slot| raw.get(&slot).cloned(), seed_habits))
    }

    fn decode_all(get: impl Fn(Slot) -> Option<String>, seed_habits: &[String]) -> (Self, bool) {
        let raw_habits = get(Slot::Habits);
        let seeded = raw_habits.is_none();
        let habits = match raw_habits {
            Some(raw) => slots::decode_json(Slot::Habits, Some(&raw)),
            None => HabitSet::seeded(seed_habits),
        };

        let state = Self {
            entries: slots::decode_json(Slot::Entries, get(Slot::Entries).as_deref()),
            habits,
            vision: slots::decode_text(get(Slot::Vision).as_deref(), ""),
            goals: slots::decode_json(Slot::MiniGoals, get(Slot::MiniGoals).as_deref()),
            plans: slots::decode_json(Slot::IfThenPlans, get(Slot::IfThenPlans).as_deref()),
            woop: slots::decode_json(Slot::Woop, get(Slot::Woop).as_deref()),
            points: slots::decode_u64(Slot::Points, get(Slot::Points).as_deref()),
            last_reset_day: slots::decode_day(Slot::LastResetDay, get(Slot::LastResetDay).as_deref()),
            theme: slots::decode_text(get(Slot::ActiveTheme).as_deref(), DEFAULT_THEME.color),
            audio_shield: slots::decode_bool(
                Slot::AudioShieldEnabled,
                get(Slot::AudioShieldEnabled).as_deref(),
            ),
            reminders: slots::decode_bool(Slot::RemindersEnabled, get(Slot::RemindersEnabled).as_deref()),
            analytics: slots::decode_json(Slot::Analytics, get(Slot::Analytics).as_deref()),
            habit_history: slots::decode_json(Slot::HabitHistory, get(Slot::HabitHistory).as_deref()),
            future_cost_notes: slots::decode_json(
                Slot::FutureCostNotes,
                get(Slot::FutureCostNotes).as_deref(),
            ),
        };
        (state, seeded)
    }

    /// Serialized form of one slot.
    pub fn encode(&self, slot: Slot) -> Result<String, PersistenceError> {
        Ok(match slot {
            Slot::Entries => slots::encode_json(slot, &self.entries)?,
            Slot::Habits => slots::encode_json(slot, &self.habits)?,
            Slot::Vision => self.vision.clone(),
            Slot::MiniGoals => slots::encode_json(slot, &self.goals)?,
            Slot::IfThenPlans => slots::encode_json(slot, &self.plans)?,
            Slot::Woop => slots::encode_json(slot, &self.woop)?,
            Slot::Points => self.points.to_string(),
            Slot::LastResetDay => self.last_reset_day.map(slots::encode_day).unwrap_or_default(),
            Slot::ActiveTheme => self.theme.clone(),
            Slot::AudioShieldEnabled => slots::encode_bool(self.audio_shield),
            Slot::RemindersEnabled => slots::encode_bool(self.reminders),
            Slot::Analytics => slots::encode_json(slot, &self.analytics)?,
            Slot::HabitHistory => slots::encode_json(slot, &self.habit_history)?,
            Slot::FutureCostNotes => slots::encode_json(slot, &self.future_cost_notes)?,
        })
    }
}
