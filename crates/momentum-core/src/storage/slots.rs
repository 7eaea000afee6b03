//! Named persistence slots and their text encodings.
//!
//! Decoding never fails: an absent slot yields its default and a corrupt one
//! logs a warning and yields its default too.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PersistenceError;

/// One durable slot per repository or scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Entries,
    Habits,
    Vision,
    MiniGoals,
    IfThenPlans,
    Woop,
    Points,
    LastResetDay,
    ActiveTheme,
    AudioShieldEnabled,
    RemindersEnabled,
    Analytics,
    HabitHistory,
    FutureCostNotes,
}

impl Slot {
    pub const ALL: [Slot; 14] = [
        Slot::Entries,
        Slot::Habits,
        Slot::Vision,
        Slot::MiniGoals,
        Slot::IfThenPlans,
        Slot::Woop,
        Slot::Points,
        Slot::LastResetDay,
        Slot::ActiveTheme,
        Slot::AudioShieldEnabled,
        Slot::RemindersEnabled,
        Slot::Analytics,
        Slot::HabitHistory,
        Slot::FutureCostNotes,
    ];

    /// Stable storage key.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Entries => "momentum_entries",
            Slot::Habits => "momentum_habits",
            Slot::Vision => "momentum_vision",
            Slot::MiniGoals => "momentum_mini_goals",
            Slot::IfThenPlans => "momentum_if_then",
            Slot::Woop => "momentum_woop",
            Slot::Points => "momentum_points",
            Slot::LastResetDay => "momentum_last_reset",
            Slot::ActiveTheme => "momentum_theme",
            Slot::AudioShieldEnabled => "momentum_audio_shield",
            Slot::RemindersEnabled => "momentum_reminders",
            Slot::Analytics => "momentum_analytics",
            Slot::HabitHistory => "momentum_habit_history",
            Slot::FutureCostNotes => "momentum_future_cost",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn encode_json<T: Serialize>(slot: Slot, value: &T) -> Result<String, PersistenceError> {
    serde_json::to_string(value).map_err(|e| PersistenceError::Encode {
        slot: slot.key().to_string(),
        message: e.to_string(),
    })
}

pub fn encode_bool(value: bool) -> String {
    value.to_string()
}

pub fn encode_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn decode_json<T: DeserializeOwned + Default>(slot: Slot, raw: Option<&str>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "corrupt slot, falling back to default");
            T::default()
        }
    }
}

/// Plain text slots are stored verbatim.
pub fn decode_text(raw: Option<&str>, default: &str) -> String {
    raw.map(str::to_string).unwrap_or_else(|| default.to_string())
}

pub fn decode_bool(slot: Slot, raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None => false,
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            tracing::warn!(slot = %slot, value = other, "corrupt boolean slot, using false");
            false
        }
    }
}

pub fn decode_u64(slot: Slot, raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(slot = %slot, value = raw, "corrupt integer slot, using 0");
            0
        }
    }
}

pub fn decode_day(slot: Slot, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT) {
        Ok(day) => Some(day),
        Err(_) => {
            tracing::warn!(slot = %slot, value = raw, "corrupt day marker, treating as never reset");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keys_are_unique() {
        let mut keys: Vec<_> = Slot::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Slot::ALL.len());
    }

    #[test]
    fn corrupt_integer_falls_back_to_zero() {
        assert_eq!(decode_u64(Slot::Points, Some("12")), 12);
        assert_eq!(decode_u64(Slot::Points, Some("NaN")), 0);
        assert_eq!(decode_u64(Slot::Points, Some("-4")), 0);
        assert_eq!(decode_u64(Slot::Points, None), 0);
    }

    #[test]
    fn corrupt_bool_falls_back_to_false() {
        assert!(decode_bool(Slot::RemindersEnabled, Some("true")));
        assert!(!decode_bool(Slot::RemindersEnabled, Some("yes please")));
        assert!(!decode_bool(Slot::RemindersEnabled, None));
    }

    #[test]
    fn corrupt_json_falls_back_to_default() {
        let v: Vec<String> = decode_json(Slot::Entries, Some("{not json"));
        assert!(v.is_empty());
        let v: Vec<String> = decode_json(Slot::Entries, Some(r#"["a","b"]"#));
        assert_eq!(v, vec!["a", "b"]);
    }

    #[test]
    fn day_marker_parses_iso_dates_only() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(decode_day(Slot::LastResetDay, Some(&encode_day(day))), Some(day));
        assert_eq!(decode_day(Slot::LastResetDay, Some("Mon Mar 09 2026")), None);
    }
}
