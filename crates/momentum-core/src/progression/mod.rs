//! Progression: badges and cosmetic themes unlocked by cumulative stats.
//!
//! Evaluation is stateless. Nothing is stored as "earned"; every query
//! re-checks the catalogs against a [`Stats`] snapshot.

mod badges;
mod themes;

pub use badges::{evaluate_badges, Badge, BadgeRule, BadgeStatus, BADGES};
pub use themes::{evaluate_themes, Theme, ThemeStatus, DEFAULT_THEME, THEMES};

use serde::{Deserialize, Serialize};

/// Action counters. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    pub timer_sessions: u64,
    pub habits_completed: u64,
    pub goals_created: u64,
    pub if_then_created: u64,
}

impl Analytics {
    pub fn is_empty(&self) -> bool {
        *self == Analytics::default()
    }
}

/// Inputs to every unlock predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub points: u64,
    pub streak: u32,
    pub best_streak: u32,
    pub analytics: Analytics,
}
