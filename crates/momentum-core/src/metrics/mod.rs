//! Derived metrics over the activity log.
//!
//! Nothing here is cached. Every query rebuilds an [`ActivityIndex`] from the
//! entries, so results can never go stale relative to the log.

mod heatmap;
mod streak;

pub use heatmap::{heatmap, velocity_series, DayCount, HeatCell, HeatLevel, HEATMAP_DAYS, VELOCITY_DAYS};
pub use streak::{best_streak, streak};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::repo::ActivityEntry;

/// Day to entry count, iterated chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityIndex {
    days: BTreeMap<NaiveDate, u32>,
    total: usize,
}

impl ActivityIndex {
    pub fn build(entries: &[ActivityEntry], clock: &dyn Clock) -> Self {
        let mut days = BTreeMap::new();
        for entry in entries {
            *days.entry(clock.day_of(entry.timestamp)).or_insert(0) += 1;
        }
        Self {
            days,
            total: entries.len(),
        }
    }

    pub fn from_counts(counts: impl IntoIterator<Item = (NaiveDate, u32)>) -> Self {
        let days: BTreeMap<_, _> = counts.into_iter().filter(|(_, c)| *c > 0).collect();
        let total = days.values().map(|c| *c as usize).sum();
        Self { days, total }
    }

    pub fn count_on(&self, day: NaiveDate) -> u32 {
        self.days.get(&day).copied().unwrap_or(0)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains_key(&day)
    }

    /// The activity map: day to count.
    pub fn map(&self) -> &BTreeMap<NaiveDate, u32> {
        &self.days
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn active_days(&self) -> usize {
        self.days.len()
    }

    /// Entries per active day, 0.0 for an empty log.
    pub fn average_per_active_day(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.total as f64 / self.days.len() as f64
    }

    /// Busiest day. Ties go to the earliest day.
    pub fn peak_day(&self) -> Option<PeakDay> {
        let mut peak: Option<PeakDay> = None;
        for (&day, &count) in &self.days {
            if peak.as_ref().map_or(true, |p| count > p.count) {
                peak = Some(PeakDay { day, count });
            }
        }
        peak
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakDay {
    pub day: NaiveDate,
    pub count: u32,
}

/// Everything the overview screen reads in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub total_entries: usize,
    pub active_days: usize,
    pub average_per_active_day: f64,
    pub peak_day: Option<PeakDay>,
    pub streak: u32,
    pub best_streak: u32,
    pub today_count: u32,
}

impl ActivitySummary {
    pub fn compute(index: &ActivityIndex, today: NaiveDate) -> Self {
        Self {
            total_entries: index.total(),
            active_days: index.active_days(),
            average_per_active_day: index.average_per_active_day(),
            peak_day: index.peak_day(),
            streak: streak(index, today),
            best_streak: best_streak(index),
            today_count: index.count_on(today),
        }
    }
}
