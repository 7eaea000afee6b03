//! Fixed-window day series: the 7-day velocity chart and the 30-day heatmap.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ActivityIndex;

pub const VELOCITY_DAYS: u32 = 7;
pub const HEATMAP_DAYS: u32 = 30;

/// Visual intensity tier for a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    None,
    Low,
    Medium,
    High,
}

impl HeatLevel {
    /// 0 none, 1-2 low, 3-5 medium, 6+ high.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => HeatLevel::None,
            1..=2 => HeatLevel::Low,
            3..=5 => HeatLevel::Medium,
            _ => HeatLevel::High,
        }
    }
}

/// One bar of the velocity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatCell {
    pub day: NaiveDate,
    pub count: u32,
    pub level: HeatLevel,
}

/// The `len` days ending at `today`, oldest first.
fn window(today: NaiveDate, len: u32) -> impl Iterator<Item = NaiveDate> {
    (0..len).rev().map(move |back| today - Duration::days(i64::from(back)))
}

pub fn velocity_series(index: &ActivityIndex, today: NaiveDate) -> Vec<DayCount> {
    window(today, VELOCITY_DAYS)
        .map(|day| DayCount {
            day,
            label: day.format("%a").to_string(),
            count: index.count_on(day),
        })
        .collect()
}

pub fn heatmap(index: &ActivityIndex, today: NaiveDate) -> Vec<HeatCell> {
    window(today, HEATMAP_DAYS)
        .map(|day| {
            let count = index.count_on(day);
            HeatCell {
                day,
                count,
                level: HeatLevel::from_count(count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        // a Wednesday
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(HeatLevel::from_count(0), HeatLevel::None);
        assert_eq!(HeatLevel::from_count(2), HeatLevel::Low);
        assert_eq!(HeatLevel::from_count(5), HeatLevel::Medium);
        assert_eq!(HeatLevel::from_count(6), HeatLevel::High);
        assert_eq!(HeatLevel::from_count(7), HeatLevel::High);
    }

    #[test]
    fn velocity_is_oldest_first_with_weekday_labels() {
        let index = ActivityIndex::from_counts([(today(), 2), (today() - Duration::days(6), 1)]);
        let series = velocity_series(&index, today());
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].day, today() - Duration::days(6));
        assert_eq!(series[0].label, "Thu");
        assert_eq!(series[0].count, 1);
        assert_eq!(series[6].label, "Wed");
        assert_eq!(series[6].count, 2);
        assert!(series[1..6].iter().all(|d| d.count == 0));
    }

    #[test]
    fn heatmap_ignores_days_outside_window() {
        let index = ActivityIndex::from_counts([
            (today() - Duration::days(30), 9),
            (today() - Duration::days(29), 3),
        ]);
        let cells = heatmap(&index, today());
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0].day, today() - Duration::days(29));
        assert_eq!(cells[0].level, HeatLevel::Medium);
        assert_eq!(cells.iter().map(|c| c.count).sum::<u32>(), 3);
    }

    proptest! {
        #[test]
        fn tiers_are_monotonic(a in 0u32..50, b in 0u32..50) {
            if a <= b {
                prop_assert!(HeatLevel::from_count(a) <= HeatLevel::from_count(b));
            }
        }
    }
}
