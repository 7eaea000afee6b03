use chrono::{Duration, NaiveDate};

use super::ActivityIndex;

/// Consecutive active days ending today, or ending yesterday when today has
/// nothing logged yet. Two missed days in a row reset it to 0.
pub fn streak(index: &ActivityIndex, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    let mut cursor = if index.contains(today) {
        today
    } else if index.contains(yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut count = 0;
    while index.contains(cursor) {
        count += 1;
        cursor -= Duration::days(1);
    }
    count
}

/// Longest run of consecutive active days anywhere in the log.
pub fn best_streak(index: &ActivityIndex) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for &day in index.map().keys() {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn index_of(offsets: &[i64]) -> ActivityIndex {
        ActivityIndex::from_counts(offsets.iter().map(|&n| (days_ago(n), 1)))
    }

    #[test]
    fn empty_log_has_no_streak() {
        assert_eq!(streak(&ActivityIndex::default(), today()), 0);
    }

    #[test]
    fn five_consecutive_days_ending_today() {
        assert_eq!(streak(&index_of(&[0, 1, 2, 3, 4]), today()), 5);
    }

    #[test]
    fn gap_at_yesterday_limits_to_today() {
        assert_eq!(streak(&index_of(&[0, 3]), today()), 1);
    }

    #[test]
    fn yesterday_counts_as_grace_day() {
        assert_eq!(streak(&index_of(&[1, 2, 3]), today()), 3);
    }

    #[test]
    fn two_missed_days_reset() {
        assert_eq!(streak(&index_of(&[2, 3, 4]), today()), 0);
    }

    #[test]
    fn streak_walks_across_month_boundary() {
        // today() is March 1st; February 2026 has 28 days
        assert_eq!(streak(&index_of(&[0, 1, 2]), today()), 3);
        assert_eq!(days_ago(1), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn best_streak_finds_longest_run() {
        assert_eq!(best_streak(&ActivityIndex::default()), 0);
        assert_eq!(best_streak(&index_of(&[0, 5, 6, 7, 8, 20, 21])), 4);
    }

    #[test]
    fn best_streak_survives_lapse() {
        let index = index_of(&[10, 11, 12]);
        assert_eq!(streak(&index, today()), 0);
        assert_eq!(best_streak(&index), 3);
    }
}
