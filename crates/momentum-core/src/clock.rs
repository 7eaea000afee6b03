//! Wall-clock abstraction.
//!
//! The engine never reads the system time directly. Calendar days are
//! derived through the same clock so tests can pin both "now" and the
//! time zone.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn now_ms(&self) -> i64;

    /// Calendar day containing the given instant.
    fn day_of(&self, epoch_ms: i64) -> NaiveDate;

    fn today(&self) -> NaiveDate {
        self.day_of(self.now_ms())
    }
}

/// System clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn day_of(&self, epoch_ms: i64) -> NaiveDate {
        match Local.timestamp_millis_opt(epoch_ms).earliest() {
            Some(dt) => dt.date_naive(),
            None => utc_day(epoch_ms),
        }
    }
}

/// Settable clock in UTC, for tests and replay.
#[derive(Debug)]
pub struct FixedClock {
    now_ms: AtomicI64,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now_ms: AtomicI64::new(now.timestamp_millis()),
        }
    }

    /// Noon UTC on the given day.
    pub fn on_day(day: NaiveDate) -> Self {
        let noon = day.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc();
        Self::at(noon)
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now_ms.store(now.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.now_ms.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    fn day_of(&self, epoch_ms: i64) -> NaiveDate {
        utc_day(epoch_ms)
    }
}

fn utc_day(epoch_ms: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .unwrap_or_default()
        .date_naive()
}
