//! Periodic daily-rollover check.
//!
//! The engine itself has no background thread: [`MomentumEngine::rollover`]
//! is idempotent and cheap, and the caller decides when to run it. `watch`
//! drives it from a fixed interval on the current task so there is only ever
//! one actor mutating the engine.

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::engine::MomentumEngine;
use crate::error::Result;

/// Pick up writes from other processes, then roll over if the day changed.
fn check(engine: &mut MomentumEngine) -> Result<bool> {
    engine.reload()?;
    engine.rollover()
}

/// Run the rollover check every `period` until `shutdown` resolves.
///
/// Each check first reloads the engine from its store, so habits changed by
/// other processes survive the reset. The first check fires immediately.
/// Read and write failures are logged and the loop keeps going. Returns how
/// many resets happened.
pub async fn watch<F>(engine: &mut MomentumEngine, period: Duration, shutdown: F) -> u32
where
    F: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut resets = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => match check(engine) {
                Ok(true) => resets += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(error = %e, "rollover check failed"),
            },
        }
    }
    tracing::debug!(resets, "rollover watcher stopped");
    resets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::clock::{Clock, FixedClock};
    use crate::storage::{Config, Database};

    #[tokio::test(start_paused = true)]
    async fn watcher_catches_midnight() {
        let day = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let clock = Arc::new(FixedClock::on_day(day));
        let store = Box::new(Database::open_memory().unwrap());
        let mut engine = MomentumEngine::open(store, clock.clone(), Config::default());
        let id = engine.habits()[0].id.clone();
        engine.toggle_habit(&id).unwrap();

        let driver = clock.clone();
        let shutdown = async move {
            tokio::time::sleep(Duration::from_secs(90)).await;
            driver.advance(chrono::Duration::hours(12));
            tokio::time::sleep(Duration::from_secs(100)).await;
        };

        let resets = watch(&mut engine, Duration::from_secs(60), shutdown).await;
        assert_eq!(resets, 1);
        assert_eq!(engine.last_reset_day(), Some(clock.today()));
        assert!(engine.habits().iter().all(|h| !h.completed));
    }
}
