//! The Momentum engine: one owner for every repository.
//!
//! Each mutation changes in-memory state first and then writes the affected
//! slots in full. If a write fails, the in-memory state stays authoritative
//! and the caller gets `CoreError::Persistence`.
//!
//! Derived metrics and unlock evaluation are recomputed on every call.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::clock::Clock;
use crate::error::{CoreError, PersistenceError, Result, ValidationError};
use crate::metrics::{self, ActivityIndex, ActivitySummary, DayCount, HeatCell, PeakDay};
use crate::progression::{self, Analytics, BadgeStatus, Stats, Theme, ThemeStatus};
use crate::repo::{
    ActivityEntry, FutureCostNotes, Habit, HabitHistory, IfThenPlan, IfThenPreset, MiniGoal, ToggleOutcome,
    WoopPlan,
};
use crate::snapshot::{ImportPatch, ImportSummary, Snapshot};
use crate::state::State;
use crate::storage::{Config, Slot, SlotStore};

pub struct MomentumEngine {
    store: Box<dyn SlotStore>,
    clock: Arc<dyn Clock>,
    config: Config,
    state: State,
}

impl MomentumEngine {
    /// Load every slot (or its default), seed habits on first run, then run
    /// the daily rollover once.
    ///
    /// Startup never fails. Write failures during seeding or rollover are
    /// logged and the in-memory state is used as is.
    pub fn open(store: Box<dyn SlotStore>, clock: Arc<dyn Clock>, config: Config) -> Self {
        let (state, seeded) = State::load(store.as_ref(), &config.seed.habits);
        let mut engine = Self {
            store,
            clock,
            config,
            state,
        };

        if seeded {
            tracing::info!(count = engine.state.habits.list().len(), "seeded default habits");
            if let Err(e) = engine.persist(&[Slot::Habits]) {
                tracing::warn!(error = %e, "could not persist seeded habits");
            }
        }
        if let Err(e) = engine.rollover() {
            tracing::warn!(error = %e, "startup rollover could not be persisted");
        }
        engine
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the in-memory state with what the store holds now.
    ///
    /// Long-lived engines call this before acting so they never write back
    /// state that other processes on the same store have since changed. On a
    /// read failure the current state is kept.
    pub fn reload(&mut self) -> Result<(), PersistenceError> {
        let (state, seeded) = State::reload(self.store.as_ref(), &self.config.seed.habits)?;
        self.state = state;
        if seeded {
            self.persist(&[Slot::Habits])?;
        }
        Ok(())
    }

    /// Current calendar day according to the engine's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Write each slot in full. Every slot is attempted; the first failure
    /// is returned.
    fn persist(&self, slots: &[Slot]) -> Result<(), PersistenceError> {
        let mut first_error = None;
        for &slot in slots {
            let outcome = self
                .state
                .encode(slot)
                .and_then(|value| self.store.save(slot.key(), &value));
            match outcome {
                Ok(()) => tracing::debug!(slot = %slot, "slot written"),
                Err(e) => {
                    tracing::warn!(slot = %slot, error = %e, "slot write failed, keeping in-memory state");
                    first_error.get_or_insert(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // ── Activity log ─────────────────────────────────────────────────

    /// Log an action now and award activity points.
    pub fn log_activity(&mut self, text: &str) -> Result<ActivityEntry> {
        let now = self.clock.now_ms();
        let entry = self.state.entries.append(text, now)?.clone();
        self.state.points += self.config.points.per_activity;
        self.persist(&[Slot::Entries, Slot::Points])?;
        Ok(entry)
    }

    /// Remove an entry. Unknown ids are a no-op returning `false`.
    pub fn remove_activity(&mut self, id: &str) -> Result<bool> {
        if !self.state.entries.remove(id) {
            return Ok(false);
        }
        self.persist(&[Slot::Entries])?;
        Ok(true)
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        self.state.entries.list_all()
    }

    /// Record a finished focus session as an activity entry.
    ///
    /// `minutes` defaults to `timer.focus_minutes` from the config.
    pub fn complete_timer_session(&mut self, minutes: Option<u32>) -> Result<ActivityEntry> {
        let minutes = minutes.unwrap_or(self.config.timer.focus_minutes);
        if minutes == 0 {
            return Err(ValidationError::NotPositive { field: "minutes" }.into());
        }
        let now = self.clock.now_ms();
        let text = format!("Completed a {minutes}-minute focus session");
        let entry = self.state.entries.append(&text, now)?.clone();
        self.state.analytics.timer_sessions += 1;
        self.state.points += self.config.points.per_timer_session;
        self.persist(&[Slot::Entries, Slot::Analytics, Slot::Points])?;
        Ok(entry)
    }

    // ── Habits ───────────────────────────────────────────────────────

    /// Flip a habit. Completing it counts toward analytics every time, but
    /// only the first completion of the day lands in history and earns
    /// points. Un-completing never rolls anything back.
    ///
    /// Returns `None` for an unknown id.
    pub fn toggle_habit(&mut self, id: &str) -> Result<Option<ToggleOutcome>> {
        // Flags from a previous day must not leak into today's toggle.
        if let Err(e) = self.rollover() {
            tracing::warn!(error = %e, "rollover before toggle could not be persisted");
        }

        let Some(outcome) = self.state.habits.toggle(id) else {
            return Ok(None);
        };
        if !outcome.completed {
            self.persist(&[Slot::Habits])?;
            return Ok(Some(outcome));
        }

        self.state.analytics.habits_completed += 1;
        let today = self.today();
        if self.state.habit_history.record(today, &outcome.label) {
            self.state.points += self.config.points.per_habit;
        }
        self.persist(&[Slot::Habits, Slot::Analytics, Slot::HabitHistory, Slot::Points])?;
        Ok(Some(outcome))
    }

    pub fn add_habit(&mut self, label: &str) -> Result<Habit> {
        let habit = self.state.habits.add(label)?.clone();
        self.persist(&[Slot::Habits])?;
        Ok(habit)
    }

    /// Rename a habit. Past history keeps the label it was completed under.
    pub fn rename_habit(&mut self, id: &str, label: &str) -> Result<bool> {
        if !self.state.habits.rename(id, label)? {
            return Ok(false);
        }
        self.persist(&[Slot::Habits])?;
        Ok(true)
    }

    pub fn habits(&self) -> &[Habit] {
        self.state.habits.list()
    }

    pub fn habit_history(&self) -> &HabitHistory {
        &self.state.habit_history
    }

    /// Reset per-day habit flags if today has not been reset yet.
    ///
    /// Idempotent within a day. Any number of skipped days collapses into a
    /// single reset. Returns whether a reset happened.
    pub fn rollover(&mut self) -> Result<bool> {
        let today = self.today();
        if self.state.last_reset_day == Some(today) {
            return Ok(false);
        }

        let previous = self.state.last_reset_day;
        let cleared = self.state.habits.reset_completion();
        self.state.last_reset_day = Some(today);
        tracing::info!(%today, ?previous, cleared, "daily rollover");
        self.persist(&[Slot::Habits, Slot::LastResetDay])?;
        Ok(true)
    }

    pub fn last_reset_day(&self) -> Option<NaiveDate> {
        self.state.last_reset_day
    }

    // ── Vision, goals, plans, notes ──────────────────────────────────

    /// Replace the vision statement. An empty string clears it.
    pub fn set_vision(&mut self, text: &str) -> Result<()> {
        self.state.vision = text.trim().to_string();
        self.persist(&[Slot::Vision])?;
        Ok(())
    }

    pub fn vision(&self) -> &str {
        &self.state.vision
    }

    pub fn add_goal(&mut self, text: &str, deadline: &str) -> Result<MiniGoal> {
        let goal = self.state.goals.add(text, deadline)?.clone();
        self.state.analytics.goals_created += 1;
        self.persist(&[Slot::MiniGoals, Slot::Analytics])?;
        Ok(goal)
    }

    /// Returns the new completion state, or `None` for an unknown id.
    pub fn toggle_goal(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(completed) = self.state.goals.toggle(id) else {
            return Ok(None);
        };
        self.persist(&[Slot::MiniGoals])?;
        Ok(Some(completed))
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<bool> {
        if !self.state.goals.remove(id) {
            return Ok(false);
        }
        self.persist(&[Slot::MiniGoals])?;
        Ok(true)
    }

    pub fn goals(&self) -> &[MiniGoal] {
        self.state.goals.list()
    }

    pub fn add_if_then(&mut self, trigger: &str, action: &str) -> Result<IfThenPlan> {
        let plan = self.state.plans.add(trigger, action)?.clone();
        self.state.analytics.if_then_created += 1;
        self.persist(&[Slot::IfThenPlans, Slot::Analytics])?;
        Ok(plan)
    }

    /// Instantiate a preset as a new plan.
    ///
    /// # Errors
    /// `CoreError::NotFound` if no preset has this id.
    pub fn add_if_then_preset(&mut self, preset_id: &str) -> Result<IfThenPlan> {
        let preset = IfThenPreset::find(preset_id).ok_or_else(|| CoreError::NotFound {
            kind: "if-then preset",
            id: preset_id.to_string(),
        })?;
        self.add_if_then(preset.trigger, preset.action)
    }

    pub fn remove_if_then(&mut self, id: &str) -> Result<bool> {
        if !self.state.plans.remove(id) {
            return Ok(false);
        }
        self.persist(&[Slot::IfThenPlans])?;
        Ok(true)
    }

    pub fn if_then_plans(&self) -> &[IfThenPlan] {
        self.state.plans.list()
    }

    /// Overwrite the WOOP plan.
    pub fn save_woop(&mut self, woop: WoopPlan) -> Result<()> {
        self.state.woop = woop;
        self.persist(&[Slot::Woop])?;
        Ok(())
    }

    pub fn woop(&self) -> &WoopPlan {
        &self.state.woop
    }

    /// Write today's future-cost note, replacing any earlier one.
    pub fn set_future_cost_note(&mut self, text: &str) -> Result<()> {
        let today = self.today();
        self.state.future_cost_notes.set(today, text)?;
        self.persist(&[Slot::FutureCostNotes])?;
        Ok(())
    }

    pub fn future_cost_note(&self, day: NaiveDate) -> Option<&str> {
        self.state.future_cost_notes.get(day)
    }

    pub fn future_cost_notes(&self) -> &FutureCostNotes {
        &self.state.future_cost_notes
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn set_audio_shield(&mut self, enabled: bool) -> Result<()> {
        self.state.audio_shield = enabled;
        self.persist(&[Slot::AudioShieldEnabled])?;
        Ok(())
    }

    pub fn audio_shield_enabled(&self) -> bool {
        self.state.audio_shield
    }

    pub fn set_reminders(&mut self, enabled: bool) -> Result<()> {
        self.state.reminders = enabled;
        self.persist(&[Slot::RemindersEnabled])?;
        Ok(())
    }

    pub fn reminders_enabled(&self) -> bool {
        self.state.reminders
    }

    // ── Points and progression ───────────────────────────────────────

    pub fn points(&self) -> u64 {
        self.state.points
    }

    pub fn analytics(&self) -> Analytics {
        self.state.analytics
    }

    pub fn stats(&self) -> Stats {
        let index = self.activity_index();
        Stats {
            points: self.state.points,
            streak: metrics::streak(&index, self.today()),
            best_streak: metrics::best_streak(&index),
            analytics: self.state.analytics,
        }
    }

    pub fn badges(&self) -> Vec<BadgeStatus> {
        progression::evaluate_badges(&self.stats())
    }

    pub fn themes(&self) -> Vec<ThemeStatus> {
        progression::evaluate_themes(self.state.points, &self.state.theme)
    }

    /// Active theme, falling back to the free theme if the stored color is
    /// not in the catalog.
    pub fn active_theme(&self) -> &'static Theme {
        Theme::find(&self.state.theme).unwrap_or(&progression::THEMES[0])
    }

    /// Switch theme by name or color. Unknown or still-locked themes leave
    /// the selection unchanged and return `false`.
    pub fn select_theme(&mut self, key: &str) -> Result<bool> {
        let Some(theme) = Theme::find(key) else {
            return Ok(false);
        };
        if !theme.is_unlocked(self.state.points) {
            return Ok(false);
        }
        self.state.theme = theme.color.to_string();
        self.persist(&[Slot::ActiveTheme])?;
        Ok(true)
    }

    // ── Derived metrics ──────────────────────────────────────────────

    pub fn activity_index(&self) -> ActivityIndex {
        ActivityIndex::build(self.state.entries.list_all(), self.clock.as_ref())
    }

    pub fn streak(&self) -> u32 {
        metrics::streak(&self.activity_index(), self.today())
    }

    pub fn best_streak(&self) -> u32 {
        metrics::best_streak(&self.activity_index())
    }

    pub fn activity_map(&self) -> BTreeMap<NaiveDate, u32> {
        self.activity_index().map().clone()
    }

    pub fn velocity_series(&self) -> Vec<DayCount> {
        metrics::velocity_series(&self.activity_index(), self.today())
    }

    pub fn heatmap(&self) -> Vec<HeatCell> {
        metrics::heatmap(&self.activity_index(), self.today())
    }

    pub fn average_per_active_day(&self) -> f64 {
        self.activity_index().average_per_active_day()
    }

    pub fn peak_day(&self) -> Option<PeakDay> {
        self.activity_index().peak_day()
    }

    pub fn summary(&self) -> ActivitySummary {
        ActivitySummary::compute(&self.activity_index(), self.today())
    }

    // ── Snapshot ─────────────────────────────────────────────────────

    pub fn export(&self) -> Snapshot {
        let exported_at = DateTime::<Utc>::from_timestamp_millis(self.clock.now_ms()).unwrap_or_default();
        Snapshot::capture(&self.state, exported_at)
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }

    /// Partial-merge import. The document is fully decoded first; on any
    /// `FormatError` nothing changes.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary> {
        let patch = ImportPatch::parse(text)?;
        let (slots, summary) = patch.apply(&mut self.state);
        tracing::info!(applied = ?summary.applied, "import applied");
        self.persist(&slots)?;
        Ok(summary)
    }

    /// Clear every repository and setting to its empty default.
    pub fn reset_all(&mut self) -> Result<()> {
        self.state = State::default();
        tracing::info!("all repositories cleared");
        self.persist(&Slot::ALL)?;
        Ok(())
    }
}
