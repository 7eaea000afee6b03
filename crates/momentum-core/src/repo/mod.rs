//! In-memory entity repositories.
//!
//! Repositories hold state and enforce per-entity rules. They never touch
//! storage; the engine persists a repository's slot after each mutation.

mod activity;
mod goals;
mod habits;
mod notes;
mod plans;

pub use activity::{ActivityEntry, ActivityLog};
pub use goals::{GoalSet, MiniGoal};
pub use habits::{Habit, HabitHistory, HabitSet, ToggleOutcome};
pub use notes::FutureCostNotes;
pub use plans::{IfThenPlan, IfThenPreset, PlanSet, WoopPlan, IF_THEN_PRESETS};
