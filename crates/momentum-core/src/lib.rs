//! # Momentum Core Library
//!
//! This library provides the state engine behind the Momentum personal
//! productivity tracker. Every operation is available through the
//! standalone CLI binary; any GUI is a thin layer over the same engine.
//!
//! ## Architecture
//!
//! - **Storage**: SQLite key-value slots, one per repository, plus TOML
//!   configuration
//! - **Repositories**: activity log, habits, goals, if-then and WOOP plans,
//!   future-cost notes
//! - **Metrics**: streaks, activity map, velocity, heatmap; recomputed on
//!   every read
//! - **Progression**: badge and theme unlocks evaluated against live stats
//! - **Rollover**: idempotent once-per-day reset of habit completion
//! - **Snapshot**: JSON export and partial-merge import
//!
//! ## Key Components
//!
//! - [`MomentumEngine`]: owns all repositories and persists each mutation
//! - [`Database`]: slot persistence
//! - [`Config`]: application configuration management
//! - [`Clock`]: time source used for every timestamp and calendar day

pub mod clock;
pub mod engine;
pub mod error;
pub mod id;
pub mod metrics;
pub mod progression;
pub mod repo;
pub mod rollover;
pub mod snapshot;
pub mod state;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::MomentumEngine;
pub use error::{ConfigError, CoreError, FormatError, PersistenceError, Result, ValidationError};
pub use metrics::{ActivityIndex, ActivitySummary, DayCount, HeatCell, HeatLevel, PeakDay};
pub use progression::{Analytics, Badge, BadgeRule, BadgeStatus, Stats, Theme, ThemeStatus};
pub use repo::{ActivityEntry, Habit, IfThenPlan, IfThenPreset, MiniGoal, WoopPlan};
pub use snapshot::{ImportSummary, Snapshot};
pub use storage::{Config, Database, Slot, SlotStore};
