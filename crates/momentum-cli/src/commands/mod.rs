//! Subcommand implementations. Each prints JSON to stdout.

pub mod config;
pub mod data;
pub mod goal;
pub mod habit;
pub mod log;
pub mod note;
pub mod plan;
pub mod progress;
pub mod rollover;
pub mod settings;
pub mod stats;
pub mod timer;
pub mod vision;
pub mod woop;

use std::sync::Arc;

use momentum_core::{Config, Database, MomentumEngine, SystemClock};
use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the engine on the user's data directory.
pub fn open_engine() -> Result<MomentumEngine, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = Database::open()?;
    Ok(MomentumEngine::open(Box::new(store), Arc::new(SystemClock), config))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
