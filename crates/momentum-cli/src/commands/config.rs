use clap::Subcommand;
use momentum_core::Config;

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the whole configuration
    Show,
    /// Get a value by dot-separated key, e.g. points.per_activity
    Get {
        key: String,
    },
    /// Set a value by dot-separated key
    Set {
        key: String,
        value: String,
    },
}

pub fn run(action: ConfigAction) -> CliResult {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => print_json(&config)?,
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => print_json(&serde_json::json!({ "key": key, "value": value }))?,
            None => return Err(format!("unknown config key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            print_json(&serde_json::json!({ "key": key, "value": config.get(&key) }))?;
        }
    }
    Ok(())
}

