use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum LogAction {
    /// Log an activity now
    Add {
        /// What you did
        text: String,
    },
    /// List entries, most recent first
    List {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete an entry
    Remove {
        /// Entry ID
        id: String,
    },
}

pub fn run(action: LogAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        LogAction::Add { text } => {
            let entry = engine.log_activity(&text)?;
            print_json(&entry)?;
        }
        LogAction::List { limit } => {
            let entries = engine.entries();
            let shown = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];
            print_json(shown)?;
        }
        LogAction::Remove { id } => {
            let removed = engine.remove_activity(&id)?;
            print_json(&serde_json::json!({ "id": id, "removed": removed }))?;
        }
    }
    Ok(())
}
