use chrono::NaiveDate;
use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Write today's future-cost note (replaces any earlier one)
    Set {
        text: String,
    },
    /// Show the note for a day (default: today)
    Show {
        #[arg(long)]
        day: Option<NaiveDate>,
    },
    /// All notes by day
    List,
}

pub fn run(action: NoteAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        NoteAction::Set { text } => {
            engine.set_future_cost_note(&text)?;
            let today = engine.today();
            print_json(&serde_json::json!({ "day": today, "note": engine.future_cost_note(today) }))?;
        }
        NoteAction::Show { day } => {
            let day = day.unwrap_or_else(|| engine.today());
            print_json(&serde_json::json!({ "day": day, "note": engine.future_cost_note(day) }))?;
        }
        NoteAction::List => print_json(engine.future_cost_notes())?,
    }
    Ok(())
}
