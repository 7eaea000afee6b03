use chrono::NaiveDate;
use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with today's completion state
    List,
    /// Mark a habit done (or undo it)
    Toggle {
        /// Habit ID
        id: String,
    },
    /// Add a habit
    Add {
        /// Habit label
        label: String,
    },
    /// Rename a habit
    Rename {
        /// Habit ID
        id: String,
        /// New label
        label: String,
    },
    /// Show completion history
    History {
        /// Only this day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<NaiveDate>,
    },
}

pub fn run(action: HabitAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        HabitAction::List => print_json(engine.habits())?,
        HabitAction::Toggle { id } => match engine.toggle_habit(&id)? {
            Some(outcome) => print_json(&serde_json::json!({
                "id": id,
                "label": outcome.label,
                "completed": outcome.completed,
            }))?,
            None => print_json(&serde_json::json!({ "id": id, "found": false }))?,
        },
        HabitAction::Add { label } => {
            let habit = engine.add_habit(&label)?;
            print_json(&habit)?;
        }
        HabitAction::Rename { id, label } => {
            let renamed = engine.rename_habit(&id, &label)?;
            print_json(&serde_json::json!({ "id": id, "renamed": renamed }))?;
        }
        HabitAction::History { day } => match day {
            Some(day) => print_json(engine.habit_history().on(day))?,
            None => print_json(engine.habit_history())?,
        },
    }
    Ok(())
}
