use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a mini-goal
    Add {
        /// Goal text
        text: String,
        /// Free-form deadline, e.g. "Friday"
        #[arg(long, default_value = "")]
        deadline: String,
    },
    /// List mini-goals
    List,
    /// Flip completion
    Toggle {
        /// Goal ID
        id: String,
    },
    /// Delete a mini-goal
    Remove {
        /// Goal ID
        id: String,
    },
}

pub fn run(action: GoalAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        GoalAction::Add { text, deadline } => {
            let goal = engine.add_goal(&text, &deadline)?;
            print_json(&goal)?;
        }
        GoalAction::List => print_json(engine.goals())?,
        GoalAction::Toggle { id } => match engine.toggle_goal(&id)? {
            Some(completed) => print_json(&serde_json::json!({ "id": id, "completed": completed }))?,
            None => print_json(&serde_json::json!({ "id": id, "found": false }))?,
        },
        GoalAction::Remove { id } => {
            let removed = engine.remove_goal(&id)?;
            print_json(&serde_json::json!({ "id": id, "removed": removed }))?;
        }
    }
    Ok(())
}
