use clap::Subcommand;
use momentum_core::repo::IF_THEN_PRESETS;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Create an if-then plan
    Add {
        /// The "if" part
        trigger: String,
        /// The "then" part
        action: String,
    },
    /// List if-then plans
    List,
    /// Delete an if-then plan
    Remove {
        /// Plan ID
        id: String,
    },
    /// Show built-in presets
    Presets,
    /// Create a plan from a preset
    Use {
        /// Preset ID (see `plan presets`)
        preset: String,
    },
}

pub fn run(action: PlanAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        PlanAction::Add { trigger, action } => {
            let plan = engine.add_if_then(&trigger, &action)?;
            print_json(&plan)?;
        }
        PlanAction::List => print_json(engine.if_then_plans())?,
        PlanAction::Remove { id } => {
            let removed = engine.remove_if_then(&id)?;
            print_json(&serde_json::json!({ "id": id, "removed": removed }))?;
        }
        PlanAction::Presets => print_json(IF_THEN_PRESETS)?,
        PlanAction::Use { preset } => {
            let plan = engine.add_if_then_preset(&preset)?;
            print_json(&plan)?;
        }
    }
    Ok(())
}
