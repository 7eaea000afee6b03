use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum VisionAction {
    /// Print the vision statement
    Show,
    /// Replace the vision statement (empty clears it)
    Set {
        text: String,
    },
}

pub fn run(action: VisionAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        VisionAction::Show => {}
        VisionAction::Set { text } => engine.set_vision(&text)?,
    }
    print_json(&serde_json::json!({ "vision": engine.vision() }))
}
