use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Points and the stats that drive unlocks
    Points,
    /// Every badge with its unlock state
    Badges,
    /// Every theme with its unlock state
    Themes,
    /// Switch to an unlocked theme by name or color
    Select {
        theme: String,
    },
}

pub fn run(action: ProgressAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        ProgressAction::Points => print_json(&engine.stats())?,
        ProgressAction::Badges => print_json(&engine.badges())?,
        ProgressAction::Themes => print_json(&engine.themes())?,
        ProgressAction::Select { theme } => {
            let selected = engine.select_theme(&theme)?;
            print_json(&serde_json::json!({
                "requested": theme,
                "selected": selected,
                "active": engine.active_theme(),
            }))?;
        }
    }
    Ok(())
}
