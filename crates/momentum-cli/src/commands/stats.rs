use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Totals, average, peak day and streaks
    Summary,
    /// Current streak in days
    Streak,
    /// Entry count per day
    Map,
    /// Last 7 days, oldest first
    Velocity,
    /// Last 30 days with intensity tiers
    Heatmap,
}

pub fn run(action: StatsAction) -> CliResult {
    let engine = open_engine()?;

    match action {
        StatsAction::Summary => print_json(&engine.summary())?,
        StatsAction::Streak => print_json(&serde_json::json!({
            "streak": engine.streak(),
            "bestStreak": engine.best_streak(),
        }))?,
        StatsAction::Map => print_json(&engine.activity_map())?,
        StatsAction::Velocity => print_json(&engine.velocity_series())?,
        StatsAction::Heatmap => print_json(&engine.heatmap())?,
    }
    Ok(())
}
