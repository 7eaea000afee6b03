use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Record a finished focus session
    Complete {
        /// Session length in minutes (default: timer.focus_minutes)
        #[arg(long)]
        minutes: Option<u32>,
    },
}

pub fn run(action: TimerAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        TimerAction::Complete { minutes } => {
            let entry = engine.complete_timer_session(minutes)?;
            print_json(&serde_json::json!({
                "entry": entry,
                "points": engine.points(),
                "timerSessions": engine.analytics().timer_sessions,
            }))?;
        }
    }
    Ok(())
}
