use std::time::Duration;

use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum RolloverAction {
    /// Run the daily reset check once
    Run,
    /// Keep checking until Ctrl-C
    Watch {
        /// Seconds between checks (default: rollover.check_interval_secs)
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

pub fn run(action: RolloverAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        RolloverAction::Run => {
            let reset = engine.rollover()?;
            print_json(&serde_json::json!({
                "reset": reset,
                "lastResetDay": engine.last_reset_day(),
            }))?;
        }
        RolloverAction::Watch { interval_secs } => {
            let period = match interval_secs {
                Some(secs) => Duration::from_secs(secs.clamp(1, 60)),
                None => engine.config().rollover.interval(),
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            tracing::info!(period_secs = period.as_secs(), "watching for day rollover");
            let resets = runtime.block_on(momentum_core::rollover::watch(&mut engine, period, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %e, "could not listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            }));
            print_json(&serde_json::json!({ "resets": resets }))?;
        }
    }
    Ok(())
}
