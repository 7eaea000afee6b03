use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum WoopAction {
    /// Show the WOOP plan
    Show,
    /// Overwrite the WOOP plan; omitted fields keep their current text
    Set {
        #[arg(long)]
        wish: Option<String>,
        #[arg(long)]
        outcome: Option<String>,
        #[arg(long)]
        obstacle: Option<String>,
        #[arg(long)]
        plan: Option<String>,
    },
}

pub fn run(action: WoopAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        WoopAction::Show => print_json(engine.woop())?,
        WoopAction::Set {
            wish,
            outcome,
            obstacle,
            plan,
        } => {
            let mut woop = engine.woop().clone();
            if let Some(v) = wish {
                woop.wish = v;
            }
            if let Some(v) = outcome {
                woop.outcome = v;
            }
            if let Some(v) = obstacle {
                woop.obstacle = v;
            }
            if let Some(v) = plan {
                woop.plan = v;
            }
            engine.save_woop(woop)?;
            print_json(engine.woop())?;
        }
    }
    Ok(())
}
