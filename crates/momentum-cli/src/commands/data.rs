use std::path::PathBuf;

use clap::Subcommand;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum DataAction {
    /// Write a full snapshot as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Merge a snapshot file into current state
    Import {
        /// Snapshot file
        path: PathBuf,
    },
    /// Delete all data
    Reset {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        DataAction::Export { output } => {
            let document = engine.export_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    print_json(&serde_json::json!({ "exported": path }))?;
                }
                None => println!("{document}"),
            }
        }
        DataAction::Import { path } => {
            let document = std::fs::read_to_string(&path)?;
            let summary = engine.import_json(&document)?;
            print_json(&summary)?;
        }
        DataAction::Reset { yes } => {
            if !yes {
                return Err("refusing to reset without --yes".into());
            }
            engine.reset_all()?;
            print_json(&serde_json::json!({ "reset": true }))?;
        }
    }
    Ok(())
}
