use clap::{ArgAction, Subcommand};

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show toggles
    Show,
    /// Enable or disable the ambient audio shield
    AudioShield {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Enable or disable reminders
    Reminders {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

pub fn run(action: SettingsAction) -> CliResult {
    let mut engine = open_engine()?;

    match action {
        SettingsAction::Show => {}
        SettingsAction::AudioShield { enabled } => engine.set_audio_shield(enabled)?,
        SettingsAction::Reminders { enabled } => engine.set_reminders(enabled)?,
    }
    print_json(&serde_json::json!({
        "audioShieldEnabled": engine.audio_shield_enabled(),
        "remindersEnabled": engine.reminders_enabled(),
        "theme": engine.active_theme().color,
    }))
}
