use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "momentum", version, about = "Momentum CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Activity log
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Focus timer sessions
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Daily habits
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Mini-goals
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// If-then plans
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// WOOP plan
    Woop {
        #[command(subcommand)]
        action: commands::woop::WoopAction,
    },
    /// Vision statement
    Vision {
        #[command(subcommand)]
        action: commands::vision::VisionAction,
    },
    /// Future-cost notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Activity statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Points, badges and themes
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Audio shield and reminder toggles
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Export, import and reset
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Daily habit reset
    Rollover {
        #[command(subcommand)]
        action: commands::rollover::RolloverAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Woop { action } => commands::woop::run(action),
        Commands::Vision { action } => commands::vision::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Rollover { action } => commands::rollover::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "momentum", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
