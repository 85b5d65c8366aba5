use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lifesync", version, about = "LifeSync productivity CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live clock with the long-form date
    Clock(commands::clock::ClockArgs),
    /// Countdown timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Stopwatch with laps
    Stopwatch {
        #[command(subcommand)]
        action: commands::stopwatch::StopwatchAction,
    },
    /// Completed session log
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Weekly statistics and streaks
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Quick notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Todo list
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: Option<commands::theme::ThemeAction>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Clock(args) => commands::clock::run(args),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stopwatch { action } => commands::stopwatch::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Theme { action } => commands::theme::run(action.unwrap_or_default()),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
