use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carousel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A swipeable panel carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/carousel/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the carousel (default)
    Run,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List built-in themes
    Themes,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command {
        Some(Commands::Run) | None => {
            let config = Arc::new(AppConfig::load_from(&config_path)?);
            init_file_logging(&config)?;
            commands::run::run(config)
        }
        Some(Commands::Config { action }) => {
            init_stderr_logging("warn");
            match action {
                ConfigAction::Path => commands::config::path(&config_path),
                ConfigAction::Init { force } => commands::config::init(&config_path, force),
                ConfigAction::Show => {
                    let config = AppConfig::load_from(&config_path)?;
                    commands::config::show(&config)
                }
            }
        }
        Some(Commands::Themes) => {
            init_stderr_logging("warn");
            let config = AppConfig::load_from(&config_path)?;
            commands::themes::run(&config)
        }
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// The UI owns the terminal, so the TUI logs to a file in the data directory
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(&config.general.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
