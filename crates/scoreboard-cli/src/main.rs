mod cli;
mod commands;
mod shutdown;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use scoreboard_core::{Config, ScoreStore};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (default to warn when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scoreboard_cli=warn,scoreboard_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = load_config(&args.config);
    let store = match &args.file {
        Some(path) => ScoreStore::new(path),
        None => ScoreStore::new(&config.save_file),
    };

    match args.command {
        Some(Command::Show { json }) => commands::show::run(&store, json),
        Some(Command::Add { counter, count }) => {
            commands::adjust::run(&store, &counter, i64::from(count))
        }
        Some(Command::Sub { counter, count }) => {
            commands::adjust::run(&store, &counter, -i64::from(count))
        }
        Some(Command::Reset { yes }) => commands::reset::run(&store, yes),
        Some(Command::Export { output, format }) => {
            commands::export::run(&store, output.as_deref(), format)
        }
        None => commands::board::run(&store, &config),
    }
}

fn load_config(path: &str) -> Config {
    match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            if !e.is_not_found() {
                warn!("Failed to load config from {}: {}, using defaults", path, e);
            }
            Config::default()
        }
    }
}
