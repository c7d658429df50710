//! CLI argument definitions for scoreboard.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Win/loss/draw score tracker", version)]
pub struct Args {
    /// Path to the config file
    #[arg(long, value_name = "FILE", default_value = "scoreboard.cfg")]
    pub config: String,

    /// Score file (overrides the configured savefile)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the current score record
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Increment a counter (wins, losses or draws)
    Add {
        /// Counter to adjust
        counter: String,
        /// Amount to add
        #[arg(default_value = "1")]
        count: u32,
    },
    /// Decrement a counter, clamped at zero
    Sub {
        /// Counter to adjust
        counter: String,
        /// Amount to subtract
        #[arg(default_value = "1")]
        count: u32,
    },
    /// Reset all counters to zero
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Export the score record
    Export {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
}

#[derive(Clone, clap::ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}
