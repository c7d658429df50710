use std::io::{self, BufRead, Write};

use anyhow::Result;
use scoreboard_core::export::format_scoreline;
use scoreboard_core::{ScoreRecord, ScoreStore};

/// Reset all counters to zero and save
pub fn run(store: &ScoreStore, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset all counters to zero?")? {
        println!("Aborted.");
        return Ok(());
    }

    let record = ScoreRecord::default();
    store.save(&record)?;
    println!("{}", format_scoreline(&record));

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
