use anyhow::Result;
use scoreboard_core::ScoreStore;
use scoreboard_core::export::{format_json, format_record_console};

/// Print the current score record
pub fn run(store: &ScoreStore, json: bool) -> Result<()> {
    let record = store.load()?;

    if json {
        println!("{}", format_json(&record)?);
    } else {
        println!("{}", format_record_console(&record, None));
    }

    Ok(())
}
