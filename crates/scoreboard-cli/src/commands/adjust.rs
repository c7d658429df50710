use anyhow::Result;
use scoreboard_core::export::format_scoreline;
use scoreboard_core::{Counter, ScoreStore};

/// Adjust one counter by `delta` and save
pub fn run(store: &ScoreStore, counter: &str, delta: i64) -> Result<()> {
    let counter = Counter::from_key(counter)?;

    let record = store.load()?;
    let updated = record.adjust(counter, delta);
    store.save(&updated)?;

    println!("{} {:+}  ->  {}", counter.label(), delta, format_scoreline(&updated));

    Ok(())
}
