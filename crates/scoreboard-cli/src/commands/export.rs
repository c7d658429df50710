//! Export command for writing the score record to TSV or JSON.

use anyhow::Result;
use scoreboard_core::ScoreStore;
use scoreboard_core::export::{format_json, format_tsv};

use crate::cli::ExportFormat;

/// Export the score record
pub fn run(store: &ScoreStore, output: Option<&str>, format: ExportFormat) -> Result<()> {
    let record = store.load()?;

    let content = match format {
        ExportFormat::Tsv => format_tsv(&record),
        ExportFormat::Json => format_json(&record)?,
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!("Exported to: {}", output_path);
    } else {
        println!("{}", content);
    }

    Ok(())
}
