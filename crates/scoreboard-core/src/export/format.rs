use chrono::Utc;
use serde_json::json;

use crate::error::Result;
use crate::score::ScoreRecord;

pub fn format_tsv_header() -> String {
    ["wins", "losses", "draws", "date"].join("\t")
}

/// Export the record as TSV (header plus one row).
pub fn format_tsv(record: &ScoreRecord) -> String {
    format!(
        "{}\n{}\t{}\t{}\t{}",
        format_tsv_header(),
        record.wins,
        record.losses,
        record.draws,
        Utc::now().to_rfc3339()
    )
}

/// Export the record as pretty-printed JSON.
pub fn format_json(record: &ScoreRecord) -> Result<String> {
    let entry = json!({
        "wins": record.wins,
        "losses": record.losses,
        "draws": record.draws,
        "date": Utc::now().to_rfc3339(),
    });

    Ok(serde_json::to_string_pretty(&entry)?)
}

/// One-line summary, "W 5 / L 2 / D 1".
pub fn format_scoreline(record: &ScoreRecord) -> String {
    format!(
        "W {} / L {} / D {}",
        record.wins, record.losses, record.draws
    )
}
