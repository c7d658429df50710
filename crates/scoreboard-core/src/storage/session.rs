use chrono::{DateTime, Local};
use serde_json::{Value as JsonValue, json};
use std::fs::{self};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::score::{Counter, ScoreRecord};

const SESSION_TSV_HEADER: &str = "date\tcounter\tdelta\twins\tlosses\tdraws";

/// Per-run history of adjustments.
///
/// Each adjustment appends one TSV row (and one JSON entry when a JSON
/// session is open) carrying the running totals after the change.
pub struct SessionManager {
    base_dir: PathBuf,
    current_tsv_session: Option<PathBuf>,
    current_json_session: Option<PathBuf>,
    json_data: Vec<JsonValue>,
}

impl SessionManager {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            current_tsv_session: None,
            current_json_session: None,
            json_data: Vec::new(),
        }
    }

    /// Start a new session with TSV header written
    pub fn start_session(&mut self) -> Result<PathBuf> {
        let now: DateTime<Local> = Local::now();
        fs::create_dir_all(&self.base_dir)?;

        let tsv_file = self
            .base_dir
            .join(format!("Session_{}.tsv", now.format("%Y_%m_%d_%H_%M_%S")));
        fs::write(&tsv_file, format!("{}\n", SESSION_TSV_HEADER))?;

        self.current_tsv_session = Some(tsv_file.clone());

        Ok(tsv_file)
    }

    /// Start a JSON session file
    pub fn start_json_session(&mut self) -> Result<PathBuf> {
        let now: DateTime<Local> = Local::now();
        fs::create_dir_all(&self.base_dir)?;

        let json_file = self
            .base_dir
            .join(format!("Session_{}.json", now.format("%Y_%m_%d_%H_%M_%S")));

        // Initialize as empty array
        self.json_data = Vec::new();
        fs::write(&json_file, "[]")?;

        self.current_json_session = Some(json_file.clone());

        Ok(json_file)
    }

    /// Record one adjustment together with the totals it produced.
    pub fn append_adjustment(
        &mut self,
        counter: Counter,
        delta: i64,
        record: &ScoreRecord,
    ) -> Result<()> {
        self.append_tsv_row(counter, delta, record)?;
        self.append_json_entry(counter, delta, record)
    }

    fn append_tsv_row(&self, counter: Counter, delta: i64, record: &ScoreRecord) -> Result<()> {
        if let Some(ref path) = self.current_tsv_session {
            let row = format!(
                "{}\t{}\t{:+}\t{}\t{}\t{}",
                Local::now().to_rfc3339(),
                counter.key(),
                delta,
                record.wins,
                record.losses,
                record.draws
            );
            let mut file = fs::OpenOptions::new().append(true).open(path)?;
            writeln!(file, "{}", row)?;
        }
        Ok(())
    }

    fn append_json_entry(&mut self, counter: Counter, delta: i64, record: &ScoreRecord) -> Result<()> {
        if let Some(path) = &self.current_json_session {
            let entry = json!({
                "date": Local::now().to_rfc3339(),
                "counter": counter.key(),
                "delta": delta,
                "wins": record.wins,
                "losses": record.losses,
                "draws": record.draws,
            });
            self.json_data.push(entry);
            fs::write(path, serde_json::to_string_pretty(&self.json_data)?)?;
        }
        Ok(())
    }

    pub fn current_session_path(&self) -> Option<&Path> {
        self.current_tsv_session.as_deref()
    }

    pub fn current_json_session_path(&self) -> Option<&Path> {
        self.current_json_session.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_session_manager() -> (SessionManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let manager = SessionManager::new(temp_dir.path());
        (manager, temp_dir)
    }

    #[test]
    fn test_new_session_manager() {
        let (manager, _temp) = create_temp_session_manager();
        assert!(manager.current_session_path().is_none());
        assert!(manager.current_json_session_path().is_none());
    }

    #[test]
    fn test_start_session_writes_header() {
        let (mut manager, _temp) = create_temp_session_manager();
        let path = manager.start_session().unwrap();

        assert!(path.exists());
        assert!(path.extension().unwrap() == "tsv");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n", SESSION_TSV_HEADER));
    }

    #[test]
    fn test_start_json_session() {
        let (mut manager, _temp) = create_temp_session_manager();
        let path = manager.start_json_session().unwrap();

        assert!(path.exists());
        assert!(path.extension().unwrap() == "json");

        // Verify JSON structure is an empty array
        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(json.is_array());
        assert!(json.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_append_adjustment_carries_totals() {
        let (mut manager, _temp) = create_temp_session_manager();
        manager.start_session().unwrap();

        let record = ScoreRecord::new(5, 2, 1);
        manager
            .append_adjustment(Counter::Wins, 1, &record)
            .unwrap();
        manager
            .append_adjustment(Counter::Losses, -1, &record)
            .unwrap();

        let path = manager.current_session_path().unwrap();
        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SESSION_TSV_HEADER);
        assert!(lines[1].contains("wins\t+1\t5\t2\t1"));
        assert!(lines[2].contains("losses\t-1\t5\t2\t1"));
    }

    #[test]
    fn test_append_json_entries() {
        let (mut manager, _temp) = create_temp_session_manager();
        manager.start_json_session().unwrap();

        let record = ScoreRecord::new(1, 0, 0);
        manager
            .append_adjustment(Counter::Wins, 1, &record)
            .unwrap();

        let path = manager.current_json_session_path().unwrap();
        let content = fs::read_to_string(path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["counter"], "wins");
        assert_eq!(entries[0]["delta"], 1);
        assert_eq!(entries[0]["wins"], 1);
    }

    #[test]
    fn test_append_without_session_is_noop() {
        let (mut manager, _temp) = create_temp_session_manager();
        // Should not error even without active session
        let result = manager.append_adjustment(Counter::Draws, 1, &ScoreRecord::default());
        assert!(result.is_ok());
    }
}
