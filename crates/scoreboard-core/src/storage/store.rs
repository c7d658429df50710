use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::score::{Counter, ScoreRecord};

pub const DEFAULT_SAVE_FILE: &str = "scores.txt";

/// Score file persistence.
///
/// The file is plain UTF-8 text, one `key=value` pair per line with keys
/// `wins`, `losses`, `draws`. Lines that do not parse are skipped; on
/// duplicate keys the last occurrence wins.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record from disk. A missing file is an empty record, not an
    /// error; any other IO failure propagates.
    pub fn load(&self) -> Result<ScoreRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Score file {:?} not found, starting from zero", self.path);
                return Ok(ScoreRecord::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(parse_record(&content))
    }

    /// Overwrite the score file with exactly three `key=value` lines, in
    /// wins/losses/draws order.
    pub fn save(&self, record: &ScoreRecord) -> Result<()> {
        let lines = [
            format!("wins={}", record.wins),
            format!("losses={}", record.losses),
            format!("draws={}", record.draws),
        ];
        fs::write(&self.path, format!("{}\n", lines.join("\n")))?;
        Ok(())
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

fn parse_record(content: &str) -> ScoreRecord {
    let mut record = ScoreRecord::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            if !line.trim().is_empty() {
                debug!("Skipping malformed score line: {:?}", line);
            }
            continue;
        };

        let Ok(counter) = Counter::from_key(key) else {
            debug!("Skipping unknown score key: {:?}", key);
            continue;
        };

        match value.trim().parse::<u32>() {
            Ok(v) => record.set(counter, v),
            Err(_) => debug!("Skipping malformed value for {}: {:?}", counter, value),
        }
    }

    record
}
