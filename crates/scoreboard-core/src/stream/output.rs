use std::fs;
use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::error::Result;
use crate::export::format_scoreline;
use crate::score::{Counter, ScoreRecord};

/// Text file output for stream overlays.
///
/// Writes one file per counter plus a combined score line, so OBS-style
/// text sources can pick them up. A no-op when disabled.
pub struct StreamOutput {
    enabled: bool,
    base_dir: PathBuf,
}

impl StreamOutput {
    pub fn new<P: AsRef<Path>>(enabled: bool, base_dir: P) -> Self {
        Self {
            enabled,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Write all counter files and the combined score line.
    pub fn write_record(&self, record: &ScoreRecord) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        fs::create_dir_all(&self.base_dir)?;

        for counter in Counter::iter() {
            let filename = format!("{}.txt", counter.key());
            self.write_file(&filename, &record.get(counter).to_string())?;
        }
        self.write_file("scoreline.txt", &format_scoreline(record))
    }

    /// Blank all overlay files.
    pub fn clear_files(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        for counter in Counter::iter() {
            self.write_file(&format!("{}.txt", counter.key()), "")?;
        }
        self.write_file("scoreline.txt", "")
    }

    fn write_file(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.base_dir.join(filename);
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_record() {
        let temp_dir = TempDir::new().unwrap();
        let output = StreamOutput::new(true, temp_dir.path());

        output.write_record(&ScoreRecord::new(5, 2, 1)).unwrap();

        let wins = fs::read_to_string(temp_dir.path().join("wins.txt")).unwrap();
        assert_eq!(wins, "5");
        let scoreline = fs::read_to_string(temp_dir.path().join("scoreline.txt")).unwrap();
        assert_eq!(scoreline, "W 5 / L 2 / D 1");
    }

    #[test]
    fn test_disabled_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let output = StreamOutput::new(false, temp_dir.path().join("never"));

        output.write_record(&ScoreRecord::new(1, 1, 1)).unwrap();
        assert!(!temp_dir.path().join("never").exists());
    }

    #[test]
    fn test_clear_files() {
        let temp_dir = TempDir::new().unwrap();
        let output = StreamOutput::new(true, temp_dir.path());

        output.write_record(&ScoreRecord::new(5, 2, 1)).unwrap();
        output.clear_files().unwrap();

        let wins = fs::read_to_string(temp_dir.path().join("wins.txt")).unwrap();
        assert!(wins.is_empty());
    }
}
