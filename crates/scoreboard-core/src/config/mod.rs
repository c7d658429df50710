//! Application configuration.
//!
//! Loaded from a small `key=value` text file with the same tolerant
//! parsing rules as the score file: blank lines and `#` comments are
//! ignored, unknown keys are logged and skipped, and a missing file is
//! simply the default configuration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::storage::DEFAULT_SAVE_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Score file path.
    pub save_file: PathBuf,
    /// Directory for session history files.
    pub session_dir: PathBuf,
    /// Save after every adjustment instead of on explicit save only.
    pub autosave: bool,
    /// Write stream overlay files.
    pub stream: bool,
    /// Directory for stream overlay files.
    pub stream_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_file: DEFAULT_SAVE_FILE.into(),
            session_dir: "sessions".into(),
            autosave: false,
            stream: false,
            stream_dir: "stream".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!("Skipping malformed config line: {:?}", line);
                continue;
            };
            let value = value.trim();

            match key.trim() {
                "savefile" => config.save_file = value.into(),
                "sessions" => config.session_dir = value.into(),
                "autosave" => config.autosave = parse_bool(value),
                "stream" => config.stream = parse_bool(value),
                "streamdir" => config.stream_dir = value.into(),
                other => debug!("Ignoring unknown config key: {:?}", other),
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.save_file, PathBuf::from("scores.txt"));
        assert!(!config.autosave);
        assert!(!config.stream);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = Config::load("no-such-scoreboard.cfg").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "savefile=club.txt\nsessions=history\nautosave=true\nstream=on\nstreamdir=obs\n",
        );

        assert_eq!(config.save_file, PathBuf::from("club.txt"));
        assert_eq!(config.session_dir, PathBuf::from("history"));
        assert!(config.autosave);
        assert!(config.stream);
        assert_eq!(config.stream_dir, PathBuf::from("obs"));
    }

    #[test]
    fn test_parse_tolerates_junk() {
        let config = Config::parse("# comment\n\ngarbage line\nunknown=1\nautosave=yes\n");
        assert!(config.autosave);
        assert_eq!(config.save_file, PathBuf::from("scores.txt"));
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(Config::parse("autosave=1").autosave);
        assert!(Config::parse("autosave=TRUE").autosave);
        assert!(!Config::parse("autosave=0").autosave);
        assert!(!Config::parse("autosave=banana").autosave);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "savefile=from-disk.txt").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.save_file, PathBuf::from("from-disk.txt"));
    }
}
