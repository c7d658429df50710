use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// One of the three tallies on the board.
///
/// The lowercase strum name doubles as the key in the score file and in
/// CLI arguments.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Counter {
    Wins,
    Losses,
    Draws,
}

impl Counter {
    /// Parse a file or CLI key (`wins`/`losses`/`draws`, case-insensitive).
    pub fn from_key(key: &str) -> Result<Self> {
        key.trim()
            .parse()
            .map_err(|_| Error::UnknownCounter(key.to_string()))
    }

    /// The stable lowercase key used in the score file.
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Uppercase heading label, as shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wins => "WINS",
            Self::Losses => "LOSSES",
            Self::Draws => "DRAWS",
        }
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
