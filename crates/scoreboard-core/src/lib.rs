pub mod config;
pub mod error;
pub mod export;
pub mod score;
pub mod storage;
pub mod stream;

pub use config::Config;
pub use error::{Error, Result};
pub use score::{Counter, ScoreRecord};
pub use storage::{ScoreStore, SessionManager};
pub use stream::StreamOutput;
