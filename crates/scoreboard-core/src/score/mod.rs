mod counter;
mod record;

pub use counter::Counter;
pub use record::ScoreRecord;
