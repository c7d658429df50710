pub mod adjust;
pub mod board;
pub mod export;
pub mod reset;
pub mod show;
