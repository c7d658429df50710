mod console;
mod format;

pub use console::*;
pub use format::*;
