//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

use crate::score::{Counter, ScoreRecord};

/// Format the score record for console display.
///
/// Returns a multi-line string with a boxed format. If `previous` is
/// provided, changed counters carry a signed diff marker.
pub fn format_record_console(record: &ScoreRecord, previous: Option<&ScoreRecord>) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(34);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {}  ({} games)",
        "SCOREBOARD".bold(),
        record.total()
    );
    let _ = writeln!(output, "{}", border_dim);

    for counter in Counter::iter() {
        let value = record.get(counter);
        let label = format_colored_label(counter);

        let value_str = match previous.map(|prev| i64::from(value) - i64::from(prev.get(counter))) {
            Some(diff) if diff > 0 => format!("{} ({})", value, format!("+{}", diff).green()),
            Some(diff) if diff < 0 => format!("{} ({})", value, diff.red()),
            _ => value.to_string(),
        };

        let _ = writeln!(output, "  {} : {}", label, value_str);
    }

    let _ = write!(output, "{}", border_dim);

    output
}

/// Format a counter label with its board color
///
/// Labels are padded before coloring so ANSI codes do not break alignment.
fn format_colored_label(counter: Counter) -> String {
    let label = format!("{:<6}", counter.label());
    match counter {
        Counter::Wins => label.green().to_string(),
        Counter::Losses => label.red().to_string(),
        Counter::Draws => label.yellow().to_string(),
    }
}
