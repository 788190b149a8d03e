//! Console-only rendering of a log line. Nothing here touches what goes to the file.

use super::color::{Color, colorize as paint};
use super::line::{DELIMITER, LogLine};

/// Leads every console line, colored or not.
pub const GUTTER: &str = "| ";

/// Each field in its own span — stripping the escapes yields `"| " + raw`.
#[must_use]
pub fn render(line: &LogLine) -> String {
    let level_color = line.known_level().map_or(Color::Reset, |level| level.color());

    let mut out = String::with_capacity(line.message.len() + 128);
    out.push_str(&paint(GUTTER, level_color));
    out.push_str(&paint(&line.timestamp, Color::Gray));
    out.push_str(DELIMITER);
    out.push_str(&paint(&format!("[ {} ]", line.level), level_color));
    out.push_str(DELIMITER);

    if let Some(uid) = &line.uid {
        out.push_str(&paint(&format!("( {uid} )"), Color::BrightCyan));
        out.push_str(DELIMITER);
    }
    if let Some(reference) = &line.reference {
        out.push_str(&paint(&format!("( {reference} )"), Color::BrightYellow));
        out.push_str(DELIMITER);
    }

    out.push_str(&paint(&line.location, Color::Gray));
    out.push_str(DELIMITER);
    out.push_str(&paint(&line.message, level_color));
    out
}

/// What the console gets when colors are off.
#[must_use]
pub fn render_plain(raw: &str) -> String {
    format!("{GUTTER}{raw}")
}

/// Re-parses an already-encoded raw line and renders it colored. Lines that don't
/// follow the layout come back untouched, so a viewer never chokes on foreign text.
#[must_use]
pub fn colorize(raw: &str) -> String {
    LogLine::parse(raw).map_or_else(|_| raw.to_string(), |line| render(&line))
}
