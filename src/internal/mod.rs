//! Microlog's own diagnostics. These go to stderr and never to the log file or
//! stdout, so a broken log directory can't hide the report about itself.

use crate::fmt::{Color, paint};
use std::io::{self, IsTerminal, Write};

fn emit(tag: &str, color: Color, scope: &str, msg: &str) {
    let mut stderr = io::stderr().lock();
    let tag = if stderr.is_terminal() {
        paint(tag, color)
    } else {
        tag.to_string()
    };
    // Nowhere left to report a failing stderr.
    let _ = writeln!(stderr, "microlog: {tag} [{scope}] {msg}");
}

/// Non-fatal anomalies, e.g. an unreadable config file.
pub fn warn(scope: &str, msg: &str) {
    emit("warn", Color::BrightYellow, scope, msg);
}

/// A log line was lost or the file could not be opened or closed.
pub fn error(scope: &str, msg: &str) {
    emit("error", Color::Red, scope, msg);
}
