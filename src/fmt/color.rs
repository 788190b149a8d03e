//! The console palette is the basic 16-color SGR set — every terminal renders it,
//! and it keeps level colors recognizable without a theme layer.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Strips every SGR escape so colored output can be compared against raw lines.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid ANSI regex"));

/// A dedicated type keeps raw escape strings out of rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    /// Dim gray for timestamps and locations.
    Gray,
    /// Accent for the uid section.
    BrightCyan,
    /// Accent for the reference section.
    BrightYellow,
    /// Unknown levels render with no color at all.
    Reset,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Terminals need the raw `\x1b[<n>m` escape — callers shouldn't hand-build it.
    #[must_use]
    pub const fn fg_ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::Gray => "\x1b[90m",
            Self::BrightCyan => "\x1b[96m",
            Self::BrightYellow => "\x1b[93m",
            Self::Reset => Self::RESET,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fg_ansi())
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}

/// Removes all SGR spans, leaving only the printable content.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ANSI_REGEX.replace_all(text, "").into_owned()
}
