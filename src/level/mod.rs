//! The five severities a call site can log at.

use crate::fmt::Color;
use std::fmt;
use std::str::FromStr;

/// Not ordered: the logger writes every level, there is no threshold to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Failures the host program should look at.
    Error,
    /// Normal operational milestones.
    #[default]
    Info,
    /// Diagnostics for whoever is chasing a bug.
    Debug,
    /// Entry/exit markers such as `main(+)` / `main(-)`.
    Statement,
    /// Supporting detail attached to a preceding statement.
    Details,
}

impl Level {
    /// Upper-case because the raw line embeds exactly this token in `[ LEVEL ]`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Statement => "STATEMENT",
            Self::Details => "DETAILS",
        }
    }

    /// Console color for the level tag, the `| ` gutter, and the message.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Info => Color::Blue,
            Self::Debug => Color::Cyan,
            Self::Statement => Color::Magenta,
            Self::Details => Color::Green,
        }
    }

    /// Convenience for iteration — used by the CLI and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Error,
            Self::Info,
            Self::Debug,
            Self::Statement,
            Self::Details,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "statement" | "stmt" => Ok(Self::Statement),
            "details" | "detail" => Ok(Self::Details),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
