//! Unified error type for all microlog operations.
//!
//! None of these ever reach a caller of the level methods — the logger reports
//! them to stderr and keeps going. They surface only from constructors and
//! config loading, where the caller asked for a `Result`.

use std::path::PathBuf;

/// Error type for microlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// The log directory or file could not be created or opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Opening a log file failed earlier, so there is nothing to write to.
    NoLogFile(String),
    /// The logger was closed explicitly.
    Closed,
    /// A raw line did not follow the `@@` layout.
    MalformedLine(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Open { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::NoLogFile(reason) => write!(f, "no log file available ({reason})"),
            Self::Closed => write!(f, "logger is closed"),
            Self::MalformedLine(line) => write!(f, "malformed log line: {line}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Open { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
