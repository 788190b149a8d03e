//! Logger options, either built in code with fluent setters or loaded from TOML.
//!
//! Nothing is validated here — a directory that can't be created is reported when
//! the logger tries to open its file, not when the config is assembled.

use crate::internal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger — `#[serde(default)]`
/// fills every missing field from `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Echo every line to stdout in addition to the file.
    pub print_to_console: bool,
    /// Start a new file when the calendar date changes.
    pub rotate_daily: bool,
    /// Where log files are created; `~` is expanded.
    pub log_directory: String,
    /// Colorize console lines (files are always plain).
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            print_to_console: true,
            rotate_daily: true,
            log_directory: "log".to_string(),
            color_enabled: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn print_to_console(mut self, enabled: bool) -> Self {
        self.print_to_console = enabled;
        self
    }

    #[must_use]
    pub const fn rotate_daily(mut self, enabled: bool) -> Self {
        self.rotate_daily = enabled;
        self
    }

    #[must_use]
    pub fn log_directory(mut self, dir: impl Into<String>) -> Self {
        self.log_directory = dir.into();
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn color_enabled(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Directory with a leading `~` expanded to the user's home.
    #[must_use]
    pub fn resolve_directory(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_directory).as_ref())
    }

    /// Reads the user's config from the default location, falling back to defaults
    /// when no file exists.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).inspect_err(|e| {
            internal::warn("CONFIG", &format!("Cannot read {}: {e}", path.display()));
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// XDG-compliant path, `~/.config/microlog/microlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("microlog").join("microlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
