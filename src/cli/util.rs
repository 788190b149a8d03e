//! Utility functions for the CLI.

use super::Cli;
use crate::config::Config;
use crate::internal;

/// Loads the config file (explicit `--config` or the default location), then
/// applies command-line overrides on top.
#[must_use]
pub fn resolve_config(cli: &Cli) -> Config {
    let loaded = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);

    let mut config = loaded.unwrap_or_else(|e| {
        internal::warn("CLI", &format!("Error loading config, using defaults: {e}"));
        Config::default()
    });

    if let Some(dir) = &cli.dir {
        config = config.log_directory(dir);
    }
    if cli.no_console {
        config = config.print_to_console(false);
    }
    if cli.no_color {
        config = config.color_enabled(false);
    }
    if cli.no_rotate {
        config = config.rotate_daily(false);
    }
    config
}
