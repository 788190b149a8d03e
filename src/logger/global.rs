//! The process-wide logger.
//!
//! `OnceLock` guarantees exactly one `Logger` (and so exactly one log file) even
//! when several threads race to log first. The first configuration wins; later
//! `init` calls return the existing logger unchanged.

use super::Logger;
use crate::config::Config;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Creates the global logger from `config` unless one already exists.
///
/// No exit hook is registered: the global is never dropped, so call `shutdown`
/// before the process ends. Skipping it loses nothing written (every line is
/// flushed as it goes), only the final sync of the file to disk.
pub fn init(config: Config) -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(config))
}

/// The global logger, created with `Config::default()` if nobody called `init` first.
///
/// As with `init`, the file is only synced and closed by an explicit `shutdown`.
pub fn get() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(Config::default()))
}

/// The global logger if it has been created, without creating it.
#[must_use]
pub fn try_get() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Statics are never dropped, so the entry point calls this on the way out to
/// flush and close the global file. Failures are reported on stderr.
pub fn shutdown() {
    if let Some(logger) = GLOBAL.get() {
        logger.close();
    }
}
