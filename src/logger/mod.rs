//! The logger handle every call site writes through.
//!
//! One `Mutex` guards the active file and the shared tags, and the whole
//! rotate → encode → write → flush → echo step runs under it, so lines from
//! concurrent threads never interleave and never see a half-applied tag change.
//! Failures are reported on stderr and swallowed; logging never interrupts the host.

mod builder;
pub mod global;
mod tagged;

pub use builder::LoggerBuilder;
pub use tagged::TaggedLogger;

use crate::config::Config;
use crate::fmt::{self, CallSite, LogLine, Tags};
use crate::internal;
use crate::level::Level;
use crate::rotation::{Clock, Rotation};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct State {
    rotation: Rotation,
    /// Default tags for lines logged directly on the handle.
    tags: Tags,
}

/// A logger writing to one rotating file, optionally echoing to stdout.
///
/// Log through the macros so the location names the calling function:
///
/// ```no_run
/// # let logger = microlog::Logger::new(microlog::Config::new());
/// microlog::error!(logger, "disk", "full");
/// // 14:03:27:004211 @@ [ ERROR ] @@ /src/main.rs:2 >> main() @@ disk full
/// ```
///
/// The level methods (`logger.error(&["disk", "full"])`) write the same line
/// minus `>> main()`, since `#[track_caller]` can't see the function name.
pub struct Logger {
    config: Config,
    clock: Box<dyn Clock>,
    state: Mutex<State>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Opens the first log file right away; see `LoggerBuilder::build` for failure handling.
    #[must_use]
    pub fn new(config: Config) -> Self {
        LoggerBuilder::new().config(config).build()
    }

    /// Tests and diagnostics need to see which options are active.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the file currently being written, `None` if it couldn't be opened or was closed.
    #[must_use]
    pub fn file_name(&self) -> Option<PathBuf> {
        self.lock().rotation.path().map(PathBuf::from)
    }

    #[track_caller]
    pub fn error(&self, parts: &[&str]) {
        self.log(Level::Error, parts);
    }

    #[track_caller]
    pub fn info(&self, parts: &[&str]) {
        self.log(Level::Info, parts);
    }

    #[track_caller]
    pub fn debug(&self, parts: &[&str]) {
        self.log(Level::Debug, parts);
    }

    #[track_caller]
    pub fn statement(&self, parts: &[&str]) {
        self.log(Level::Statement, parts);
    }

    #[track_caller]
    pub fn details(&self, parts: &[&str]) {
        self.log(Level::Details, parts);
    }

    /// Fragments are joined with single spaces into the message body.
    #[track_caller]
    pub fn log(&self, level: Level, parts: &[&str]) {
        self.log_at(level, CallSite::caller(), &parts.join(" "));
    }

    /// Entry point for the logging macros, which capture a richer call site.
    pub fn log_at(&self, level: Level, site: CallSite, message: &str) {
        self.write(level, &site, message, None);
    }

    /// Tags every later line logged on this handle, from any thread, until changed.
    pub fn set_uid(&self, uid: impl Into<String>) {
        self.lock().tags.uid = Some(uid.into());
    }

    pub fn clear_uid(&self) {
        self.lock().tags.uid = None;
    }

    /// Stored in its rendered form; the value itself is not kept.
    pub fn set_reference(&self, reference: impl std::fmt::Display) {
        self.lock().tags.reference = Some(reference.to_string());
    }

    /// Drops the reference section from later lines; the uid stays.
    pub fn remove_reference(&self) {
        self.lock().tags.reference = None;
    }

    /// Snapshot of the shared default tags.
    #[must_use]
    pub fn tags(&self) -> Tags {
        self.lock().tags.clone()
    }

    /// A child handle with its own tags, starting empty. Its tags never touch
    /// this logger's shared ones.
    #[must_use]
    pub const fn tagged(&self) -> TaggedLogger<'_> {
        TaggedLogger::new(self, Tags::new())
    }

    #[must_use]
    pub fn with_uid(&self, uid: impl Into<String>) -> TaggedLogger<'_> {
        self.tagged().with_uid(uid)
    }

    #[must_use]
    pub fn with_tags(&self, tags: Tags) -> TaggedLogger<'_> {
        TaggedLogger::new(self, tags)
    }

    /// Flushes and closes the active file. Later log calls report on stderr and write nothing.
    pub fn close(&self) {
        if let Err(e) = self.lock().rotation.close() {
            internal::error("LOG", &format!("Shutdown flush failed: {e}"));
        }
    }

    /// A panic while holding the lock must not disable logging for everyone else.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self, level: Level, site: &CallSite, message: &str, tags: Option<&Tags>) {
        let mut state = self.lock();
        let now = self.clock.now();
        let State {
            rotation,
            tags: shared,
        } = &mut *state;

        let file = match rotation.current(&now) {
            Ok(file) => file,
            Err(e) => {
                internal::error("LOG", &format!("Dropped {level} line: {e}"));
                return;
            }
        };

        let line = LogLine::new(&now, level, tags.unwrap_or(&*shared), site, message);
        let raw = line.to_string();

        if let Err(e) = file.write_line(&raw) {
            internal::error("LOG", &format!("Logging failed: {e}"));
            return;
        }

        if self.config.print_to_console {
            let rendered = if self.config.color_enabled {
                fmt::render(&line)
            } else {
                fmt::render_plain(&raw)
            };
            let _ = writeln!(io::stdout().lock(), "{rendered}");
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = state.rotation.close() {
            internal::error("LOG", &format!("Shutdown flush failed: {e}"));
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("file", &self.file_name())
            .finish_non_exhaustive()
    }
}
