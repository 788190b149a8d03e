//! Assembles a `Logger` from a config and, for tests, a replacement clock.

use super::{Logger, State};
use crate::config::Config;
use crate::fmt::Tags;
use crate::rotation::{Clock, Rotation, SystemClock};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Stepwise construction so a clock can be swapped in without widening `Logger::new`.
#[derive(Default)]
pub struct LoggerBuilder {
    config: Config,
    clock: Option<Box<dyn Clock>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Rotation is driven by the calendar date — tests need to move it on demand.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Never fails. If the first file can't be opened the error goes to stderr and
    /// every later call reports the missing file instead of writing.
    #[must_use]
    pub fn build(self) -> Logger {
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let rotation = Rotation::start(
            self.config.resolve_directory(),
            self.config.rotate_daily,
            &clock.now(),
        );
        assemble(self.config, clock, rotation)
    }

    /// For callers that would rather stop than run without a log file.
    ///
    /// # Errors
    /// `Error::Open` if the directory or first file can't be created.
    pub fn try_build(self) -> Result<Logger, crate::Error> {
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let rotation = Rotation::try_start(
            self.config.resolve_directory(),
            self.config.rotate_daily,
            &clock.now(),
        )?;
        Ok(assemble(self.config, clock, rotation))
    }
}

fn assemble(config: Config, clock: Box<dyn Clock>, rotation: Rotation) -> Logger {
    if config.print_to_console
        && let Some(path) = rotation.path()
    {
        let _ = writeln!(io::stdout().lock(), "Log initialized: {}", absolute(path));
    }

    Logger {
        config,
        clock,
        state: Mutex::new(State {
            rotation,
            tags: Tags::new(),
        }),
    }
}

fn absolute(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
