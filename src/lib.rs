//! `microlog` - a process-wide logger that writes one plain-text line per call
//! to a daily-rotating file and optionally echoes a colorized copy to stdout.
//!
//! Every line follows one layout, which the console colorizer (and any other
//! reader) can parse back:
//!
//! ```text
//! 14:03:27:004211 @@ [ INFO ] @@ ( job-7 ) @@ /src/main.rs:12 >> main() @@ started
//! ```
//!
//! # Example
//!
//! ```no_run
//! use microlog::{Config, Logger, details, error, info};
//!
//! let logger = Logger::new(Config::new().log_directory("log").color_enabled(false));
//!
//! info!(logger, "Application", "started");
//! logger.set_uid("req-42");
//! error!(logger, "disk", "full");
//!
//! let worker = logger.with_uid("worker-1").with_reference(7);
//! details!(worker, "tagged", "privately");
//! ```
//!
//! The macros record `/file:line >> function()`. The level methods
//! (`logger.info(&["..."])`) work without macros but can only see
//! `/file:line`, so their lines omit the `>> function()` part.
//!
//! # Features
//!
//! - `cli` (default): Enables the `microlog` demo and log-viewer binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod rotation;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{CallSite, LogLine, Tags};
pub use level::Level;
pub use logger::global::{get, init, shutdown, try_get};
pub use logger::{Logger, LoggerBuilder, TaggedLogger};
pub use rotation::{Clock, SystemClock};
