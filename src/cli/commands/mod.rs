//! Each subcommand lives in its own file — keeps the match arm in main thin
//! and lets each handler own its argument validation and error reporting.

mod colorize;
mod demo;
mod log;

pub use colorize::cmd_colorize;
pub use demo::cmd_demo;
pub use log::cmd_log;
