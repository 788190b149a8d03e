//! Everything that turns a log call into text: call-site capture, the raw line
//! layout, and the console colors layered on top of it.

mod callsite;
mod color;
pub mod colorize;
mod line;

pub use callsite::{CallSite, UNKNOWN_SOURCE};
pub use color::{Color, colorize as paint, strip_ansi};
pub use colorize::{GUTTER, colorize, render, render_plain};
pub use line::{DELIMITER, LogLine, TIMESTAMP_FORMAT, Tags};
