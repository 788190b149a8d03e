//! Every shell script needs a way to emit a single log line without writing Rust.

use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

/// Logs `message` through a child handle so the tags stay on this one line.
#[must_use]
pub fn cmd_log(
    logger: &Logger,
    level: Level,
    uid: Option<&str>,
    reference: Option<&str>,
    message: &[String],
) -> ExitCode {
    let mut tagged = logger.tagged();
    if let Some(uid) = uid {
        tagged.set_uid(uid);
    }
    if let Some(reference) = reference {
        tagged.set_reference(reference);
    }

    crate::log!(tagged, level, message.join(" "));
    ExitCode::SUCCESS
}
