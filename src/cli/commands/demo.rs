//! Shows how shared tags carry across call sites: the uid and reference set in
//! `cmd_demo` still appear on lines written from `caller` until they're changed.

use crate::logger::Logger;
use crate::{debug, details, error, info, statement};
use std::process::ExitCode;

#[must_use]
pub fn cmd_demo(logger: &Logger) -> ExitCode {
    logger.set_uid("Hello");
    statement!(logger, "Main(+)");
    error!(logger, "Occurred");

    logger.set_reference("demo is logging");
    info!(logger, "Program", "Started...");
    details!(logger, "Program", "Ended");
    statement!(logger, "Main(-)");

    caller(logger);

    let worker = logger.with_uid("worker-1").with_reference(42);
    info!(worker, "child handles keep their own tags");

    ExitCode::SUCCESS
}

fn caller(logger: &Logger) {
    error!(logger, "error in caller method");
    debug!(logger, "Debugging..");

    logger.set_reference("caller is logging");
    logger.set_uid("Hello World");
    logger.remove_reference();
    error!(logger, "reference removed, uid kept");
    debug!(logger, "Debugging again..");
}
