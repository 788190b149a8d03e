//! `microlog` binary: runs the tag demo, logs single lines from scripts, and
//! replays log files with console colors.
//!
//! Usage:
//!   microlog [demo]                          Run the tag-visibility demo
//!   microlog log <level> [--uid U] [--reference R] <msg>...
//!   microlog colorize [FILE]                 Colorize a log file (or stdin)
//!
//! Global flags: --config FILE, --dir DIR, --no-console, --no-color, --no-rotate

use clap::Parser;
use microlog::cli::{Cli, Command, cmd_colorize, cmd_demo, cmd_log, resolve_config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    // The logger is created lazily per command — colorizing only reads and must
    // not leave an empty log file behind
    let code = match cli.command {
        Some(Command::Colorize { file }) => cmd_colorize(file.as_deref()),
        None | Some(Command::Demo) => cmd_demo(microlog::init(config)),
        Some(Command::Log {
            level,
            uid,
            reference,
            message,
        }) => cmd_log(
            microlog::init(config),
            level.into(),
            uid.as_deref(),
            reference.as_deref(),
            &message,
        ),
    };

    microlog::shutdown();
    code
}
