//! Raw log files are hard to scan — this replays them with the same colors the
//! logger uses on the console. Lines that don't parse are printed as-is.

use crate::fmt;
use crate::internal;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_colorize(file: Option<&Path>) -> ExitCode {
    let reader: Box<dyn BufRead> = match file {
        Some(path) if path != Path::new("-") => match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                internal::error("CLI", &format!("Cannot open {}: {e}", path.display()));
                return ExitCode::FAILURE;
            }
        },
        _ => Box::new(io::stdin().lock()),
    };

    match replay(reader, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Colorize failed: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn replay(reader: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    for line in reader.lines() {
        writeln!(out, "{}", fmt::colorize(&line?))?;
    }
    out.flush()
}
