//! One open log file and the date it belongs to.

use chrono::{DateTime, Local, NaiveDate};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Second-resolution stamp; the nanosecond suffix is appended separately.
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// File name for a log opened at `now`: `2025-03-14_09-26-53-123456789.txt`.
///
/// Nanoseconds keep names unique across rotations and restarts.
#[must_use]
pub fn file_name_for(now: &DateTime<Local>) -> String {
    format!("{}.txt", file_stamp(now))
}

fn file_stamp(now: &DateTime<Local>) -> String {
    format!("{}-{:09}", now.format(FILE_STAMP_FORMAT), now.timestamp_subsec_nanos())
}

/// An open, append-only log file.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    opened_on: NaiveDate,
    file: File,
}

impl LogFile {
    /// Creates `dir` if needed, opens a fresh file inside it, and writes the
    /// creation marker as its first line.
    ///
    /// # Errors
    /// `Error::Open` if `dir` is empty, the directory or file can't be created,
    /// or the marker can't be written.
    pub fn open(dir: &Path, now: &DateTime<Local>) -> Result<Self, crate::Error> {
        let path = dir.join(file_name_for(now));
        let open_err = |source| crate::Error::Open {
            path: path.clone(),
            source,
        };

        // An empty path would silently land the file in the working directory.
        if dir.as_os_str().is_empty() {
            return Err(open_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty log directory",
            )));
        }

        fs::create_dir_all(dir).map_err(open_err)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_err)?;

        writeln!(file, "Log file created at {}", file_stamp(now)).map_err(open_err)?;
        file.flush().map_err(open_err)?;

        Ok(Self {
            path,
            opened_on: now.date_naive(),
            file,
        })
    }

    /// Appends one newline-terminated line and flushes it before returning.
    ///
    /// # Errors
    /// Any I/O error from the write or flush; the line is lost.
    pub fn write_line(&mut self, line: &str) -> Result<(), crate::Error> {
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        self.file.write_all(content.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    /// Flushes and syncs, then drops the handle.
    ///
    /// # Errors
    /// I/O errors from flushing or syncing; the handle is released either way.
    pub fn close(mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }
}
