//! Decides which file a line goes to, and swaps files when the calendar day changes.
//!
//! The check runs inside every log call, before the line is encoded, so a call
//! that crosses midnight lands in the new day's file.

mod clock;
mod file;

pub use clock::{Clock, SystemClock};
pub use file::{LogFile, file_name_for};

use crate::internal;
use chrono::{DateTime, Local, NaiveDate};
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Slot {
    Open(LogFile),
    /// Opening failed; retried once the date moves on (daily rotation only).
    Failed { on: NaiveDate, reason: String },
    Closed,
}

/// Owns the active log file for one logger.
#[derive(Debug)]
pub struct Rotation {
    directory: PathBuf,
    daily: bool,
    slot: Slot,
}

impl Rotation {
    /// Opens the first file. A failure is reported to stderr and remembered, so
    /// later writes say why there is no file instead of failing silently.
    #[must_use]
    pub fn start(directory: PathBuf, daily: bool, now: &DateTime<Local>) -> Self {
        let slot = open_slot(&directory, now);
        Self {
            directory,
            daily,
            slot,
        }
    }

    /// Like `start`, but hands the open error back instead of reporting it.
    ///
    /// # Errors
    /// `Error::Open` if the directory or first file can't be created.
    pub fn try_start(
        directory: PathBuf,
        daily: bool,
        now: &DateTime<Local>,
    ) -> Result<Self, crate::Error> {
        let file = LogFile::open(&directory, now)?;
        Ok(Self {
            directory,
            daily,
            slot: Slot::Open(file),
        })
    }

    /// The file the next line belongs in, rotating first if the day changed.
    ///
    /// # Errors
    /// `Error::NoLogFile` when no file could be opened, `Error::Closed` after `close`.
    pub fn current(&mut self, now: &DateTime<Local>) -> Result<&mut LogFile, crate::Error> {
        if self.needs_rotation(now.date_naive()) {
            self.rotate(now);
        }

        match &mut self.slot {
            Slot::Open(file) => Ok(file),
            Slot::Failed { reason, .. } => Err(crate::Error::NoLogFile(reason.clone())),
            Slot::Closed => Err(crate::Error::Closed),
        }
    }

    fn needs_rotation(&self, today: NaiveDate) -> bool {
        if !self.daily {
            return false;
        }
        match &self.slot {
            Slot::Open(file) => file.opened_on() != today,
            Slot::Failed { on, .. } => *on != today,
            Slot::Closed => false,
        }
    }

    fn rotate(&mut self, now: &DateTime<Local>) {
        if let Slot::Open(old) = std::mem::replace(&mut self.slot, Slot::Closed) {
            // Close errors don't block opening the next day's file.
            let _ = old.close();
        }
        self.slot = open_slot(&self.directory, now);
    }

    /// Path of the active file, if one is open.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.slot {
            Slot::Open(file) => Some(file.path()),
            Slot::Failed { .. } | Slot::Closed => None,
        }
    }

    /// Closes the active file; later calls to `current` report `Error::Closed`.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    pub fn close(&mut self) -> Result<(), crate::Error> {
        match std::mem::replace(&mut self.slot, Slot::Closed) {
            Slot::Open(file) => file.close(),
            Slot::Failed { .. } | Slot::Closed => Ok(()),
        }
    }
}

fn open_slot(directory: &Path, now: &DateTime<Local>) -> Slot {
    match LogFile::open(directory, now) {
        Ok(file) => Slot::Open(file),
        Err(e) => {
            internal::error("FILE", &format!("Log init failed: {e}"));
            Slot::Failed {
                on: now.date_naive(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::fs;

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn failed_open_is_reported_then_retried_next_day() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("logs");
        fs::write(&dir, "in the way").unwrap();

        let mut rotation = Rotation::start(dir.clone(), true, &noon());
        assert!(rotation.path().is_none());
        assert!(matches!(
            rotation.current(&noon()),
            Err(crate::Error::NoLogFile(_))
        ));

        fs::remove_file(&dir).unwrap();
        let tomorrow = noon() + Duration::days(1);
        assert!(rotation.current(&tomorrow).is_ok());
        assert!(rotation.path().is_some_and(|p| p.starts_with(&dir)));
    }

    #[test]
    fn closed_rotation_refuses_writes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut rotation = Rotation::start(tmp.path().to_path_buf(), false, &noon());
        rotation.close().unwrap();
        assert!(matches!(rotation.current(&noon()), Err(crate::Error::Closed)));
    }
}
