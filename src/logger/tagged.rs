//! Child handles carrying their own uid/reference.
//!
//! Tags set on the shared `Logger` are visible to every caller; a `TaggedLogger`
//! keeps its tags to itself, so two workers tagging their own bursts of lines
//! can't leak annotations into each other's output.

use super::Logger;
use crate::fmt::{CallSite, Tags};
use crate::level::Level;
use std::fmt::Display;

/// Borrowed logger plus the tags stamped on every line it writes.
#[derive(Debug, Clone)]
pub struct TaggedLogger<'a> {
    logger: &'a Logger,
    tags: Tags,
}

impl<'a> TaggedLogger<'a> {
    pub(super) const fn new(logger: &'a Logger, tags: Tags) -> Self {
        Self { logger, tags }
    }

    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.tags.uid = Some(uid.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Display) -> Self {
        self.tags.reference = Some(reference.to_string());
        self
    }

    #[must_use]
    pub fn without_reference(mut self) -> Self {
        self.tags.reference = None;
        self
    }

    pub fn set_uid(&mut self, uid: impl Into<String>) {
        self.tags.uid = Some(uid.into());
    }

    pub fn clear_uid(&mut self) {
        self.tags.uid = None;
    }

    pub fn set_reference(&mut self, reference: impl Display) {
        self.tags.reference = Some(reference.to_string());
    }

    pub fn remove_reference(&mut self) {
        self.tags.reference = None;
    }

    #[must_use]
    pub const fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The shared handle this child writes through.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger {
        self.logger
    }

    #[track_caller]
    pub fn error(&self, parts: &[&str]) {
        self.log(Level::Error, parts);
    }

    #[track_caller]
    pub fn info(&self, parts: &[&str]) {
        self.log(Level::Info, parts);
    }

    #[track_caller]
    pub fn debug(&self, parts: &[&str]) {
        self.log(Level::Debug, parts);
    }

    #[track_caller]
    pub fn statement(&self, parts: &[&str]) {
        self.log(Level::Statement, parts);
    }

    #[track_caller]
    pub fn details(&self, parts: &[&str]) {
        self.log(Level::Details, parts);
    }

    #[track_caller]
    pub fn log(&self, level: Level, parts: &[&str]) {
        self.log_at(level, CallSite::caller(), &parts.join(" "));
    }

    pub fn log_at(&self, level: Level, site: CallSite, message: &str) {
        self.logger.write(level, &site, message, Some(&self.tags));
    }
}
