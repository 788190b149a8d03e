//! The raw line is the only textual contract downstream readers rely on, so a
//! single type both builds it and reads it back — encoder and colorizer can't
//! disagree about where a field starts.
//!
//! ```text
//! <timestamp> @@ [ <LEVEL> ] @@ [( <uid> ) @@ ][( <reference> ) @@ ]<location> @@ <message>
//! ```

use super::callsite::CallSite;
use crate::level::Level;
use chrono::{DateTime, TimeZone};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Separates every section of a raw line.
pub const DELIMITER: &str = " @@ ";

/// Time of day with a six-digit microsecond suffix, e.g. `14:03:27:004211`.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S:%6f";

/// Optional sections are probed in order; a lone `( … )` is taken as the uid.
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^(?P<ts>.*?) @@ \[ (?P<level>.*?) \] @@ (?:\( (?P<uid>.*?) \) @@ )?(?:\( (?P<reference>.*?) \) @@ )?(?P<location>.*?) @@ (?P<message>.*)$",
    )
    .expect("Invalid line regex")
});

/// Caller-supplied annotations attached to every line logged through a handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    pub uid: Option<String>,
    pub reference: Option<String>,
}

impl Tags {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            uid: None,
            reference: None,
        }
    }

    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// References are opaque to the logger — only their rendered form is kept.
    #[must_use]
    pub fn reference(mut self, reference: impl fmt::Display) -> Self {
        self.reference = Some(reference.to_string());
        self
    }
}

/// One log call, from encoding to console rendering. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    /// Kept as text so lines with unknown labels still parse and render.
    pub level: String,
    pub uid: Option<String>,
    pub reference: Option<String>,
    pub location: String,
    pub message: String,
}

impl LogLine {
    /// Empty tags are treated as absent — the layout never carries `(  )`.
    #[must_use]
    pub fn new<Tz: TimeZone>(
        at: &DateTime<Tz>,
        level: Level,
        tags: &Tags,
        site: &CallSite,
        message: impl Into<String>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            level: level.as_str().to_string(),
            uid: non_empty(tags.uid.as_deref()),
            reference: non_empty(tags.reference.as_deref()),
            location: site.to_string(),
            message: message.into(),
        }
    }

    /// Reads a raw line back into its fields.
    ///
    /// # Errors
    /// Returns `Error::MalformedLine` when the line does not follow the `@@` layout.
    pub fn parse(raw: &str) -> Result<Self, crate::Error> {
        let caps = LINE_REGEX
            .captures(raw)
            .ok_or_else(|| crate::Error::MalformedLine(raw.to_string()))?;

        let field = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        Ok(Self {
            timestamp: field("ts").unwrap_or_default(),
            level: field("level").unwrap_or_default(),
            uid: field("uid"),
            reference: field("reference"),
            location: field("location").unwrap_or_default(),
            message: field("message").unwrap_or_default(),
        })
    }

    /// `None` for labels written by something other than this crate.
    #[must_use]
    pub fn known_level(&self) -> Option<Level> {
        self.level.parse().ok()
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}[ {} ]{DELIMITER}", self.timestamp, self.level)?;
        if let Some(uid) = &self.uid {
            write!(f, "( {uid} ){DELIMITER}")?;
        }
        if let Some(reference) = &self.reference {
            write!(f, "( {reference} ){DELIMITER}")?;
        }
        write!(f, "{}{DELIMITER}{}", self.location, self.message)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToString::to_string)
}
