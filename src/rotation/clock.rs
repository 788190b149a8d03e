//! Wall-clock seam. Rotation depends on the calendar date, and tests can't wait for midnight.

use chrono::{DateTime, Local};
use std::sync::Arc;

/// Source of "now" for timestamps, file names, and the rotation check.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The real local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Lets a test keep a handle on a clock it has already given to a logger.
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}
