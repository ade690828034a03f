//! Clock abstraction for determinism.

use chrono::{Local, NaiveDateTime};

/// Abstraction over local wall-clock time.
///
/// Timestamps are rendered in local time without an offset, so the clock
/// hands out naive local values rather than zoned ones.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
