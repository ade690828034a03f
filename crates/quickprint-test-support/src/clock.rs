//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{NaiveDateTime, TimeDelta};
use quickprint_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A clock that starts at a given instant and advances by a fixed step after
/// every read. Used to exercise successive reads without waiting on real time.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<NaiveDateTime>,
    step: TimeDelta,
}

impl SteppingClock {
    /// Create a clock whose first read returns `start`.
    #[must_use]
    pub fn new(start: NaiveDateTime, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned or the clock steps past the
    /// representable date range.
    fn now(&self) -> NaiveDateTime {
        let mut next = self.next.lock().unwrap();
        let current = *next;
        *next = current
            .checked_add_signed(self.step)
            .expect("SteppingClock stepped out of range");
        current
    }
}
