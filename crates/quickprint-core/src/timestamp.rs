//! Timestamp rendering and parsing.
//!
//! Timestamps are local wall time written as `YYYY-MM-DDTHH:MM:SS` with an
//! optional fractional part, e.g. `2026-01-15T10:00:00.250000`. Every field is
//! zero-padded and ordered from most to least significant, so timestamps of
//! the same precision sort lexically in chronological order.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::TimestampError;

/// Character placed between the date and time portions.
pub const TIMESTAMP_SEPARATOR: char = 'T';

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Sub-second resolution of a rendered timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPrecision {
    /// Whole seconds, never a fraction.
    Seconds,
    /// Three fractional digits, omitted when zero.
    Millis,
    /// Six fractional digits, omitted when zero.
    #[default]
    Micros,
}

impl TimestampPrecision {
    /// Returns `(digits, divisor)` used to truncate nanoseconds, or `None`
    /// when no fraction is rendered.
    fn fraction(self) -> Option<(usize, u32)> {
        match self {
            Self::Seconds => None,
            Self::Millis => Some((3, 1_000_000)),
            Self::Micros => Some((6, 1_000)),
        }
    }
}

/// Returns the current local time as a timestamp, read from the system clock.
#[must_use]
pub fn current_timestamp() -> String {
    timestamp_from(&SystemClock)
}

/// Returns the current time of `clock` as a timestamp at the default
/// precision. The clock is read on every call.
#[must_use]
pub fn timestamp_from(clock: &dyn Clock) -> String {
    let precision = TimestampPrecision::default();
    let rendered = render_timestamp(clock.now(), precision);
    trace!(timestamp = %rendered, ?precision, "rendered timestamp");
    rendered
}

/// Renders `at` with the given precision.
///
/// Sub-second values are truncated, never rounded. The fraction is dropped
/// entirely when its truncated value is zero. A leap second's extra
/// nanoseconds are clamped so the output width does not change.
#[must_use]
pub fn render_timestamp(at: NaiveDateTime, precision: TimestampPrecision) -> String {
    // `%S` would print a leap second as `60`; keep it at `59` and let the
    // clamped fraction carry it.
    let mut out = format!(
        "{}{TIMESTAMP_SEPARATOR}{:02}:{:02}:{:02}",
        at.format(DATE_FORMAT),
        at.hour(),
        at.minute(),
        at.second()
    );
    if let Some((digits, divisor)) = precision.fraction() {
        let nanos = at.nanosecond().min(999_999_999);
        let fraction = nanos / divisor;
        if fraction > 0 {
            out.push_str(&format!(".{fraction:0digits$}"));
        }
    }
    out
}

/// Parses a timestamp produced by [`render_timestamp`], with or without a
/// fractional part.
///
/// # Errors
///
/// Returns `TimestampError::MissingSeparator` or
/// `TimestampError::MultipleSeparators` if the text does not contain exactly
/// one `T`, and `TimestampError::Malformed` if the fields do not form a valid
/// calendar date and time.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, TimestampError> {
    match text.matches(TIMESTAMP_SEPARATOR).count() {
        1 => {}
        0 => {
            debug!(input = text, "rejected timestamp without separator");
            return Err(TimestampError::MissingSeparator(text.to_owned()));
        }
        _ => {
            debug!(input = text, "rejected timestamp with repeated separator");
            return Err(TimestampError::MultipleSeparators(text.to_owned()));
        }
    }

    let format = format!("{DATE_FORMAT}{TIMESTAMP_SEPARATOR}{TIME_FORMAT}%.f");
    NaiveDateTime::parse_from_str(text, &format).map_err(|source| {
        debug!(input = text, error = %source, "rejected malformed timestamp");
        TimestampError::Malformed {
            input: text.to_owned(),
            source,
        }
    })
}
