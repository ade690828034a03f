//! Quickprint Core — list formatting and timestamp helpers.
//!
//! Two independent, stateless helpers: [`format::format_list`] joins text
//! values with `", "`, and [`timestamp::current_timestamp`] renders the
//! current local time as a sortable `YYYY-MM-DDTHH:MM:SS` string. Time is
//! read through the [`clock::Clock`] capability so callers can inject a
//! deterministic source.

pub mod clock;
pub mod error;
pub mod format;
pub mod timestamp;

pub use clock::{Clock, SystemClock};
pub use error::TimestampError;
pub use format::{LIST_SEPARATOR, format_list, split_list};
pub use timestamp::{
    TIMESTAMP_SEPARATOR, TimestampPrecision, current_timestamp, parse_timestamp,
    render_timestamp, timestamp_from,
};
