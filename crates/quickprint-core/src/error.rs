//! Error types.

use thiserror::Error;

/// Errors produced when reading a rendered timestamp back into a date and time.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The text has no `T` between the date and time portions.
    #[error("timestamp is missing the date/time separator: {0:?}")]
    MissingSeparator(String),

    /// The text has more than one `T`.
    #[error("timestamp contains more than one date/time separator: {0:?}")]
    MultipleSeparators(String),

    /// The date or time fields could not be parsed.
    #[error("malformed timestamp {input:?}: {source}")]
    Malformed {
        /// The rejected input.
        input: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
}
