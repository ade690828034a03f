//! Shared test mocks and utilities for Quickprint.

mod clock;

pub use clock::{FixedClock, SteppingClock};
