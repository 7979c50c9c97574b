//! Clock event model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The actual clock-in/clock-out pair recorded for an employee on one date.
///
/// Absence of a `ClockEvents` value for a date signals an unworked day. The
/// clock-out may fall past midnight for shifts running late; the pair is
/// still attributed to the calendar date it was opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvents {
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out.
    pub clock_out: NaiveDateTime,
}

impl ClockEvents {
    /// The raw worked span in minutes (clock-out minus clock-in).
    ///
    /// Negative when the pair is inconsistent; the calculator rejects that
    /// case with `InvalidClockEvents` before using the span.
    pub fn worked_minutes(&self) -> i64 {
        (self.clock_out - self.clock_in).num_minutes()
    }
}
