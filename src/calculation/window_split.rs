//! Worked-span splitting at the scheduled window boundaries.
//!
//! This module splits an employee's actual worked span into the portion
//! inside the scheduled window (candidate normal time) and the portions
//! before the scheduled start and after the scheduled end (overtime). A
//! zero-length window routes the entire span outside.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{ClockEvents, ShiftWindow};

/// The result of splitting a worked span at the window boundaries.
///
/// All fields are whole minutes; `before_minutes + inside_minutes +
/// after_minutes` always equals the raw worked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSplit {
    /// Worked minutes before the scheduled start.
    pub before_minutes: i64,
    /// Worked minutes inside the scheduled window.
    pub inside_minutes: i64,
    /// Worked minutes after the scheduled end.
    pub after_minutes: i64,
}

impl WindowSplit {
    /// Total worked minutes outside the scheduled window.
    pub fn outside_minutes(&self) -> i64 {
        self.before_minutes + self.after_minutes
    }
}

/// Splits the worked span at the scheduled window boundaries.
///
/// The window's times of day are anchored on `date`; a clock-out past
/// midnight simply extends the after-window portion. For a zero-length
/// window (non-working day) every worked minute lands outside.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::split_by_window;
/// use timesheet_engine::models::{ClockEvents, ShiftWindow};
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
///
/// let window = ShiftWindow {
///     scheduled_start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     scheduled_end: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     unpaid_break_minutes: 60,
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
/// let events = ClockEvents {
///     clock_in: date.and_hms_opt(7, 0, 0).unwrap(),
///     clock_out: date.and_hms_opt(18, 0, 0).unwrap(),
/// };
///
/// let split = split_by_window(&events, date, &window);
/// assert_eq!(split.inside_minutes, 540);
/// assert_eq!(split.after_minutes, 120);
/// ```
pub fn split_by_window(events: &ClockEvents, date: NaiveDate, window: &ShiftWindow) -> WindowSplit {
    let worked = events.worked_minutes();

    if window.is_zero() {
        return WindowSplit {
            before_minutes: 0,
            inside_minutes: 0,
            after_minutes: worked,
        };
    }

    let window_start: NaiveDateTime = date.and_time(window.scheduled_start);
    let window_end: NaiveDateTime = date.and_time(window.scheduled_end);

    let before_minutes = (window_start.min(events.clock_out) - events.clock_in)
        .num_minutes()
        .max(0);
    let after_minutes = (events.clock_out - window_end.max(events.clock_in))
        .num_minutes()
        .max(0);
    let inside_minutes = worked - before_minutes - after_minutes;

    WindowSplit {
        before_minutes,
        inside_minutes,
        after_minutes,
    }
}
