//! Shift policy model and the policy catalog.
//!
//! A shift policy is a named, immutable rule set mapping a day
//! classification to the expected work window and break allowance, plus a
//! single overtime multiplier. The catalog is the registry of policies,
//! built once at process start.

use std::collections::HashMap;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Classification of a calendar day for window selection.
///
/// `Holiday` overrides the weekday classification whenever the external
/// holiday calendar flags the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A public holiday, regardless of weekday.
    Holiday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayClass::Monday => "monday",
            DayClass::Tuesday => "tuesday",
            DayClass::Wednesday => "wednesday",
            DayClass::Thursday => "thursday",
            DayClass::Friday => "friday",
            DayClass::Saturday => "saturday",
            DayClass::Sunday => "sunday",
            DayClass::Holiday => "holiday",
        };
        write!(f, "{}", name)
    }
}

/// The scheduled work window for one day classification.
///
/// A zero-length window (`scheduled_start == scheduled_end`) signals a
/// non-working day: no normal time exists, and every worked minute counts as
/// overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Scheduled start time of day.
    pub scheduled_start: NaiveTime,
    /// Scheduled end time of day.
    pub scheduled_end: NaiveTime,
    /// Unpaid break allowance in minutes; never exceeds the scheduled
    /// duration.
    pub unpaid_break_minutes: u32,
}

impl ShiftWindow {
    /// Returns true when this window marks a non-working day.
    pub fn is_zero(&self) -> bool {
        self.scheduled_start == self.scheduled_end
    }

    /// The scheduled duration in minutes (zero for a non-working day).
    pub fn scheduled_minutes(&self) -> i64 {
        (self.scheduled_end - self.scheduled_start).num_minutes()
    }
}

/// Per-day-classification windows of a policy.
///
/// One field per classification, so a policy cannot exist without a window
/// for every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindows {
    /// Window for Mondays.
    pub monday: ShiftWindow,
    /// Window for Tuesdays.
    pub tuesday: ShiftWindow,
    /// Window for Wednesdays.
    pub wednesday: ShiftWindow,
    /// Window for Thursdays.
    pub thursday: ShiftWindow,
    /// Window for Fridays.
    pub friday: ShiftWindow,
    /// Window for Saturdays.
    pub saturday: ShiftWindow,
    /// Window for Sundays.
    pub sunday: ShiftWindow,
    /// Window applied on public holidays, overriding the weekday one.
    pub holiday: ShiftWindow,
}

impl WeekWindows {
    /// Returns the window for the given day classification.
    pub fn get(&self, day: DayClass) -> &ShiftWindow {
        match day {
            DayClass::Monday => &self.monday,
            DayClass::Tuesday => &self.tuesday,
            DayClass::Wednesday => &self.wednesday,
            DayClass::Thursday => &self.thursday,
            DayClass::Friday => &self.friday,
            DayClass::Saturday => &self.saturday,
            DayClass::Sunday => &self.sunday,
            DayClass::Holiday => &self.holiday,
        }
    }
}

/// A named shift policy.
///
/// Policies are immutable once registered. The lookup is a pure function of
/// the day classification; resolving the same policy twice always yields
/// window-equal results.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DayClass, ShiftPolicy, ShiftWindow, WeekWindows};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let working = ShiftWindow {
///     scheduled_start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     scheduled_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     unpaid_break_minutes: 60,
/// };
/// let off = ShiftWindow {
///     scheduled_start: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     scheduled_end: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     unpaid_break_minutes: 0,
/// };
/// let policy = ShiftPolicy {
///     code: "H4".to_string(),
///     name: "Full-time day shift".to_string(),
///     overtime_multiplier: Decimal::new(125, 2),
///     windows: WeekWindows {
///         monday: working,
///         tuesday: working,
///         wednesday: working,
///         thursday: working,
///         friday: working,
///         saturday: off,
///         sunday: off,
///         holiday: off,
///     },
/// };
///
/// assert_eq!(policy.window_for(DayClass::Monday).unpaid_break_minutes, 60);
/// assert!(policy.window_for(DayClass::Holiday).is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPolicy {
    /// Unique policy code (e.g. "H4").
    pub code: String,
    /// Human-readable policy name.
    pub name: String,
    /// Factor applied to every hour worked outside the scheduled window,
    /// uniformly across weekdays, weekends, and holidays.
    pub overtime_multiplier: Decimal,
    /// The scheduled windows, one per day classification.
    pub windows: WeekWindows,
}

impl ShiftPolicy {
    /// Returns the scheduled window for the given day classification.
    pub fn window_for(&self, day: DayClass) -> &ShiftWindow {
        self.windows.get(day)
    }
}

/// Registry of shift policies, keyed by code.
///
/// Built at process start (programmatically or via
/// [`crate::config::PolicyLoader`]) and read-only afterward, so concurrent
/// lookups need no locking.
#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    policies: HashMap<String, ShiftPolicy>,
}

impl PolicyCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a policy.
    ///
    /// Fails with [`EngineError::InvalidPolicy`] if the code is already
    /// registered; policies are immutable and cannot be replaced.
    pub fn register(&mut self, policy: ShiftPolicy) -> EngineResult<()> {
        if self.policies.contains_key(&policy.code) {
            return Err(EngineError::InvalidPolicy {
                code: policy.code,
                message: "policy code already registered".to_string(),
            });
        }
        self.policies.insert(policy.code.clone(), policy);
        Ok(())
    }

    /// Resolves a policy by code.
    ///
    /// Fails with [`EngineError::UnknownPolicy`] when the code is not
    /// registered.
    pub fn resolve(&self, code: &str) -> EngineResult<&ShiftPolicy> {
        self.policies
            .get(code)
            .ok_or_else(|| EngineError::UnknownPolicy {
                code: code.to_string(),
            })
    }

    /// Returns the number of registered policies.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true when no policies are registered.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
