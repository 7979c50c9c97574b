//! Configuration types for shift policies.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML policy file. The per-day windows are a fixed struct rather than a
//! map, so a policy missing a day classification fails at parse time.

use std::collections::HashMap;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ShiftPolicy, ShiftWindow, WeekWindows};

/// Top-level structure of the policies YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesFile {
    /// Map of policy code to policy definition.
    pub policies: HashMap<String, PolicyConfig>,
}

/// One policy definition as it appears in the YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Human-readable policy name.
    pub name: String,
    /// Factor applied to hours worked outside the scheduled window.
    pub overtime_multiplier: Decimal,
    /// The scheduled windows, one per day classification.
    pub windows: WindowsConfig,
}

/// Per-day windows section; every day classification is required.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowsConfig {
    /// Monday window.
    pub monday: WindowConfig,
    /// Tuesday window.
    pub tuesday: WindowConfig,
    /// Wednesday window.
    pub wednesday: WindowConfig,
    /// Thursday window.
    pub thursday: WindowConfig,
    /// Friday window.
    pub friday: WindowConfig,
    /// Saturday window.
    pub saturday: WindowConfig,
    /// Sunday window.
    pub sunday: WindowConfig,
    /// Holiday window, overriding the weekday one.
    pub holiday: WindowConfig,
}

/// One scheduled window as it appears in the YAML file.
///
/// Equal `start` and `end` mark a non-working day.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowConfig {
    /// Scheduled start time of day.
    pub start: NaiveTime,
    /// Scheduled end time of day.
    pub end: NaiveTime,
    /// Unpaid break allowance in minutes.
    #[serde(default)]
    pub unpaid_break_minutes: u32,
}

impl From<WindowConfig> for ShiftWindow {
    fn from(config: WindowConfig) -> Self {
        ShiftWindow {
            scheduled_start: config.start,
            scheduled_end: config.end,
            unpaid_break_minutes: config.unpaid_break_minutes,
        }
    }
}

impl PolicyConfig {
    /// Converts the parsed definition into a domain policy under `code`.
    pub fn into_policy(self, code: impl Into<String>) -> ShiftPolicy {
        ShiftPolicy {
            code: code.into(),
            name: self.name,
            overtime_multiplier: self.overtime_multiplier,
            windows: WeekWindows {
                monday: self.windows.monday.into(),
                tuesday: self.windows.tuesday.into(),
                wednesday: self.windows.wednesday.into(),
                thursday: self.windows.thursday.into(),
                friday: self.windows.friday.into(),
                saturday: self.windows.saturday.into(),
                sunday: self.windows.sunday.into(),
                holiday: self.windows.holiday.into(),
            },
        }
    }
}
