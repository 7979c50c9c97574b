//! Day classification logic.
//!
//! This module determines which day classification a calendar date falls
//! under for shift window selection. The holiday flag comes from an external
//! holiday calendar and overrides the weekday classification when set.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::DayClass;

/// Classifies a calendar date for window selection.
///
/// # Arguments
///
/// * `date` - The calendar date to classify
/// * `is_holiday` - Whether the external holiday calendar flags the date
///
/// # Returns
///
/// [`DayClass::Holiday`] when the flag is set, otherwise the weekday
/// classification.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::classify_day;
/// use timesheet_engine::models::DayClass;
/// use chrono::NaiveDate;
///
/// // 2026-03-02 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(classify_day(monday, false), DayClass::Monday);
///
/// // The holiday flag wins over the weekday
/// assert_eq!(classify_day(monday, true), DayClass::Holiday);
/// ```
pub fn classify_day(date: NaiveDate, is_holiday: bool) -> DayClass {
    if is_holiday {
        return DayClass::Holiday;
    }
    match date.weekday() {
        Weekday::Mon => DayClass::Monday,
        Weekday::Tue => DayClass::Tuesday,
        Weekday::Wed => DayClass::Wednesday,
        Weekday::Thu => DayClass::Thursday,
        Weekday::Fri => DayClass::Friday,
        Weekday::Sat => DayClass::Saturday,
        Weekday::Sun => DayClass::Sunday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_classifies_every_weekday() {
        // 2026-03-02 through 2026-03-08 run Monday through Sunday
        assert_eq!(classify_day(date("2026-03-02"), false), DayClass::Monday);
        assert_eq!(classify_day(date("2026-03-03"), false), DayClass::Tuesday);
        assert_eq!(classify_day(date("2026-03-04"), false), DayClass::Wednesday);
        assert_eq!(classify_day(date("2026-03-05"), false), DayClass::Thursday);
        assert_eq!(classify_day(date("2026-03-06"), false), DayClass::Friday);
        assert_eq!(classify_day(date("2026-03-07"), false), DayClass::Saturday);
        assert_eq!(classify_day(date("2026-03-08"), false), DayClass::Sunday);
    }

    #[test]
    fn test_holiday_overrides_weekday() {
        assert_eq!(classify_day(date("2026-03-02"), true), DayClass::Holiday);
    }

    #[test]
    fn test_holiday_overrides_weekend() {
        assert_eq!(classify_day(date("2026-03-07"), true), DayClass::Holiday);
    }
}
