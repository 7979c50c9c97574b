//! The Time Calculator.
//!
//! Orders clock validation, day classification, window splitting, break
//! deduction, and rounding into one pure function. No side effects:
//! persistence of the resulting record is the caller's concern.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockEvents, DailyComputation, ShiftPolicy};

use super::break_deduction::deduct_unpaid_break;
use super::day_class::classify_day;
use super::rounding::minutes_to_hours;
use super::window_split::split_by_window;

/// Computes normal hours, overtime hours, and consumed unpaid break for one
/// employee and date under a shift policy.
///
/// The day classification selects the policy's scheduled window (`is_holiday`
/// wins over the weekday). Worked time inside the window, net of the unpaid
/// break, is normal time; worked time outside the window is overtime, valued
/// downstream at the policy's single multiplier. Absent clock events signal
/// an unworked day and produce the all-zero computation.
///
/// # Errors
///
/// [`EngineError::InvalidClockEvents`] when `clock_out` precedes `clock_in`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::compute_daily_hours;
/// use timesheet_engine::models::{ClockEvents, ShiftPolicy, ShiftWindow, WeekWindows};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let weekday = ShiftWindow {
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
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
///     windows: WeekWindows {
///         monday: weekday, tuesday: weekday, wednesday: weekday,
///         thursday: weekday, friday: weekday,
///         saturday: off, sunday: off, holiday: off,
///     },
/// };
///
/// // 2026-03-02 is a Monday
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let events = ClockEvents {
///     clock_in: date.and_hms_opt(7, 0, 0).unwrap(),
///     clock_out: date.and_hms_opt(17, 0, 0).unwrap(),
/// };
///
/// let computation = compute_daily_hours(&policy, "emp_001", date, false, Some(&events)).unwrap();
/// assert_eq!(computation.normal_hours, Decimal::from_str("9.00").unwrap());
/// assert_eq!(computation.overtime_hours, Decimal::from_str("0.00").unwrap());
/// assert_eq!(computation.unpaid_break_minutes, 60);
/// ```
pub fn compute_daily_hours(
    policy: &ShiftPolicy,
    employee_id: &str,
    date: NaiveDate,
    is_holiday: bool,
    events: Option<&ClockEvents>,
) -> EngineResult<DailyComputation> {
    let Some(events) = events else {
        return Ok(DailyComputation::unworked(policy.overtime_multiplier));
    };

    if events.clock_out < events.clock_in {
        return Err(EngineError::InvalidClockEvents {
            employee_id: employee_id.to_string(),
            date,
            message: format!(
                "clock-out {} precedes clock-in {}",
                events.clock_out.time(),
                events.clock_in.time()
            ),
        });
    }

    let day = classify_day(date, is_holiday);
    let window = policy.window_for(day);

    let split = split_by_window(events, date, window);
    let deduction = deduct_unpaid_break(split.inside_minutes, window.unpaid_break_minutes);

    Ok(DailyComputation {
        normal_hours: minutes_to_hours(deduction.normal_minutes),
        overtime_hours: minutes_to_hours(split.outside_minutes()),
        unpaid_break_minutes: deduction.consumed_break_minutes,
        overtime_multiplier: policy.overtime_multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftWindow, WeekWindows};
    use chrono::{NaiveDateTime, NaiveTime};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn window(start: &str, end: &str, break_minutes: u32) -> ShiftWindow {
        ShiftWindow {
            scheduled_start: NaiveTime::parse_from_str(start, "%H:%M:%S").unwrap(),
            scheduled_end: NaiveTime::parse_from_str(end, "%H:%M:%S").unwrap(),
            unpaid_break_minutes: break_minutes,
        }
    }

    fn h4() -> ShiftPolicy {
        let weekday = window("07:00:00", "17:00:00", 60);
        let off = window("00:00:00", "00:00:00", 0);
        ShiftPolicy {
            code: "H4".to_string(),
            name: "Full-time day shift".to_string(),
            overtime_multiplier: dec("1.25"),
            windows: WeekWindows {
                monday: weekday,
                tuesday: weekday,
                wednesday: weekday,
                thursday: weekday,
                friday: window("07:00:00", "16:00:00", 60),
                saturday: off,
                sunday: off,
                holiday: off,
            },
        }
    }

    fn events(clock_in: &str, clock_out: &str) -> ClockEvents {
        ClockEvents {
            clock_in: datetime(clock_in),
            clock_out: datetime(clock_out),
        }
    }

    /// TC-001: H4 Monday 07:00-17:00 is 9h net normal, no overtime.
    #[test]
    fn test_h4_monday_full_window() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-02"),
            false,
            Some(&events("2026-03-02 07:00:00", "2026-03-02 17:00:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("9.00"));
        assert_eq!(computation.overtime_hours, dec("0.00"));
        assert_eq!(computation.unpaid_break_minutes, 60);
        assert_eq!(computation.overtime_multiplier, dec("1.25"));
    }

    /// TC-002: H4 Friday 07:00-18:00 is 8h normal plus 2h overtime.
    #[test]
    fn test_h4_friday_with_evening_overtime() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-06"),
            false,
            Some(&events("2026-03-06 07:00:00", "2026-03-06 18:00:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("8.00"));
        assert_eq!(computation.overtime_hours, dec("2.00"));
        assert_eq!(computation.unpaid_break_minutes, 60);
    }

    /// TC-003: H4 Saturday has a zero window, so everything is overtime.
    #[test]
    fn test_h4_saturday_all_overtime() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-07"),
            false,
            Some(&events("2026-03-07 08:00:00", "2026-03-07 12:00:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("0.00"));
        assert_eq!(computation.overtime_hours, dec("4.00"));
        assert_eq!(computation.unpaid_break_minutes, 0);
    }

    /// TC-004: the holiday flag overrides a weekday window.
    #[test]
    fn test_holiday_overrides_weekday_window() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-02"),
            true,
            Some(&events("2026-03-02 07:00:00", "2026-03-02 17:00:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("0.00"));
        assert_eq!(computation.overtime_hours, dec("10.00"));
        assert_eq!(computation.unpaid_break_minutes, 0);
    }

    /// TC-005: absent clock events mean an unworked day.
    #[test]
    fn test_absent_events_all_zero() {
        let computation =
            compute_daily_hours(&h4(), "emp_001", date("2026-03-02"), false, None).unwrap();

        assert_eq!(computation.normal_hours, dec("0"));
        assert_eq!(computation.overtime_hours, dec("0"));
        assert_eq!(computation.unpaid_break_minutes, 0);
        assert_eq!(computation.overtime_multiplier, dec("1.25"));
    }

    /// TC-006: clock-out before clock-in is rejected.
    #[test]
    fn test_clock_out_before_clock_in_fails() {
        let result = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-02"),
            false,
            Some(&events("2026-03-02 17:00:00", "2026-03-02 07:00:00")),
        );

        match result {
            Err(EngineError::InvalidClockEvents {
                employee_id, date, ..
            }) => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(date.to_string(), "2026-03-02");
            }
            other => panic!("Expected InvalidClockEvents, got {:?}", other),
        }
    }

    /// TC-007: early start counts as overtime before the window.
    #[test]
    fn test_early_start_is_overtime() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-03"),
            false,
            Some(&events("2026-03-03 06:00:00", "2026-03-03 17:00:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("9.00"));
        assert_eq!(computation.overtime_hours, dec("1.00"));
    }

    /// TC-008: overlap smaller than the break floors normal time at zero.
    #[test]
    fn test_short_overlap_floors_at_zero() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-02"),
            false,
            Some(&events("2026-03-02 07:00:00", "2026-03-02 07:30:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("0.00"));
        assert_eq!(computation.overtime_hours, dec("0.00"));
        assert_eq!(computation.unpaid_break_minutes, 30);
    }

    /// TC-009: zero-length attendance is a worked day with zero hours.
    #[test]
    fn test_equal_clock_in_and_out() {
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-02"),
            false,
            Some(&events("2026-03-02 09:00:00", "2026-03-02 09:00:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("0.00"));
        assert_eq!(computation.overtime_hours, dec("0.00"));
        assert_eq!(computation.unpaid_break_minutes, 0);
    }

    /// TC-010: fractional result rounds at the fixed resolution.
    #[test]
    fn test_fractional_rounding() {
        // 07:00-16:50 on Monday: 530 inside, break 60 -> 470 min = 7.8333h
        let computation = compute_daily_hours(
            &h4(),
            "emp_001",
            date("2026-03-02"),
            false,
            Some(&events("2026-03-02 07:00:00", "2026-03-02 16:50:00")),
        )
        .unwrap();

        assert_eq!(computation.normal_hours, dec("7.83"));
        assert_eq!(computation.overtime_hours, dec("0.00"));
    }

    proptest! {
        /// For any consistent clock pair, normal + overtime equals the
        /// worked span minus the consumed break, within one rounding step.
        #[test]
        fn prop_hours_invariant(start_minute in 0i64..1440, duration in 0i64..1440) {
            let policy = h4();
            let day = date("2026-03-02");
            let midnight = day.and_hms_opt(0, 0, 0).unwrap();
            let events = ClockEvents {
                clock_in: midnight + chrono::Duration::minutes(start_minute),
                clock_out: midnight + chrono::Duration::minutes(start_minute + duration),
            };

            let computation =
                compute_daily_hours(&policy, "emp_001", day, false, Some(&events)).unwrap();

            prop_assert!(computation.normal_hours >= Decimal::ZERO);
            prop_assert!(computation.overtime_hours >= Decimal::ZERO);

            let expected = super::minutes_to_hours(
                duration - computation.unpaid_break_minutes as i64,
            );
            let sum = computation.normal_hours + computation.overtime_hours;
            let drift = (sum - expected).abs();
            prop_assert!(
                drift <= Decimal::new(1, 2),
                "normal {} + overtime {} drifts {} from {}",
                computation.normal_hours,
                computation.overtime_hours,
                drift,
                expected
            );
        }
    }
}
