//! Unpaid break deduction.
//!
//! The break allowance is assumed to fall inside the scheduled window and is
//! never paid, so it only ever reduces inside-window time. When the inside
//! portion is smaller than the allowance, normal time floors at zero and the
//! unconsumed remainder is not carried anywhere else.

use serde::{Deserialize, Serialize};

/// The result of deducting the unpaid break from inside-window minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakDeduction {
    /// Inside-window minutes remaining after the break.
    pub normal_minutes: i64,
    /// The portion of the allowance that was actually consumed.
    pub consumed_break_minutes: u32,
}

/// Deducts the unpaid break allowance from inside-window minutes.
///
/// Reporting the consumed portion (rather than the full allowance) keeps the
/// hours invariant exact: normal + overtime always equals worked minus the
/// recorded break.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::deduct_unpaid_break;
///
/// let full = deduct_unpaid_break(600, 60);
/// assert_eq!(full.normal_minutes, 540);
/// assert_eq!(full.consumed_break_minutes, 60);
///
/// let short = deduct_unpaid_break(30, 60);
/// assert_eq!(short.normal_minutes, 0);
/// assert_eq!(short.consumed_break_minutes, 30);
/// ```
pub fn deduct_unpaid_break(inside_minutes: i64, allowance_minutes: u32) -> BreakDeduction {
    let consumed = (allowance_minutes as i64).min(inside_minutes).max(0);
    BreakDeduction {
        normal_minutes: inside_minutes - consumed,
        consumed_break_minutes: consumed as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// BD-001: allowance fully consumed.
    #[test]
    fn test_allowance_fully_consumed() {
        let result = deduct_unpaid_break(600, 60);
        assert_eq!(result.normal_minutes, 540);
        assert_eq!(result.consumed_break_minutes, 60);
    }

    /// BD-002: inside portion smaller than the allowance floors at zero.
    #[test]
    fn test_floors_at_zero_when_overlap_short() {
        let result = deduct_unpaid_break(30, 60);
        assert_eq!(result.normal_minutes, 0);
        assert_eq!(result.consumed_break_minutes, 30);
    }

    /// BD-003: inside portion equal to the allowance.
    #[test]
    fn test_inside_equal_to_allowance() {
        let result = deduct_unpaid_break(60, 60);
        assert_eq!(result.normal_minutes, 0);
        assert_eq!(result.consumed_break_minutes, 60);
    }

    /// BD-004: zero allowance is a no-op.
    #[test]
    fn test_zero_allowance() {
        let result = deduct_unpaid_break(240, 0);
        assert_eq!(result.normal_minutes, 240);
        assert_eq!(result.consumed_break_minutes, 0);
    }

    /// BD-005: zero inside minutes consume nothing.
    #[test]
    fn test_zero_inside_minutes() {
        let result = deduct_unpaid_break(0, 60);
        assert_eq!(result.normal_minutes, 0);
        assert_eq!(result.consumed_break_minutes, 0);
    }

    #[test]
    fn test_normal_plus_consumed_equals_inside() {
        for inside in [0, 15, 59, 60, 61, 480, 600] {
            for allowance in [0u32, 30, 60, 90] {
                let result = deduct_unpaid_break(inside, allowance);
                assert_eq!(
                    result.normal_minutes + result.consumed_break_minutes as i64,
                    inside
                );
            }
        }
    }
}
