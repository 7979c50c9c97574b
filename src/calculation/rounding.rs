//! Fractional-hour rounding.
//!
//! Splitting and break deduction stay in whole minutes; the conversion to
//! fractional hours happens exactly once, here, at a fixed engine-wide
//! resolution so results are deterministic and policy-independent.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the engine-wide fractional-hour resolution (0.01 h).
pub const HOURS_DP: u32 = 2;

/// Converts whole minutes to fractional hours at the engine resolution.
///
/// Rounds to the nearest 0.01 h, half away from zero. Downstream pay
/// calculations are sensitive to the rounding rule, so it lives in exactly
/// one place.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(minutes_to_hours(540), Decimal::from_str("9.00").unwrap());
/// assert_eq!(minutes_to_hours(50), Decimal::from_str("0.83").unwrap());
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(HOURS_DP, RoundingStrategy::MidpointAwayFromZero)
}
