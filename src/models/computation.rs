//! Daily computation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pure output of one Time Calculator run for one employee and date.
///
/// Hours are rounded to the engine-wide 0.01 h resolution.
/// `unpaid_break_minutes` is the consumed portion of the policy's break
/// allowance, so `normal_hours + overtime_hours` always equals the worked
/// span minus the recorded break. The overtime multiplier is echoed from the
/// policy; the engine never computes a money amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyComputation {
    /// Hours worked inside the scheduled window, net of the unpaid break.
    pub normal_hours: Decimal,
    /// Hours worked outside the scheduled window.
    pub overtime_hours: Decimal,
    /// Consumed unpaid break minutes.
    pub unpaid_break_minutes: u32,
    /// The policy's overtime multiplier, recorded for downstream pay systems.
    pub overtime_multiplier: Decimal,
}

impl DailyComputation {
    /// The all-zero computation for an unworked day.
    pub fn unworked(overtime_multiplier: Decimal) -> Self {
        Self {
            normal_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            unpaid_break_minutes: 0,
            overtime_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_unworked_is_all_zero() {
        let computation = DailyComputation::unworked(dec("1.25"));
        assert_eq!(computation.normal_hours, Decimal::ZERO);
        assert_eq!(computation.overtime_hours, Decimal::ZERO);
        assert_eq!(computation.unpaid_break_minutes, 0);
        assert_eq!(computation.overtime_multiplier, dec("1.25"));
    }

    #[test]
    fn test_serialization() {
        let computation = DailyComputation {
            normal_hours: dec("8.00"),
            overtime_hours: dec("2.00"),
            unpaid_break_minutes: 60,
            overtime_multiplier: dec("1.25"),
        };

        let json = serde_json::to_string(&computation).unwrap();
        assert!(json.contains("\"normal_hours\":\"8.00\""));
        assert!(json.contains("\"overtime_hours\":\"2.00\""));
        assert!(json.contains("\"unpaid_break_minutes\":60"));

        let deserialized: DailyComputation = serde_json::from_str(&json).unwrap();
        assert_eq!(computation, deserialized);
    }
}
