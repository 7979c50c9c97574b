//! Request types for the Timesheet Interpretation Engine API.
//!
//! This module defines the JSON request structures. They are thin
//! serializations of the core operations' inputs; conversion into domain
//! types happens here so handlers stay declarative.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Approval, ApprovalState, ClockEvents};

/// Request body for `POST /records`: compute (or recompute) the daily record
/// for one employee and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The employee to compute for.
    pub employee_id: String,
    /// The calendar date to compute.
    pub date: NaiveDate,
    /// Code of the shift policy assigned to the employee.
    pub policy_code: String,
    /// Whether the external holiday calendar flags the date.
    #[serde(default)]
    pub is_holiday: bool,
    /// When the employee clocked in, if the day was worked.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// When the employee clocked out, if the day was worked.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

impl ComputeRequest {
    /// The clock events, present only when both timestamps were supplied.
    /// A lone timestamp counts as an unworked day.
    pub fn clock_events(&self) -> Option<ClockEvents> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) => Some(ClockEvents {
                clock_in,
                clock_out,
            }),
            _ => None,
        }
    }
}

/// Request body for the supervisor and RRHH decision endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Whether the stage approves the record.
    pub approved: bool,
    /// Code of the person deciding.
    pub approver_code: String,
    /// Optional free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// The approval state the caller last observed; the decision fails with
    /// a conflict when the record has moved on.
    pub expected_state: ApprovalState,
}

impl From<DecisionRequest> for Approval {
    fn from(request: DecisionRequest) -> Self {
        Approval {
            approved: request.approved,
            approver_code: request.approver_code,
            comment: request.comment,
        }
    }
}

/// Request body for `POST /records/{employee_id}/{date}/reopen`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReopenRequest {
    /// The approval state the caller last observed.
    pub expected_state: ApprovalState,
}
