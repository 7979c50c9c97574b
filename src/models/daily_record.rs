//! Daily record model and approval state.
//!
//! A [`DailyRecord`] is the persisted result of one Time Calculator run for
//! one (employee, date) pair. It carries the computed hours and the state of
//! the two-stage approval workflow. The record is created from a
//! [`DailyComputation`] and mutated only by the workflow afterward;
//! recomputation is permitted only while both approvals are unset.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DailyComputation;

/// The approval workflow state of a daily record.
///
/// `Pending → SupervisorApproved → RrhhApproved` is the success path;
/// `SupervisorRejected` and `RrhhRejected` are terminal failures reachable
/// from `Pending` and `SupervisorApproved` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// Awaiting the supervisor's decision.
    Pending,
    /// Approved by the supervisor, awaiting human resources.
    SupervisorApproved,
    /// Rejected by the supervisor (terminal).
    SupervisorRejected,
    /// Approved by human resources (terminal success).
    RrhhApproved,
    /// Rejected by human resources (terminal).
    RrhhRejected,
}

impl ApprovalState {
    /// Returns true for states no ordinary decision can leave.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApprovalState::SupervisorRejected
                | ApprovalState::RrhhApproved
                | ApprovalState::RrhhRejected
        )
    }

    /// Returns true for the rejection states a re-open may leave.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            ApprovalState::SupervisorRejected | ApprovalState::RrhhRejected
        )
    }
}

impl std::fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ApprovalState::Pending => "pending",
            ApprovalState::SupervisorApproved => "supervisor_approved",
            ApprovalState::SupervisorRejected => "supervisor_rejected",
            ApprovalState::RrhhApproved => "rrhh_approved",
            ApprovalState::RrhhRejected => "rrhh_rejected",
        };
        write!(f, "{}", name)
    }
}

/// One recorded approval decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    /// Whether the stage approved the record.
    pub approved: bool,
    /// Code of the person who decided.
    pub approver_code: String,
    /// Optional free-text comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The computed hours and approval status for one employee on one date.
///
/// Unique per (employee_id, date). Invariants:
/// - `normal_hours + overtime_hours` equals the worked span minus the
///   recorded unpaid break;
/// - `rrhh_approval` is only ever set after `supervisor_approval.approved`,
///   which the [`crate::workflow`] transition guards enforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// Code of the shift policy the hours were computed under.
    pub policy_code: String,
    /// Hours worked inside the scheduled window, net of the unpaid break.
    pub normal_hours: Decimal,
    /// Hours worked outside the scheduled window.
    pub overtime_hours: Decimal,
    /// Consumed unpaid break minutes.
    pub unpaid_break_minutes: u32,
    /// The policy's overtime multiplier at computation time.
    pub overtime_multiplier: Decimal,
    /// Current workflow state.
    pub state: ApprovalState,
    /// The supervisor's decision, unset until acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_approval: Option<Approval>,
    /// The human-resources decision, unset until acted on and only
    /// meaningful after supervisor approval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrhh_approval: Option<Approval>,
}

impl DailyRecord {
    /// Creates a pending record from a computation.
    pub fn from_computation(
        employee_id: impl Into<String>,
        date: NaiveDate,
        policy_code: impl Into<String>,
        computation: DailyComputation,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            policy_code: policy_code.into(),
            normal_hours: computation.normal_hours,
            overtime_hours: computation.overtime_hours,
            unpaid_break_minutes: computation.unpaid_break_minutes,
            overtime_multiplier: computation.overtime_multiplier,
            state: ApprovalState::Pending,
            supervisor_approval: None,
            rrhh_approval: None,
        }
    }

    /// Replaces the computed hours with a fresh computation.
    ///
    /// Legal only while both approvals are unset; an edit must never
    /// silently alter a record somebody already signed off on. Fails with
    /// [`EngineError::InvalidTransition`] otherwise.
    pub fn apply_computation(
        &mut self,
        policy_code: impl Into<String>,
        computation: DailyComputation,
    ) -> EngineResult<()> {
        if self.supervisor_approval.is_some() || self.rrhh_approval.is_some() {
            return Err(EngineError::InvalidTransition {
                employee_id: self.employee_id.clone(),
                date: self.date,
                attempted: "recompute".to_string(),
                state: self.state,
            });
        }
        self.policy_code = policy_code.into();
        self.normal_hours = computation.normal_hours;
        self.overtime_hours = computation.overtime_hours;
        self.unpaid_break_minutes = computation.unpaid_break_minutes;
        self.overtime_multiplier = computation.overtime_multiplier;
        Ok(())
    }
}
