//! Guarded approval transitions.
//!
//! Every mutation validates the record's current state against the caller's
//! expected pre-state immediately before applying its transition, so two
//! submissions racing on the same record resolve to exactly one success and
//! one [`EngineError::ConcurrentModification`], never two silent writes.

use crate::error::{EngineError, EngineResult};
use crate::models::{Approval, ApprovalState, DailyRecord};

/// Checks the compare-and-swap pre-state before any transition.
fn check_expected_state(
    record: &DailyRecord,
    expected: ApprovalState,
) -> EngineResult<()> {
    if record.state != expected {
        return Err(EngineError::ConcurrentModification {
            employee_id: record.employee_id.clone(),
            date: record.date,
            expected,
            observed: record.state,
        });
    }
    Ok(())
}

fn invalid_transition(record: &DailyRecord, attempted: &str) -> EngineError {
    EngineError::InvalidTransition {
        employee_id: record.employee_id.clone(),
        date: record.date,
        attempted: attempted.to_string(),
        state: record.state,
    }
}

/// Submits the supervisor's decision on a pending record.
///
/// Legal only from [`ApprovalState::Pending`]. Sets the supervisor approval
/// and moves the record to `SupervisorApproved` or `SupervisorRejected`.
///
/// # Errors
///
/// - [`EngineError::ConcurrentModification`] when the record's state no
///   longer matches `expected`.
/// - [`EngineError::InvalidTransition`] when the record is not pending.
pub fn submit_supervisor_decision(
    record: &mut DailyRecord,
    expected: ApprovalState,
    decision: Approval,
) -> EngineResult<()> {
    check_expected_state(record, expected)?;
    if record.state != ApprovalState::Pending {
        return Err(invalid_transition(record, "supervisor_decision"));
    }

    record.state = if decision.approved {
        ApprovalState::SupervisorApproved
    } else {
        ApprovalState::SupervisorRejected
    };
    record.supervisor_approval = Some(decision);
    Ok(())
}

/// Submits the human-resources decision on a supervisor-approved record.
///
/// Legal only from [`ApprovalState::SupervisorApproved`]; submitting from
/// any other state, including an attempt to skip the supervisor stage, fails
/// with [`EngineError::InvalidTransition`]. Sets the RRHH approval and moves
/// the record to `RrhhApproved` or `RrhhRejected`.
///
/// # Errors
///
/// - [`EngineError::ConcurrentModification`] when the record's state no
///   longer matches `expected`.
/// - [`EngineError::InvalidTransition`] when the record is not
///   supervisor-approved.
pub fn submit_rrhh_decision(
    record: &mut DailyRecord,
    expected: ApprovalState,
    decision: Approval,
) -> EngineResult<()> {
    check_expected_state(record, expected)?;
    if record.state != ApprovalState::SupervisorApproved {
        return Err(invalid_transition(record, "rrhh_decision"));
    }

    record.state = if decision.approved {
        ApprovalState::RrhhApproved
    } else {
        ApprovalState::RrhhRejected
    };
    record.rrhh_approval = Some(decision);
    Ok(())
}

/// Re-opens a rejected record, resetting it to pending.
///
/// Clears both approval decisions. Authorization for re-opening is an
/// external policy decision; this function only enforces the state machine,
/// and the engine never resets a record on its own.
///
/// # Errors
///
/// - [`EngineError::ConcurrentModification`] when the record's state no
///   longer matches `expected`.
/// - [`EngineError::InvalidTransition`] when the record is not in a
///   rejection state.
pub fn reopen(record: &mut DailyRecord, expected: ApprovalState) -> EngineResult<()> {
    check_expected_state(record, expected)?;
    if !record.state.is_rejected() {
        return Err(invalid_transition(record, "reopen"));
    }

    record.supervisor_approval = None;
    record.rrhh_approval = None;
    record.state = ApprovalState::Pending;
    Ok(())
}
