//! Two-stage approval workflow for daily records.
//!
//! A record moves `Pending -> SupervisorApproved -> RrhhApproved`, with
//! `SupervisorRejected` and `RrhhRejected` as terminal failures reachable
//! from `Pending` and `SupervisorApproved` respectively. Transitions are
//! guarded functions over [`crate::models::DailyRecord`]; illegal sequences
//! (human resources before the supervisor) are rejected, never silently
//! allowed, and every mutation performs a compare-and-swap check against the
//! caller's expected pre-state.

mod transitions;

pub use transitions::{reopen, submit_rrhh_decision, submit_supervisor_decision};
