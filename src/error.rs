//! Error types for the Timesheet Interpretation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during timesheet interpretation
//! and approval processing.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ApprovalState;

/// The main error type for the Timesheet Interpretation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// carries enough context (employee, date, attempted transition) for an
/// operator to diagnose the failure without inspecting engine internals.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::UnknownPolicy {
///     code: "H9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift policy: H9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy definition failed validation at load time.
    #[error("Invalid shift policy '{code}': {message}")]
    InvalidPolicy {
        /// The code of the invalid policy.
        code: String,
        /// A description of what made the policy invalid.
        message: String,
    },

    /// Policy code was not found in the catalog.
    #[error("Unknown shift policy: {code}")]
    UnknownPolicy {
        /// The policy code that was not found.
        code: String,
    },

    /// Clock events were inconsistent (clock-out before clock-in).
    #[error("Invalid clock events for employee '{employee_id}' on {date}: {message}")]
    InvalidClockEvents {
        /// The employee the events belong to.
        employee_id: String,
        /// The date of the events.
        date: NaiveDate,
        /// A description of the inconsistency.
        message: String,
    },

    /// An approval operation was attempted on a record whose state does not
    /// permit it (wrong order, or a terminal state).
    #[error(
        "Invalid transition '{attempted}' for employee '{employee_id}' on {date}: record is {state}"
    )]
    InvalidTransition {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date of the record.
        date: NaiveDate,
        /// The operation that was attempted.
        attempted: String,
        /// The record's current approval state.
        state: ApprovalState,
    },

    /// The record's state no longer matches the expected pre-state supplied
    /// by the caller (a concurrent writer got there first).
    #[error(
        "Concurrent modification of record for employee '{employee_id}' on {date}: expected {expected}, observed {observed}"
    )]
    ConcurrentModification {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date of the record.
        date: NaiveDate,
        /// The pre-state the caller expected.
        expected: ApprovalState,
        /// The state actually observed on the record.
        observed: ApprovalState,
    },

    /// No daily record exists for the requested (employee, date) key.
    #[error("No daily record for employee '{employee_id}' on {date}")]
    RecordNotFound {
        /// The employee the record was requested for.
        employee_id: String,
        /// The date the record was requested for.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
