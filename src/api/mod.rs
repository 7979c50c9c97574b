//! HTTP API module for the Timesheet Interpretation Engine.
//!
//! This module provides the REST endpoints for computing daily records and
//! driving them through the approval workflow. It is a thin serialization
//! layer over the core operations; the in-memory record store stands in for
//! the deployment persistence layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, DecisionRequest, ReopenRequest};
pub use response::ApiError;
pub use state::{AppState, RecordStore};
