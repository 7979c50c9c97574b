//! Timesheet Interpretation Engine
//!
//! This crate computes, for each employee and calendar day, the normal hours,
//! overtime hours, and unpaid break time worked under a named shift policy,
//! and routes the resulting daily record through a two-stage approval
//! workflow (supervisor, then human resources).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod workflow;
