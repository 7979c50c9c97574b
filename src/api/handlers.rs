//! HTTP request handlers for the Timesheet Interpretation Engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler attaches a correlation ID, converts the request DTO, calls the
//! core, and maps engine errors to HTTP statuses.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_daily_hours;
use crate::error::EngineError;
use crate::models::Approval;
use crate::workflow;

use super::request::{ComputeRequest, DecisionRequest, ReopenRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/records", post(compute_handler))
        .route("/records/:employee_id/:date", get(get_record_handler))
        .route(
            "/records/:employee_id/:date/supervisor-decision",
            post(supervisor_decision_handler),
        )
        .route(
            "/records/:employee_id/:date/rrhh-decision",
            post(rrhh_decision_handler),
        )
        .route("/records/:employee_id/:date/reopen", post(reopen_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into the API error shape.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for `POST /records`: compute or recompute a daily record.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        policy_code = %request.policy_code,
        "Processing compute request"
    );

    let result = async {
        let policy = state.catalog().resolve(&request.policy_code)?;
        let events = request.clock_events();
        let computation = compute_daily_hours(
            policy,
            &request.employee_id,
            request.date,
            request.is_holiday,
            events.as_ref(),
        )?;
        state
            .store()
            .put_computation(
                &request.employee_id,
                request.date,
                &request.policy_code,
                computation,
            )
            .await
    }
    .await;

    match result {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                normal_hours = %record.normal_hours,
                overtime_hours = %record.overtime_hours,
                "Computation stored"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Compute request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /records/{employee_id}/{date}`.
async fn get_record_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
) -> Response {
    match state.store().get(&employee_id, date).await {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => ApiErrorResponse::from(EngineError::RecordNotFound { employee_id, date })
            .into_response(),
    }
}

/// Handler for `POST /records/{employee_id}/{date}/supervisor-decision`.
async fn supervisor_decision_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        approved = request.approved,
        "Processing supervisor decision"
    );

    let expected = request.expected_state;
    let approval: Approval = request.into();
    let result = state
        .store()
        .update(&employee_id, date, |record| {
            workflow::submit_supervisor_decision(record, expected, approval)
        })
        .await;

    decision_response(correlation_id, result)
}

/// Handler for `POST /records/{employee_id}/{date}/rrhh-decision`.
async fn rrhh_decision_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        approved = request.approved,
        "Processing RRHH decision"
    );

    let expected = request.expected_state;
    let approval: Approval = request.into();
    let result = state
        .store()
        .update(&employee_id, date, |record| {
            workflow::submit_rrhh_decision(record, expected, approval)
        })
        .await;

    decision_response(correlation_id, result)
}

/// Handler for `POST /records/{employee_id}/{date}/reopen`.
async fn reopen_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
    payload: Result<Json<ReopenRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        "Processing reopen request"
    );

    let result = state
        .store()
        .update(&employee_id, date, |record| {
            workflow::reopen(record, request.expected_state)
        })
        .await;

    decision_response(correlation_id, result)
}

/// Shared tail of the mutation handlers.
fn decision_response(
    correlation_id: Uuid,
    result: crate::error::EngineResult<crate::models::DailyRecord>,
) -> Response {
    match result {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                state = %record.state,
                "Record updated"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
