//! Handlers for the `/applications` resource.

use admissions_core::application::{ApplicationRecord, NewApplication};
use admissions_core::submission::submit_application;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/applications
///
/// Parses and validates the payload, rejects a repeat (name, college) pair with 409 and
/// stores the application otherwise.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse<ApplicationRecord>>)> {
    let Json(body) = payload?;
    let input = NewApplication::from_value(body)?;
    let record = submit_application(state.store.as_ref(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Application submitted successfully",
            data: record,
        }),
    ))
}
