//! Handlers for the `/applicants` views.

use admissions_core::aggregation::{Aggregation, AggregationMode, Groups};
use admissions_core::error::CoreError;
use admissions_core::views;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/applicants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Aggregation>> {
    let view = views::load(state.store.as_ref(), &AggregationMode::AllByApplicant)
        .await?
        .unwrap_or_else(|| Aggregation::ByApplicant(Groups::new()));
    Ok(Json(view))
}

/// GET /api/v1/applicants/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Aggregation>> {
    let view = views::load(
        state.store.as_ref(),
        &AggregationMode::Applicant(name.clone()),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "applicant",
        key: name,
    }))?;
    Ok(Json(view))
}
