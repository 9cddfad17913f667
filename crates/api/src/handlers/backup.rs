//! Handler for writing the college view to disk.

use std::path::PathBuf;

use admissions_core::aggregation::{Aggregation, AggregationMode, Groups};
use admissions_core::backup::write_backup;
use admissions_core::views;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BackupInfo {
    pub path: PathBuf,
    pub colleges: usize,
}

/// POST /api/v1/backup
///
/// Serializes the all-by-college view to the configured backup path. Write
/// failures are logged and surface as a generic 500.
pub async fn create(
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse<BackupInfo>>> {
    let view = views::load(state.store.as_ref(), &AggregationMode::AllByCollege)
        .await?
        .unwrap_or_else(|| Aggregation::ByCollege(Groups::new()));

    let path = state.config.backup_path.clone();
    write_backup(&path, &view).await?;

    Ok(Json(MessageResponse {
        message: "Backup successful",
        data: BackupInfo {
            path,
            colleges: view.group_count(),
        },
    }))
}
