use axum::routing::post;
use axum::Router;

use crate::handlers::backup;
use crate::state::AppState;

/// Backup routes, nested at `/backup`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(backup::create))
}
