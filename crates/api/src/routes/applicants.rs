//! Route definitions for applicant-centric views.
//!
//! ```text
//! /applicants                   all, grouped by applicant (GET)
//! /applicants/{name}            single applicant (GET)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::applicants;
use crate::state::AppState;

/// Applicant view routes, nested at `/applicants`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(applicants::list))
        .route("/{name}", get(applicants::get_by_name))
}
