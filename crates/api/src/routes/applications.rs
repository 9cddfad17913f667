//! Route definitions for application submission.
//!
//! ```text
//! /applications                 submit (POST)
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Submission routes, nested at `/applications`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(applications::submit))
}
