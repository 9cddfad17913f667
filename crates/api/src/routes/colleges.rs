//! Route definitions for college-centric views.
//!
//! ```text
//! /colleges                     all, grouped by college (GET)
//! /colleges/{name}              single college (GET)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::colleges;
use crate::state::AppState;

/// College view routes, nested at `/colleges`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(colleges::list))
        .route("/{name}", get(colleges::get_by_name))
}
