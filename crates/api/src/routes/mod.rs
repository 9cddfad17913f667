pub mod applicants;
pub mod applications;
pub mod backup;
pub mod colleges;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /applications                 submit (POST)
///
/// /applicants                   all applications grouped by applicant (GET)
/// /applicants/{name}            one applicant's applications (GET)
///
/// /colleges                     all applications grouped by college (GET)
/// /colleges/{name}              one college's applicants (GET)
///
/// /backup                       write college view to disk (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/applications", applications::router())
        .nest("/applicants", applicants::router())
        .nest("/colleges", colleges::router())
        .nest("/backup", backup::router())
}
