//! Response envelope types for write endpoints.
//!
//! Read endpoints return their aggregation views unwrapped; write endpoints
//! answer with a `{ "message": ..., "data": ... }` envelope.

use serde::Serialize;

/// `{ "message": ..., "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
