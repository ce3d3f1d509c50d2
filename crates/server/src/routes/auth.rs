//! Stubbed authentication handlers.
//!
//! Authentication is out of scope for this service; the endpoints exist so
//! frontends get a well-formed answer instead of a connection error. The
//! admin API does not depend on these for its own correctness.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Stub error body: `{ "status": "error", "message": ... }`.
#[derive(Debug, Serialize)]
pub struct StubBody {
    pub status: &'static str,
    pub message: &'static str,
}

/// Handler for auth operations that are not implemented.
pub async fn not_implemented() -> (StatusCode, Json<StubBody>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(StubBody {
            status: "error",
            message: "Authentication is not implemented yet.",
        }),
    )
}

/// Handler for endpoints that would require a session.
pub async fn unauthenticated() -> (StatusCode, Json<StubBody>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(StubBody {
            status: "error",
            message: "Authentication is not implemented yet. Please login.",
        }),
    )
}
