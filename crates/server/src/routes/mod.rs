//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Admin (JSON)
//! GET    /api/admin/stats               - Aggregate counts and revenue
//! GET    /api/admin/users               - List users
//! POST   /api/admin/users               - Create user
//! PATCH  /api/admin/users/{id}          - Patch user fields
//! DELETE /api/admin/users/{id}          - Delete user
//! GET    /api/admin/orders              - List orders (joined with users)
//! POST   /api/admin/orders              - Create order
//! PATCH  /api/admin/orders/{id}/status  - Update order status
//! GET    /api/admin/products            - List products
//! POST   /api/admin/products            - Create product
//! PATCH  /api/admin/products/{id}       - Patch product fields
//! POST   /api/admin/backup              - Snapshot all collections
//!
//! # Auth (stubbed)
//! POST /api/auth/register               - 501
//! POST /api/auth/login                  - 501
//! POST /api/auth/forgot-password        - 501
//! GET  /api/auth/me                     - 401
//! POST /api/auth/logout                 - 401
//! ```

pub mod admin;
pub mod auth;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the admin API router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin::get_stats))
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route(
            "/users/{id}",
            patch(admin::update_user).delete(admin::delete_user),
        )
        .route("/orders", get(admin::list_orders).post(admin::create_order))
        .route("/orders/{id}/status", patch(admin::update_order_status))
        .route(
            "/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route("/products/{id}", patch(admin::update_product))
        .route("/backup", post(admin::backup))
}

/// Create the stubbed auth router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::not_implemented))
        .route("/login", post(auth::not_implemented))
        .route("/forgot-password", post(auth::not_implemented))
        .route("/me", get(auth::unauthenticated))
        .route("/logout", post(auth::unauthenticated))
}

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/admin", admin_routes())
        .nest("/api/auth", auth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> StatusCode {
    StatusCode::OK
}
