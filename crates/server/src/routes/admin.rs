//! Admin API handlers.
//!
//! Each handler maps 1:1 to one [`crate::store::DataStore`] operation and
//! translates its result into HTTP: `None`/`false` becomes 404, a failed
//! backup becomes 500, invalid record bodies become 400.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::models::{EnrichedOrder, OrderRecord, ProductRecord, Stats, UserRecord};
use crate::state::AppState;

fn invalid_record(e: &serde_json::Error) -> AppError {
    AppError::BadRequest(format!("invalid record: {e}"))
}

/// JSON `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

// =============================================================================
// Stats
// =============================================================================

/// `GET /api/admin/stats`
pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.store().get_stats().await)
}

// =============================================================================
// Users
// =============================================================================

/// `GET /api/admin/users`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserRecord>> {
    Json(state.store().list_users().await)
}

/// `POST /api/admin/users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<UserRecord>)> {
    let user = state
        .store()
        .add_user(body)
        .await
        .map_err(|e| invalid_record(&e))?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PATCH /api/admin/users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<UserRecord>> {
    state
        .store()
        .update_user(&id, &body)
        .await
        .map_err(|e| invalid_record(&e))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// `DELETE /api/admin/users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>> {
    if state.store().delete_user(&id).await {
        Ok(Json(MessageBody {
            message: "User deleted".to_string(),
        }))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}

// =============================================================================
// Orders
// =============================================================================

/// `GET /api/admin/orders`
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<EnrichedOrder>> {
    Json(state.store().list_orders().await)
}

/// `POST /api/admin/orders`
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<OrderRecord>)> {
    let order = state
        .store()
        .add_order(body)
        .await
        .map_err(|e| invalid_record(&e))?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Body for `PATCH /api/admin/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// `PATCH /api/admin/orders/{id}/status`
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<OrderRecord>> {
    state
        .store()
        .update_order_status(&id, &body.status)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
}

// =============================================================================
// Products
// =============================================================================

/// `GET /api/admin/products`
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ProductRecord>> {
    Json(state.store().list_products().await)
}

/// `POST /api/admin/products`
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<ProductRecord>)> {
    let product = state
        .store()
        .add_product(body)
        .await
        .map_err(|e| invalid_record(&e))?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PATCH /api/admin/products/{id}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<ProductRecord>> {
    state
        .store()
        .update_product(&id, &body)
        .await
        .map_err(|e| invalid_record(&e))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

// =============================================================================
// Backup
// =============================================================================

/// Response body for `POST /api/admin/backup`.
#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub message: String,
    pub backup: String,
}

/// `POST /api/admin/backup`
pub async fn backup(State(state): State<AppState>) -> Result<Json<BackupResponse>> {
    state.store().backup().await.map_or_else(
        || Err(AppError::Storage("backup save failed".to_string())),
        |name| {
            Ok(Json(BackupResponse {
                message: "Backup created".to_string(),
                backup: name,
            }))
        },
    )
}
