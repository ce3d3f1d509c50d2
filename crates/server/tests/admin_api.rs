//! HTTP-level tests for the admin API.
//!
//! Drives the real router in-process against a temp-dir-backed local
//! store; no network involved.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use rxshops_server::config::ServerConfig;
use rxshops_server::routes;
use rxshops_server::state::AppState;
use rxshops_server::storage::BlobStorage;
use rxshops_server::store::DataStore;

async fn test_app(dir: &tempfile::TempDir) -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        data_dir: dir.path().to_path_buf(),
        blob: None,
        sentry_dsn: None,
        sentry_environment: None,
    };
    let storage = BlobStorage::from_config(&config);
    let store = DataStore::open(storage).await;
    routes::router(AppState::new(config, store))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn stats_reports_seeded_totals() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(&app, "GET", "/api/admin/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalUsers"], 3);
    assert_eq!(body["totalOrders"], 2);
    assert_eq!(body["totalRevenue"], "41498");
    assert_eq!(body["lowStock"], 5);
}

#[tokio::test]
async fn user_crud_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/admin/users",
        Some(json!({ "name": "New User", "email": "new@example.com", "role": "user" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["_id"].as_str().unwrap().to_string();
    assert_eq!(created["isActive"], true);

    let (status, users) = send(&app, "GET", "/api/admin/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 4);

    let (status, patched) = send(
        &app,
        "PATCH",
        &format!("/api/admin/users/{id}"),
        Some(json!({ "name": "Renamed", "phone": "+1 555" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "Renamed");
    assert_eq!(patched["phone"], "+1 555");
    assert_eq!(patched["email"], "new@example.com");

    let (status, body) = send(&app, "DELETE", &format!("/api/admin/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, body) = send(&app, "DELETE", &format!("/api/admin/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn patching_missing_user_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/admin/users/nope",
        Some(json!({ "name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn creating_user_with_bad_shape_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    // Missing required fields (name/email/role)
    let (status, body) = send(&app, "POST", "/api/admin/users", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("invalid record"));
}

#[tokio::test]
async fn orders_are_enriched_with_users() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, orders) = send(&app, "GET", "/api/admin/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let o1 = orders
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["_id"] == "o1")
        .unwrap();
    assert_eq!(o1["user"]["name"], "Rahul Sharma");
}

#[tokio::test]
async fn order_status_patch_and_miss() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, updated) = send(
        &app,
        "PATCH",
        "/api/admin/orders/o1/status",
        Some(json!({ "status": "Delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Delivered");
    assert!(updated["statusUpdatedAt"].is_string());

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/admin/orders/missing/status",
        Some(json!({ "status": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn create_order_defaults_status() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, order) = send(
        &app,
        "POST",
        "/api/admin/orders",
        Some(json!({ "userId": "u2", "total": "99.99", "currency": "USD", "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "Processing");
}

#[tokio::test]
async fn product_create_and_patch() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, product) = send(
        &app,
        "POST",
        "/api/admin/products",
        Some(json!({ "name": "Widget", "price": "9.99" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = product["_id"].as_str().unwrap().to_string();

    let (status, patched) = send(
        &app,
        "PATCH",
        &format!("/api/admin/products/{id}"),
        Some(json!({ "price": "7.99" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["price"], "7.99");
    assert_eq!(patched["name"], "Widget");
}

#[tokio::test]
async fn backup_snapshots_collections_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(&app, "POST", "/api/admin/backup", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Backup created");

    let name = body["backup"].as_str().unwrap();
    assert!(name.starts_with("backup-"));

    let snapshot: Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(format!("{name}.json"))).unwrap(),
    )
    .unwrap();
    assert_eq!(snapshot["users"].as_array().unwrap().len(), 3);
    assert_eq!(snapshot["orders"].as_array().unwrap().len(), 2);
    assert!(snapshot["timestamp"].is_string());
}

#[tokio::test]
async fn auth_endpoints_are_stubbed() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(&app, "POST", "/api/auth/login", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["status"], "error");

    let (status, _) = send(&app, "GET", "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
