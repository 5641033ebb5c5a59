//! Integration tests for `/health` and the cross-cutting layer stack.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database_and_object_store(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], true);
    assert_eq!(json["object_store"], "local");
    assert_eq!(json["geofence_radius_m"], 20.0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_is_degraded_when_database_is_unreachable() {
    // Nothing listens on port 1, so every acquire fails fast.
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("postgres://reclip@127.0.0.1:1/reclip")
        .unwrap();

    let app = common::build_test_app(pool).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_request_id_is_echoed(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "recorder-7f3a")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "recorder-7f3a");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_request_id_is_minted(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/videos?id=v1").await;

    // The id is attached even to error responses.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let minted = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok(), "not a uuid: {minted}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn watch_page_origin_may_resolve_videos(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/videos?id=v1&pin=123456&latitude=40&longitude=-74")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("GET"), "allow-methods: {methods}");
    assert!(!methods.contains("DELETE"), "allow-methods: {methods}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_origin_gets_no_cors_grant(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/videos")
        .header("Origin", "https://elsewhere.example")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
