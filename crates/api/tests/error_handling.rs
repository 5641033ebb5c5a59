//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use reclip_api::error::AppError;
use reclip_core::error::{AccessError, CoreError};
use reclip_storage::StorageError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Core errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Video",
        id: "v1".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Video with id v1 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("PIN must be exactly 6 digits".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "PIN must be exactly 6 digits");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn internal_core_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("connection refused on 10.0.0.5".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Access gate outcomes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_parameters_returns_400() {
    let (status, json) = error_to_response(AccessError::MissingParameters.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_PARAMETERS");
    assert_eq!(json["error"], "Missing required parameters");
}

#[tokio::test]
async fn unknown_video_returns_404() {
    let (status, json) = error_to_response(AccessError::NotFound.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Video not found");
}

#[tokio::test]
async fn invalid_pin_returns_401() {
    let (status, json) = error_to_response(AccessError::InvalidPin.into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "INVALID_PIN");
    assert_eq!(json["error"], "Incorrect PIN");
}

#[tokio::test]
async fn too_far_returns_403() {
    let (status, json) = error_to_response(AccessError::TooFar.into()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "TOO_FAR");
}

#[tokio::test]
async fn access_infrastructure_failure_is_sanitized() {
    let err = AccessError::Infrastructure("pool timed out after 30s".into());

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Storage and HTTP-specific errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_error_is_sanitized() {
    let err = StorageError::Backend("AccessDenied: bucket reclip-prod".into());

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("reclip-prod"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::BadRequest("latitude must be a number".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "latitude must be a number");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn object_key_collision_returns_409_without_key() {
    let err = StorageError::AlreadyExists("videos/0f3c.webm".into());

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert!(!json["error"].as_str().unwrap().contains("0f3c"));
}
