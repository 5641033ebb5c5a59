use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reclip_core::error::{AccessError, CoreError};
use reclip_storage::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`AccessError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reclip_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected playback request.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// An object store failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A JSON body that is not valid JSON or does not fit the expected shape.
    #[error("JSON body rejected: {0}")]
    Json(#[from] JsonRejection),

    /// A malformed or oversized multipart body.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned for every 500 so internals never reach the client.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Access gate outcomes ---
            AppError::Access(access) => match access {
                AccessError::MissingParameters => (
                    StatusCode::BAD_REQUEST,
                    "MISSING_PARAMETERS",
                    access.to_string(),
                ),
                AccessError::NotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", access.to_string())
                }
                AccessError::InvalidPin => {
                    (StatusCode::UNAUTHORIZED, "INVALID_PIN", access.to_string())
                }
                AccessError::TooFar => (StatusCode::FORBIDDEN, "TOO_FAR", access.to_string()),
                AccessError::Infrastructure(detail) => {
                    tracing::error!(error = %detail, "Access gate infrastructure failure");
                    internal()
                }
            },

            // --- Object store ---
            AppError::Storage(StorageError::AlreadyExists(key)) => {
                tracing::warn!(key = %key, "Object key collision");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Object already exists".to_string(),
                )
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Object store failure");
                internal()
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::Json(JsonRejection::MissingJsonContentType(rejection)) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                rejection.body_text(),
            ),
            AppError::Json(rejection) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),
            AppError::Multipart(err) => {
                let status = err.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "BAD_REQUEST"
                };
                (status, code, err.body_text())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
