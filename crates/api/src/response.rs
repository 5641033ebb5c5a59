//! Success envelope for API handlers.
//!
//! Every successful body is `{ "data": ... }`; failures go through
//! [`crate::error::AppError`] and carry `{ "error", "code" }` instead.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `200 OK` with `data` in the envelope.
pub fn ok<T: Serialize>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data })
}

/// `201 Created` with `data` in the envelope.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<DataResponse<T>>) {
    (StatusCode::CREATED, Json(DataResponse { data }))
}
