//! Route definitions for blob uploads, mounted at `/uploads`.
//!
//! ```text
//! POST /      upload_video
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload_video))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
