pub mod health;
pub mod upload;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                  resolve (GET, public), create (POST, auth)
/// /videos/mine             list own videos (auth)
/// /videos/mine/{id}        get own video (auth)
///
/// /uploads                 upload video blob (POST, auth, multipart)
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/videos", video::router())
        .nest("/uploads", upload::router(max_upload_bytes))
}
