//! Handler for uploading recorded video blobs to the object store.
//!
//! The recorder uploads first, then submits the returned URL with the rest of
//! the video metadata to `POST /videos`. The blob lands under a random key
//! minted by the store, so its URL reveals nothing about the video id that
//! ends up in the share link.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use reclip_storage::new_video_object_key;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// Multipart field carrying the blob.
const FILE_FIELD: &str = "file";

/// Fallback when the browser sends no content type.
const DEFAULT_CONTENT_TYPE: &str = "video/webm";

/// Result of a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadedVideo {
    /// Fresh id the recorder may use for the `POST /videos` call.
    pub video_id: String,
    pub url: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// POST /uploads
///
/// Accepts `multipart/form-data` with a `file` part. Other parts are ignored;
/// in particular a caller cannot choose the object key.
pub async fn upload_video(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await?;
        file = Some((bytes.to_vec(), content_type));
    }

    let (bytes, content_type) =
        file.ok_or_else(|| AppError::BadRequest(format!("Missing '{FILE_FIELD}' field")))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let key = new_video_object_key(&content_type);
    let stored = state.object_store.put(&key, bytes, &content_type).await?;
    let video_id = Uuid::new_v4().to_string();

    tracing::info!(
        video_id = %video_id,
        key = %stored.key,
        size_bytes = stored.size_bytes,
        backend = state.object_store.backend_name(),
        owner = %auth.principal_id,
        "Video uploaded"
    );

    Ok(response::created(UploadedVideo {
        video_id,
        url: stored.url,
        sha256: stored.sha256,
        size_bytes: stored.size_bytes,
    }))
}
