//! Handlers for the `/videos` resource.
//!
//! Playback lookups go through the access gate; creation and listing require
//! an authenticated owner.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use reclip_core::error::{AccessError, CoreError};
use reclip_core::geo::GeoPoint;
use reclip_core::sharing;
use reclip_core::submission::VideoSubmission;
use reclip_db::models::video::{CreatePinnedVideo, OwnedVideo};
use reclip_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Query string for a playback lookup.
///
/// Coordinates arrive as strings so a malformed number produces a JSON error
/// instead of axum's plain-text query rejection.
#[derive(Debug, Deserialize)]
pub struct AccessParams {
    pub id: Option<String>,
    pub pin: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_coordinate(name: &str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("{name} must be a number")))
}

/// Build the claimant position, rejecting absent, malformed, or out-of-range values.
fn claimant_position(params: &AccessParams) -> AppResult<GeoPoint> {
    let (Some(lat), Some(lon)) = (params.latitude.as_deref(), params.longitude.as_deref()) else {
        return Err(AccessError::MissingParameters.into());
    };
    let point = GeoPoint::new(
        parse_coordinate("latitude", lat)?,
        parse_coordinate("longitude", lon)?,
    );
    point.validate()?;
    Ok(point)
}

// ---------------------------------------------------------------------------
// GET /videos?id=&pin=&latitude=&longitude=
// ---------------------------------------------------------------------------

/// Resolve a playable video for a claimant standing at the given position.
///
/// Missing id or PIN is reported before anything else, then the position is
/// checked, then the gate runs lookup, PIN, and geofence in that order.
pub async fn resolve_video(
    State(state): State<AppState>,
    Query(params): Query<AccessParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.id.as_deref().unwrap_or_default();
    let pin = params.pin.as_deref().unwrap_or_default();
    if id.is_empty() || pin.is_empty() {
        return Err(AccessError::MissingParameters.into());
    }

    let position = claimant_position(&params)?;
    let video = state.gate.resolve_access(id, pin, position).await?;

    tracing::info!(video_id = %video.video_id, "Playback granted");
    Ok(response::ok(video))
}

// ---------------------------------------------------------------------------
// POST /videos
// ---------------------------------------------------------------------------

/// Pin an uploaded video to a location behind a PIN.
///
/// Creates the location, a playlist owned by the caller, and the video in
/// one transaction. Bodies that fail to deserialize are reported in the same
/// `{error, code}` shape as field validation failures.
pub async fn create_video(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<VideoSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate()?;

    let qr_code = sharing::watch_url(&state.config.public_base_url, &input.video_id);
    let video = VideoRepo::create_pinned(
        &state.pool,
        &CreatePinnedVideo {
            video_id: input.video_id,
            title: input.title,
            address: input.address,
            latitude: input.latitude,
            longitude: input.longitude,
            url: input.video_url,
            qr_code,
            pin: input.pin,
            owner_id: auth.principal_id.clone(),
        },
    )
    .await?;

    tracing::info!(
        video_id = %video.id,
        playlist_id = video.playlist_id,
        owner = %auth.principal_id,
        "Video created"
    );
    Ok(response::created(video))
}

// ---------------------------------------------------------------------------
// GET /videos/mine
// ---------------------------------------------------------------------------

/// List the caller's own videos, newest first, including their PINs.
pub async fn list_my_videos(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = VideoRepo::list_for_owner(&state.pool, &auth.principal_id).await?;
    let items: Vec<OwnedVideo> = rows.into_iter().map(OwnedVideo::from).collect();
    tracing::debug!(count = items.len(), owner = %auth.principal_id, "Listed owned videos");
    Ok(response::ok(items))
}

// ---------------------------------------------------------------------------
// GET /videos/mine/{id}
// ---------------------------------------------------------------------------

/// Fetch one of the caller's videos. Another owner's video is reported as
/// not found rather than forbidden so ids cannot be enumerated.
pub async fn get_my_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = VideoRepo::find_with_location(&state.pool, &id)
        .await?
        .filter(|row| row.owner_id == auth.principal_id)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Video",
                id: id.clone(),
            })
        })?;
    Ok(response::ok(OwnedVideo::from(row)))
}
