//! Playlist entity model and DTOs.

use reclip_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `playlists` table.
///
/// Deliberately not `Serialize`: the PIN must only leave the server through
/// an explicit owner-facing view.
#[derive(Debug, Clone, FromRow)]
pub struct Playlist {
    pub id: DbId,
    pub title: String,
    pub pin: String,
    pub owner_id: String,
    pub location_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    pub title: String,
    pub pin: String,
    pub owner_id: String,
    pub location_id: DbId,
}
