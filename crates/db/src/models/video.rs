//! Video entity model, joined views, and DTOs.

use reclip_core::access::VideoRecord;
use reclip_core::geo::GeoPoint;
use reclip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    pub qr_code: String,
    pub playlist_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a video row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub qr_code: String,
    pub playlist_id: DbId,
}

/// Everything the create flow writes in one transaction.
#[derive(Debug, Clone)]
pub struct CreatePinnedVideo {
    pub video_id: String,
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub qr_code: String,
    pub pin: String,
    pub owner_id: String,
}

/// A video joined with its playlist and location (`videos ⋈ playlists ⋈ locations`).
#[derive(Debug, Clone, FromRow)]
pub struct VideoWithLocation {
    pub id: String,
    pub title: String,
    pub url: String,
    pub qr_code: String,
    pub playlist_id: DbId,
    pub playlist_title: String,
    pub pin: String,
    pub owner_id: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Timestamp,
}

impl From<VideoWithLocation> for VideoRecord {
    fn from(row: VideoWithLocation) -> Self {
        VideoRecord {
            video_id: row.id,
            title: row.title,
            url: row.url,
            playlist_title: row.playlist_title,
            pin: row.pin,
            location: GeoPoint::new(row.latitude, row.longitude),
        }
    }
}

/// Owner-facing listing entry. Includes the PIN so the owner can share it.
#[derive(Debug, Clone, Serialize)]
pub struct OwnedVideo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub qr_code: String,
    pub playlist_title: String,
    pub pin: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Timestamp,
}

impl From<VideoWithLocation> for OwnedVideo {
    fn from(row: VideoWithLocation) -> Self {
        OwnedVideo {
            id: row.id,
            title: row.title,
            url: row.url,
            qr_code: row.qr_code,
            playlist_title: row.playlist_title,
            pin: row.pin,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: row.created_at,
        }
    }
}
