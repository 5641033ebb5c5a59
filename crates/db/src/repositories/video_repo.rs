//! Repository for the `videos` table and its joined views.

use sqlx::{PgConnection, PgPool};

use crate::models::location::CreateLocation;
use crate::models::playlist::CreatePlaylist;
use crate::models::video::{CreatePinnedVideo, CreateVideo, Video, VideoWithLocation};
use crate::repositories::{LocationRepo, PlaylistRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, url, qr_code, playlist_id, created_at";

/// Select list for `videos v ⋈ playlists p ⋈ locations l`.
const JOINED_COLUMNS: &str = "v.id, v.title, v.url, v.qr_code, v.playlist_id, \
     p.title AS playlist_title, p.pin, p.owner_id, \
     l.address, l.latitude, l.longitude, v.created_at";

const JOINED_FROM: &str = "videos v \
     JOIN playlists p ON p.id = v.playlist_id \
     JOIN locations l ON l.id = p.location_id";

pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video row on an existing connection or transaction.
    pub async fn create_in(
        conn: &mut PgConnection,
        input: &CreateVideo,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (id, title, url, qr_code, playlist_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.qr_code)
            .bind(input.playlist_id)
            .fetch_one(conn)
            .await
    }

    /// Create a location, a playlist owned by `input.owner_id`, and the video,
    /// all in one transaction. Nothing is left behind if any insert fails.
    pub async fn create_pinned(
        pool: &PgPool,
        input: &CreatePinnedVideo,
    ) -> Result<Video, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let location = LocationRepo::create_in(
            &mut tx,
            &CreateLocation {
                address: input.address.clone(),
                latitude: input.latitude,
                longitude: input.longitude,
            },
        )
        .await?;

        let playlist = PlaylistRepo::create_in(
            &mut tx,
            &CreatePlaylist {
                title: input.title.clone(),
                pin: input.pin.clone(),
                owner_id: input.owner_id.clone(),
                location_id: location.id,
            },
        )
        .await?;

        let video = Self::create_in(
            &mut tx,
            &CreateVideo {
                id: input.video_id.clone(),
                title: input.title.clone(),
                url: input.url.clone(),
                qr_code: input.qr_code.clone(),
                playlist_id: playlist.id,
            },
        )
        .await?;

        tx.commit().await?;
        Ok(video)
    }

    /// Find a video joined with its playlist and location.
    pub async fn find_with_location(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<VideoWithLocation>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} WHERE v.id = $1");
        sqlx::query_as::<_, VideoWithLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's videos, newest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Vec<VideoWithLocation>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} \
             WHERE p.owner_id = $1 \
             ORDER BY v.created_at DESC, v.id"
        );
        sqlx::query_as::<_, VideoWithLocation>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }
}
