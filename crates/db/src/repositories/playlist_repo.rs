//! Repository for the `playlists` table.

use reclip_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::playlist::{CreatePlaylist, Playlist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, pin, owner_id, location_id, created_at";

pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist on an existing connection or transaction.
    pub async fn create_in(
        conn: &mut PgConnection,
        input: &CreatePlaylist,
    ) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (title, pin, owner_id, location_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.title)
            .bind(&input.pin)
            .bind(&input.owner_id)
            .bind(input.location_id)
            .fetch_one(conn)
            .await
    }

    /// Find a playlist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
