//! Repository for the `locations` table.

use reclip_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::location::{CreateLocation, Location};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, address, latitude, longitude, created_at";

/// Locations are insert-only; there is no update or delete path.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::create_in(&mut conn, input).await
    }

    /// Insert a new location on an existing connection or transaction.
    pub async fn create_in(
        conn: &mut PgConnection,
        input: &CreateLocation,
    ) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (address, latitude, longitude)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(conn)
            .await
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
