//! Location entity model and DTOs.

use reclip_core::geo::GeoPoint;
use reclip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Timestamp,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// DTO for creating a location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
