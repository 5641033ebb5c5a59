//! Record-store adapter for the access gate.

use async_trait::async_trait;
use reclip_core::access::{VideoLookup, VideoRecord};
use reclip_core::error::CoreError;

use crate::repositories::VideoRepo;
use crate::DbPool;

/// [`VideoLookup`] backed by PostgreSQL.
///
/// Holds a clone of the pool handle; the pool itself is created and closed
/// by the process entry point.
#[derive(Debug, Clone)]
pub struct PgVideoStore {
    pool: DbPool,
}

impl PgVideoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoLookup for PgVideoStore {
    async fn find_video_with_location(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoRecord>, CoreError> {
        let row = VideoRepo::find_with_location(&self.pool, video_id)
            .await
            .map_err(|e| CoreError::Internal(format!("video lookup failed: {e}")))?;
        Ok(row.map(VideoRecord::from))
    }
}
