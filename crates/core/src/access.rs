//! Geofenced, PIN-gated access to a stored video.
//!
//! [`AccessGate::resolve_access`] runs a fixed sequence of checks and stops at
//! the first failure:
//!
//! 1. presence of the video id and PIN
//! 2. record lookup (video joined with its playlist and location)
//! 3. PIN comparison against the parent playlist
//! 4. distance between the claimant and the pinned location
//!
//! The gate holds no mutable state. Every call re-reads the store and
//! re-validates both checks; nothing is cached and no ticket is issued.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AccessError, CoreError};
use crate::geo::{self, GeoPoint};
use crate::pin;

/// Radius around a location within which playback is permitted.
pub const GEOFENCE_RADIUS_METERS: f64 = 20.0;

/// A video joined with the parts of its playlist and location the gate needs.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub playlist_title: String,
    /// PIN of the parent playlist.
    pub pin: String,
    pub location: GeoPoint,
}

/// The PIN-free view returned once every check has passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayableVideo {
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub playlist_title: String,
}

impl From<VideoRecord> for PlayableVideo {
    fn from(record: VideoRecord) -> Self {
        Self {
            video_id: record.video_id,
            title: record.title,
            url: record.url,
            playlist_title: record.playlist_title,
        }
    }
}

/// Read access to stored videos, implemented by the record store.
#[async_trait]
pub trait VideoLookup: Send + Sync {
    /// Fetch a video with its parent playlist and location, or `None` if no
    /// video has this id.
    async fn find_video_with_location(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoRecord>, CoreError>;
}

/// Access-control decision point for video playback.
#[derive(Debug, Clone)]
pub struct AccessGate<S> {
    store: S,
    radius_m: f64,
}

impl<S: VideoLookup> AccessGate<S> {
    /// Gate with the standard 20 m geofence.
    pub fn new(store: S) -> Self {
        Self::with_radius(store, GEOFENCE_RADIUS_METERS)
    }

    /// Gate with a custom geofence radius in meters. Negative radii clamp to 0.
    pub fn with_radius(store: S, radius_m: f64) -> Self {
        Self {
            store,
            radius_m: radius_m.max(0.0),
        }
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decide whether a claimant at `position` holding `supplied_pin` may play
    /// `video_id`.
    ///
    /// The measured distance is logged at debug level and never returned.
    pub async fn resolve_access(
        &self,
        video_id: &str,
        supplied_pin: &str,
        position: GeoPoint,
    ) -> Result<PlayableVideo, AccessError> {
        if video_id.is_empty() || supplied_pin.is_empty() {
            return Err(AccessError::MissingParameters);
        }

        let record = self
            .store
            .find_video_with_location(video_id)
            .await?
            .ok_or(AccessError::NotFound)?;

        if !pin::pins_match(supplied_pin, &record.pin) {
            tracing::debug!(video_id, "Access denied: PIN mismatch");
            return Err(AccessError::InvalidPin);
        }

        // Boundary inclusive; a non-finite distance fails closed.
        let distance_m = geo::haversine_distance_m(position, record.location);
        if !geo::within_radius(distance_m, self.radius_m) {
            tracing::debug!(
                video_id,
                distance_m,
                radius_m = self.radius_m,
                "Access denied: outside geofence"
            );
            return Err(AccessError::TooFar);
        }

        tracing::debug!(video_id, distance_m, "Access granted");
        Ok(record.into())
    }
}
