//! Validation for the video creation request.
//!
//! The recorder has already uploaded the blob and holds a durable URL for it;
//! this module checks the metadata it submits alongside before anything is
//! written to the record store.

use serde::Deserialize;

use crate::error::CoreError;
use crate::geo::GeoPoint;
use crate::pin;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a caller-generated video id.
pub const MAX_VIDEO_ID_LEN: usize = 128;

/// Maximum length for a video title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a street address.
pub const MAX_ADDRESS_LEN: usize = 500;

/// Maximum length for a stored object URL.
pub const MAX_URL_LEN: usize = 2048;

/* --------------------------------------------------------------------------
   Request body
   -------------------------------------------------------------------------- */

/// Body of `POST /videos`. Field names follow the recorder's camelCase wire format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSubmission {
    pub video_id: String,
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub video_url: String,
    pub pin: String,
}

impl VideoSubmission {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Run every field check, returning the first failure.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_video_id(&self.video_id)?;
        validate_title(&self.title)?;
        validate_address(&self.address)?;
        self.position().validate()?;
        validate_video_url(&self.video_url)?;
        pin::validate_pin_format(&self.pin)?;
        Ok(())
    }
}

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Video ids end up in object keys and share links, so only URL-safe
/// characters are allowed.
pub fn validate_video_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation(
            "Video id must not be empty".to_string(),
        ));
    }
    if id.len() > MAX_VIDEO_ID_LEN {
        return Err(CoreError::Validation(format!(
            "Video id too long: {} chars (max {MAX_VIDEO_ID_LEN})",
            id.len()
        )));
    }
    if !id
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(CoreError::Validation(
            "Video id may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }
    Ok(())
}

/// Validate a title: non-blank and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_text("Title", title, MAX_TITLE_LEN)
}

/// Validate an address: non-blank and within length limit.
pub fn validate_address(address: &str) -> Result<(), CoreError> {
    validate_text("Address", address, MAX_ADDRESS_LEN)
}

/// The URL must point at the object store over HTTP(S).
pub fn validate_video_url(url: &str) -> Result<(), CoreError> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(CoreError::Validation(
            "Video URL must be an http(s) URL".to_string(),
        ));
    }
    if url.len() > MAX_URL_LEN {
        return Err(CoreError::Validation(format!(
            "Video URL too long: {} chars (max {MAX_URL_LEN})",
            url.len()
        )));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} too long: {} chars (max {max_len})",
            value.len()
        )));
    }
    Ok(())
}
