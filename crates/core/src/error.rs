/// General domain error used by validation and the create path.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Outcome of a rejected access request.
///
/// The four domain kinds are user-visible and carry no detail beyond their
/// kind: [`AccessError::TooFar`] never includes the measured distance and
/// [`AccessError::InvalidPin`] never hints at the stored PIN.
/// [`AccessError::Infrastructure`] carries a detail string for internal logs
/// only; the HTTP boundary replaces it with a generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Video not found")]
    NotFound,

    #[error("Incorrect PIN")]
    InvalidPin,

    #[error("You must be within the geofence of the video location to watch it")]
    TooFar,

    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),
}

impl From<CoreError> for AccessError {
    fn from(err: CoreError) -> Self {
        AccessError::Infrastructure(err.to_string())
    }
}
