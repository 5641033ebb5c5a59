//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated principal from a JWT Bearer token.

pub mod auth;
