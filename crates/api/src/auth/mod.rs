//! Bearer token verification for the identity provider's JWTs.

pub mod jwt;
