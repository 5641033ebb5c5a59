//! Domain layer for Reclip.
//!
//! Holds the pieces with no I/O of their own: the error taxonomy, geodesy,
//! PIN rules, submission validation, and the geofenced access gate together
//! with the [`access::VideoLookup`] seam the record store implements.

pub mod access;
pub mod error;
pub mod geo;
pub mod pin;
pub mod sharing;
pub mod submission;
pub mod types;
