//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. `*_in` variants take a connection so the
//! create flow can run them inside one transaction.

pub mod location_repo;
pub mod playlist_repo;
pub mod video_repo;

pub use location_repo::LocationRepo;
pub use playlist_repo::PlaylistRepo;
pub use video_repo::VideoRepo;
