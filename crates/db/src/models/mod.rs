pub mod location;
pub mod playlist;
pub mod video;
