//! Route definitions for videos.
//!
//! Mounted at `/videos`.
//!
//! ```text
//! GET  /?id=&pin=&latitude=&longitude=     resolve_video
//! POST /                                   create_video
//! GET  /mine                               list_my_videos
//! GET  /mine/{id}                          get_my_video
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::resolve_video).post(video::create_video))
        .route("/mine", get(video::list_my_videos))
        .route("/mine/{id}", get(video::get_my_video))
}
