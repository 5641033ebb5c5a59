//! Shareable watch links.
//!
//! The link is what gets encoded into the printed QR code. It is a
//! convenience only; the access gate never reads it.

/// Path segment under which the viewer page lives.
pub const WATCH_PATH: &str = "watch";

/// Build `<base_url>/watch/<video_id>`, tolerating a trailing slash on the base.
pub fn watch_url(base_url: &str, video_id: &str) -> String {
    format!("{}/{WATCH_PATH}/{video_id}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_watch_url() {
        assert_eq!(
            watch_url("https://reclip.example", "abc-123"),
            "https://reclip.example/watch/abc-123"
        );
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        assert_eq!(
            watch_url("http://localhost:3000/", "v1"),
            "http://localhost:3000/watch/v1"
        );
    }
}
