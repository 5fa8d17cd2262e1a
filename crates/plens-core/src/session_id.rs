use std::sync::LazyLock;

use regex::Regex;

static EMBED_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"embed/([^?&]+)").unwrap());

/// Extract the video id from an embed URL (`.../embed/<id>?...`).
///
/// Returns an empty string when the URL carries no `embed/` segment.
pub fn youtube_id(url: &str) -> String {
    EMBED_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Derive a session id from a `DD/MM/YYYY` date and the session's embed URL.
///
/// Total: missing date parts render empty and an unparseable URL yields an
/// empty video-id segment.
pub fn derive_session_id(date: &str, video_url: &str) -> String {
    let parts: Vec<&str> = date.split('/').collect();
    let part = |i: usize| parts.get(i).copied().unwrap_or("");
    format!(
        "{}-{}-{}_{}",
        part(2),
        part(1),
        part(0),
        youtube_id(video_url)
    )
}

/// Watch URL that starts playback at `seconds` (floored).
pub fn youtube_timestamp(video_url: &str, seconds: f64) -> String {
    let id = youtube_id(video_url);
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("https://www.youtube.com/watch?v={id}&t={secs}s")
}
