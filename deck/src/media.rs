//! YouTube URL handling for video elements.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use crate::consts::YOUTUBE_ID_LEN;

/// URL fragments that are immediately followed by the video id.
const ID_PREFIXES: [&str; 3] = ["youtube.com/watch?v=", "youtube.com/embed/", "youtu.be/"];

fn is_id_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'-'
}

/// Extract the 11-character video id from a YouTube watch, embed or short
/// URL. The first position in `url` where a prefix is followed by eleven id
/// characters wins; anything after the id (query, playlist) is ignored.
#[must_use]
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    for start in 0..bytes.len() {
        for prefix in ID_PREFIXES {
            let Some(rest) = bytes[start..].strip_prefix(prefix.as_bytes()) else {
                continue;
            };
            if rest.len() >= YOUTUBE_ID_LEN && rest[..YOUTUBE_ID_LEN].iter().copied().all(is_id_char) {
                let id_start = start + prefix.len();
                return url.get(id_start..id_start + YOUTUBE_ID_LEN);
            }
        }
    }
    None
}

/// Player URL used when a slide is shown.
#[must_use]
pub fn embed_url(video_id: &str, autoplay: bool) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay={}", u8::from(autoplay))
}
