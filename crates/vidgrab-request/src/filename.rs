//! Suggested filenames for saved media.
//!
//! A known platform video ID wins; otherwise the name falls back to the URL's
//! domain plus a timestamp. The timestamp is passed in so that naming is
//! deterministic.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::format::MediaFormat;
use crate::url::ParsedUrl;

/// Timestamp layout used in fallback names (`2024-05-01T13-45-00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

const YOUTUBE_ID_PATTERN: &str =
    r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#;
const TIKTOK_ID_PATTERN: &str = r"tiktok\.com/@[\w.-]+/video/(\d+)";
const INSTAGRAM_ID_PATTERN: &str = r"instagram\.com/(?:p|reel)/([A-Za-z0-9_-]+)";

static ID_REGEXES: OnceLock<[Regex; 3]> = OnceLock::new();

fn id_regexes() -> &'static [Regex; 3] {
    ID_REGEXES.get_or_init(|| {
        [
            Regex::new(YOUTUBE_ID_PATTERN).expect("invalid regex pattern"),
            Regex::new(TIKTOK_ID_PATTERN).expect("invalid regex pattern"),
            Regex::new(INSTAGRAM_ID_PATTERN).expect("invalid regex pattern"),
        ]
    })
}

/// Extracts a platform video ID (YouTube, TikTok, Instagram, in that order).
pub fn extract_video_id(url: &str) -> Option<String> {
    id_regexes()
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| caps[1].to_string())
}

/// Formats a timestamp for use in a filename.
pub fn filename_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Short domain label: the host without its first `www.` and first `.com`.
pub fn domain_label(host: &str) -> String {
    host.replacen("www.", "", 1).replacen(".com", "", 1)
}

/// Suggests a filename for a download.
///
/// * `{id}_{quality}.{ext}` when a video ID is recognised
/// * `{domain}_video_{timestamp}_{quality}.{ext}` for other parseable URLs
/// * `video_{timestamp}_{quality}.{ext}` otherwise
///
/// Characters outside `[A-Za-z0-9._-]` are replaced with `_`.
pub fn suggest_filename(
    url: &str,
    format: MediaFormat,
    quality: &str,
    timestamp: DateTime<Utc>,
) -> String {
    let ext = format.extension();

    let name = match extract_video_id(url) {
        Some(id) => format!("{id}_{quality}.{ext}"),
        None => {
            let ts = filename_timestamp(timestamp);
            match ParsedUrl::parse(url) {
                Ok(parsed) => {
                    let domain = domain_label(&parsed.host);
                    format!("{domain}_video_{ts}_{quality}.{ext}")
                }
                Err(_) => format!("video_{ts}_{quality}.{ext}"),
            }
        }
    };

    sanitize_filename(&name)
}

/// Replaces characters that are unsafe in filenames with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
