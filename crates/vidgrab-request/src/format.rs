//! Output format and quality labels offered by the request form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Video quality labels, best first.
pub const VIDEO_QUALITIES: [&str; 4] = ["1080p", "720p", "480p", "360p"];

/// Audio bitrate labels, best first.
pub const AUDIO_QUALITIES: [&str; 4] = ["320kbps", "256kbps", "128kbps", "96kbps"];

/// Backend quality value used when a label is not recognised.
pub const DEFAULT_API_QUALITY: &str = "720";

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFormat {
    /// Audio only.
    Mp3,
    /// Video.
    Mp4,
}

impl MediaFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
        }
    }

    /// Whether the request asks for the audio track only.
    pub fn is_audio_only(&self) -> bool {
        matches!(self, MediaFormat::Mp3)
    }

    /// Quality labels the form offers for this format.
    pub fn quality_options(&self) -> &'static [&'static str] {
        match self {
            MediaFormat::Mp3 => &AUDIO_QUALITIES,
            MediaFormat::Mp4 => &VIDEO_QUALITIES,
        }
    }

    /// Quality preselected by the form.
    pub fn default_quality(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "320kbps",
            MediaFormat::Mp4 => "720p",
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for MediaFormat {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp3" => Ok(MediaFormat::Mp3),
            "mp4" => Ok(MediaFormat::Mp4),
            _ => Err(RequestError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Maps a quality label to the numeric value the extraction backend expects.
///
/// Unknown labels fall back to [`DEFAULT_API_QUALITY`].
pub fn quality_api_value(label: &str) -> &'static str {
    match label {
        "1080p" => "1080",
        "720p" => "720",
        "480p" => "480",
        "360p" => "360",
        "320kbps" => "320",
        "256kbps" => "256",
        "128kbps" => "128",
        "96kbps" => "96",
        _ => DEFAULT_API_QUALITY,
    }
}
