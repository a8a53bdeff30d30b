//! The download request assembled by the form.

use serde::{Deserialize, Serialize};

use crate::error::{RequestError, RequestResult};
use crate::format::{quality_api_value, MediaFormat};
use crate::platform::Platform;
use crate::url::ParsedUrl;

/// Video codec always requested from the backend.
pub const VIDEO_CODEC: &str = "h264";

/// A validated download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    parsed: ParsedUrl,
    platform: Platform,
    format: MediaFormat,
    quality: String,
}

impl DownloadRequest {
    /// Validates the form input.
    ///
    /// The URL is trimmed, must parse as an absolute URL, and its host must be
    /// on the platform allow-list. The quality label is carried through
    /// verbatim; see [`DownloadRequest::quality_matches_format`].
    pub fn new(url: &str, format: MediaFormat, quality: impl Into<String>) -> RequestResult<Self> {
        let url = url.trim();
        let parsed = ParsedUrl::parse(url)?;
        let platform = Platform::from_host(&parsed.host).ok_or_else(|| {
            RequestError::UnsupportedPlatform {
                host: parsed.host.clone(),
            }
        })?;

        Ok(Self {
            url: url.to_string(),
            parsed,
            platform,
            format,
            quality: quality.into(),
        })
    }

    /// The trimmed URL as entered.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parsed URL components.
    pub fn parsed_url(&self) -> &ParsedUrl {
        &self.parsed
    }

    /// Platform the URL belongs to.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Requested format.
    pub fn format(&self) -> MediaFormat {
        self.format
    }

    /// Quality label as entered.
    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Whether the quality label is one the form offers for this format.
    pub fn quality_matches_format(&self) -> bool {
        self.format.quality_options().contains(&self.quality.as_str())
    }

    /// Builds the request object an extraction backend would receive.
    pub fn payload(&self) -> DownloadPayload {
        DownloadPayload {
            url: self.url.clone(),
            v_codec: VIDEO_CODEC.to_string(),
            v_quality: quality_api_value(&self.quality).to_string(),
            a_format: if self.format.is_audio_only() {
                "mp3".to_string()
            } else {
                "best".to_string()
            },
            is_audio_only: self.format.is_audio_only(),
        }
    }
}

/// Backend request object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPayload {
    /// Source URL.
    pub url: String,
    /// Video codec.
    pub v_codec: String,
    /// Numeric quality value.
    pub v_quality: String,
    /// Audio format (`mp3` for audio-only requests, otherwise `best`).
    pub a_format: String,
    /// Whether only the audio track is wanted.
    pub is_audio_only: bool,
}
