//! Media sources.
//!
//! A [`MediaSource`] turns a validated request into downloadable bytes. The
//! only implementation is [`SyntheticSource`], which fabricates placeholder
//! media locally: a warbling tone for audio requests and a single rendered
//! frame for video requests.

use thiserror::Error;
use vidgrab_audio::{AudioError, TonePreset, ToneSpec, WavResult};
use vidgrab_request::{DownloadRequest, MediaFormat, Platform};

use crate::frame;

/// Errors a media source can report.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Audio synthesis or encoding failed.
    #[error("audio synthesis failed: {0}")]
    Audio(#[from] AudioError),

    /// Frame encoding failed.
    #[error("frame encoding failed: {0}")]
    Frame(#[from] png::EncodingError),
}

impl SourceError {
    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Audio(e) => e.code(),
            SourceError::Frame(_) => "SOURCE_001",
        }
    }
}

/// Media returned by a source.
#[derive(Debug, Clone)]
pub struct FetchedMedia {
    /// Title reported for the media.
    pub title: String,
    /// Reported duration in seconds.
    pub duration_seconds: u32,
    /// Thumbnail URL, if the platform provides one.
    pub thumbnail: Option<String>,
    /// MIME type of `bytes`.
    pub mime_type: &'static str,
    /// File contents.
    pub bytes: Vec<u8>,
    /// BLAKE3 hash of the PCM payload for audio media.
    pub pcm_hash: Option<String>,
}

/// Something that can satisfy a download request.
pub trait MediaSource {
    /// Produces the media for `request`.
    fn fetch(&self, request: &DownloadRequest) -> Result<FetchedMedia, SourceError>;
}

/// Canned metadata reported for a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMetadata {
    /// Title.
    pub title: String,
    /// Duration in seconds.
    pub duration_seconds: u32,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
}

const YOUTUBE_THUMBNAIL: &str =
    "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg";

/// Metadata the synthetic source reports for `platform`.
pub fn platform_metadata(platform: Platform) -> PlatformMetadata {
    let (duration_seconds, thumbnail) = match platform {
        Platform::YouTube => (180, Some(YOUTUBE_THUMBNAIL.to_string())),
        Platform::TikTok => (30, None),
        _ => (120, None),
    };
    PlatformMetadata {
        title: format!("Sample {} Video", platform.display_name()),
        duration_seconds,
        thumbnail,
    }
}

/// Fabricates placeholder media without any network access.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    tone: ToneSpec,
    frame_width: u32,
    frame_height: u32,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new(TonePreset::Warble.spec(), 640, 360)
    }
}

impl SyntheticSource {
    /// Creates a source rendering `tone` for audio and frames of the given
    /// size for video.
    pub fn new(tone: ToneSpec, frame_width: u32, frame_height: u32) -> Self {
        Self {
            tone,
            frame_width,
            frame_height,
        }
    }

    /// Tone rendered for audio requests.
    pub fn tone(&self) -> &ToneSpec {
        &self.tone
    }
}

impl MediaSource for SyntheticSource {
    fn fetch(&self, request: &DownloadRequest) -> Result<FetchedMedia, SourceError> {
        let meta = platform_metadata(request.platform());

        let (mime_type, bytes, pcm_hash) = match request.format() {
            MediaFormat::Mp3 => {
                let buffer = self.tone.render()?;
                let wav = WavResult::from_buffer(&buffer);
                ("audio/wav", wav.wav_data, Some(wav.pcm_hash))
            }
            MediaFormat::Mp4 => {
                let png_data = frame::render_clip_poster(self.frame_width, self.frame_height)?;
                ("image/png", png_data, None)
            }
        };

        Ok(FetchedMedia {
            title: meta.title,
            duration_seconds: meta.duration_seconds,
            thumbnail: meta.thumbnail,
            mime_type,
            bytes,
            pcm_hash,
        })
    }
}
