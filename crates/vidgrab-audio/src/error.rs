//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while building, synthesizing, or parsing audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Channel sample arrays disagree in length.
    #[error("malformed buffer: channel {channel} has {found} frames, expected {expected}")]
    MalformedBuffer {
        /// Index of the offending channel.
        channel: usize,
        /// Frame count of channel 0.
        expected: usize,
        /// Frame count of the offending channel.
        found: usize,
    },

    /// A buffer was built without any channels.
    #[error("buffer must have at least one channel")]
    NoChannels,

    /// Too many channels for the 16-bit `channels` header field.
    #[error("too many channels: {count} (maximum {max})")]
    TooManyChannels {
        /// Requested channel count.
        count: usize,
        /// Largest count the header can describe.
        max: usize,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// A sample is NaN or infinite.
    #[error("non-finite sample at channel {channel}, frame {frame}")]
    NonFiniteSample {
        /// Channel index.
        channel: usize,
        /// Frame index.
        frame: usize,
    },

    /// The data chunk would not fit the 32-bit RIFF size fields.
    #[error("audio data too large for a RIFF container: {bytes} bytes")]
    DataTooLarge {
        /// Size the data chunk would have had.
        bytes: u64,
    },

    /// Invalid tone parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The bytes are not a PCM WAV file this crate understands.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// What was wrong.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::MalformedBuffer { .. } => "AUDIO_001",
            AudioError::NoChannels => "AUDIO_002",
            AudioError::TooManyChannels { .. } => "AUDIO_003",
            AudioError::InvalidSampleRate { .. } => "AUDIO_004",
            AudioError::NonFiniteSample { .. } => "AUDIO_005",
            AudioError::DataTooLarge { .. } => "AUDIO_006",
            AudioError::InvalidParameter { .. } => "AUDIO_007",
            AudioError::InvalidWav { .. } => "AUDIO_008",
            AudioError::Io(_) => "AUDIO_009",
        }
    }

    /// Whether the error describes a malformed input buffer.
    ///
    /// These are the conditions the encoder rejects before emitting any bytes.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AudioError::MalformedBuffer { .. }
                | AudioError::NoChannels
                | AudioError::TooManyChannels { .. }
                | AudioError::InvalidSampleRate { .. }
                | AudioError::NonFiniteSample { .. }
                | AudioError::DataTooLarge { .. }
        )
    }
}
