//! WAV file generation result type.

use crate::buffer::AudioBuffer;

use super::format::WavFormat;
use super::pcm::hash_pcm;
use super::writer::{encode_wav, WAV_HEADER_LEN};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Format written to the header.
    pub format: WavFormat,
    /// Number of frames per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes a buffer and hashes its PCM payload.
    pub fn from_buffer(buffer: &AudioBuffer) -> Self {
        let wav_data = encode_wav(buffer);
        let pcm_hash = hash_pcm(&wav_data[WAV_HEADER_LEN..]);

        Self {
            wav_data,
            pcm_hash,
            format: WavFormat::for_buffer(buffer),
            num_frames: buffer.length(),
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}
