//! In-memory multi-channel sample buffer.
//!
//! An [`AudioBuffer`] is validated once at construction. After that it is
//! read-only, so the encoder never has to re-check channel lengths or sample
//! values and can treat encoding as a total function.

use crate::error::{AudioError, AudioResult};

/// Bytes per 16-bit PCM sample.
pub(crate) const BYTES_PER_SAMPLE: u64 = 2;

/// Bytes of RIFF payload preceding the PCM data (everything after the
/// 8-byte RIFF chunk header, up to and including the data chunk header).
pub(crate) const RIFF_HEADER_OVERHEAD: u64 = 36;

/// Most channels a header can describe; `block_align = channels * 2` must
/// fit in a u16.
pub(crate) const MAX_CHANNELS: usize = (u16::MAX / 2) as usize;

/// Multi-channel floating-point audio, one `Vec<f64>` per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f64>>,
}

impl AudioBuffer {
    /// Builds a buffer from per-channel sample arrays.
    ///
    /// # Errors
    /// * [`AudioError::InvalidSampleRate`] if `sample_rate` is zero or the
    ///   resulting byte rate would overflow the header field
    /// * [`AudioError::NoChannels`] if `channels` is empty
    /// * [`AudioError::TooManyChannels`] past `u16::MAX / 2` channels
    /// * [`AudioError::MalformedBuffer`] if channel lengths differ
    /// * [`AudioError::NonFiniteSample`] for NaN or infinite samples
    /// * [`AudioError::DataTooLarge`] if the data chunk exceeds 32-bit sizes
    pub fn new(sample_rate: u32, channels: Vec<Vec<f64>>) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        if channels.is_empty() {
            return Err(AudioError::NoChannels);
        }

        if channels.len() > MAX_CHANNELS {
            return Err(AudioError::TooManyChannels {
                count: channels.len(),
                max: MAX_CHANNELS,
            });
        }

        let byte_rate = sample_rate as u64 * channels.len() as u64 * BYTES_PER_SAMPLE;
        if byte_rate > u32::MAX as u64 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }

        let expected = channels[0].len();
        for (channel, samples) in channels.iter().enumerate().skip(1) {
            if samples.len() != expected {
                return Err(AudioError::MalformedBuffer {
                    channel,
                    expected,
                    found: samples.len(),
                });
            }
        }

        let data_bytes = expected as u64 * channels.len() as u64 * BYTES_PER_SAMPLE;
        if data_bytes + RIFF_HEADER_OVERHEAD > u32::MAX as u64 {
            return Err(AudioError::DataTooLarge { bytes: data_bytes });
        }

        for (channel, samples) in channels.iter().enumerate() {
            if let Some(frame) = samples.iter().position(|s| !s.is_finite()) {
                return Err(AudioError::NonFiniteSample { channel, frame });
            }
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Builds a single-channel buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f64>) -> AudioResult<Self> {
        Self::new(sample_rate, vec![samples])
    }

    /// Builds a buffer of `length` zero-valued frames.
    pub fn silent(sample_rate: u32, number_of_channels: usize, length: usize) -> AudioResult<Self> {
        Self::new(sample_rate, vec![vec![0.0; length]; number_of_channels])
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (always at least 1).
    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of sample frames per channel.
    pub fn length(&self) -> usize {
        self.channels[0].len()
    }

    /// Whether the buffer holds zero frames.
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Samples of one channel, or `None` if `index` is out of range.
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels in order.
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    /// Size of the PCM data chunk this buffer encodes to.
    pub fn data_byte_count(&self) -> u32 {
        // Bounded by the DataTooLarge check in `new`.
        (self.length() as u64 * self.number_of_channels() as u64 * BYTES_PER_SAMPLE) as u32
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.length() as f64 / self.sample_rate as f64
    }
}
