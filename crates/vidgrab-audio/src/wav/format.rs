//! WAV file format parameters.

use crate::buffer::AudioBuffer;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo, any positive count allowed).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit format with an arbitrary channel count.
    pub fn new(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate)
    }

    /// Format describing an [`AudioBuffer`].
    pub fn for_buffer(buffer: &AudioBuffer) -> Self {
        // Channel count is bounded by AudioBuffer::new.
        Self::new(buffer.number_of_channels() as u16, buffer.sample_rate())
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
