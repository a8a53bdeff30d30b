//! Parsing of PCM WAV headers for inspection.

use serde::Serialize;

use crate::error::{AudioError, AudioResult};

use super::chunks::{chunks, is_riff_wave};

/// `wFormatTag` for uncompressed PCM.
const FORMAT_PCM: u16 = 1;

/// Summary of a parsed PCM WAV file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavHeader {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Declared byte rate.
    pub byte_rate: u32,
    /// Declared block align.
    pub block_align: u16,
    /// Size of the data chunk in bytes.
    pub data_size: u32,
    /// RIFF size field (file size minus 8).
    pub riff_size: u32,
    /// Frames per channel.
    pub frames: u64,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

impl WavHeader {
    /// Parses a PCM WAV file, locating the `fmt ` and `data` chunks.
    ///
    /// Chunks other than `fmt ` and `data` (`LIST`, `fact`, ...) are skipped.
    pub fn parse(wav_data: &[u8]) -> AudioResult<Self> {
        if !is_riff_wave(wav_data) {
            return Err(AudioError::invalid_wav("missing RIFF/WAVE preamble"));
        }
        let riff_size = u32::from_le_bytes([wav_data[4], wav_data[5], wav_data[6], wav_data[7]]);

        let mut fmt = None;
        let mut data_size = None;
        for chunk in chunks(wav_data) {
            match &chunk.id {
                b"fmt " => {
                    if chunk.body.len() < 16 {
                        return Err(AudioError::invalid_wav("fmt chunk shorter than 16 bytes"));
                    }
                    fmt = Some(chunk.body);
                }
                b"data" => {
                    if chunk.is_truncated() {
                        return Err(AudioError::invalid_wav(format!(
                            "data chunk declares {} bytes but only {} are present",
                            chunk.declared_size,
                            chunk.body.len()
                        )));
                    }
                    data_size = Some(chunk.declared_size);
                    break;
                }
                _ => {}
            }
        }

        let fmt = fmt.ok_or_else(|| AudioError::invalid_wav("missing fmt chunk"))?;
        let data_size = data_size.ok_or_else(|| AudioError::invalid_wav("missing data chunk"))?;

        let le16 = |at: usize| u16::from_le_bytes([fmt[at], fmt[at + 1]]);
        let le32 = |at: usize| u32::from_le_bytes([fmt[at], fmt[at + 1], fmt[at + 2], fmt[at + 3]]);

        let audio_format = le16(0);
        if audio_format != FORMAT_PCM {
            return Err(AudioError::invalid_wav(format!(
                "unsupported audio format tag {audio_format} (only PCM is supported)"
            )));
        }

        let channels = le16(2);
        let sample_rate = le32(4);
        let byte_rate = le32(8);
        let block_align = le16(12);
        let bits_per_sample = le16(14);

        if channels == 0 {
            return Err(AudioError::invalid_wav("channel count is zero"));
        }
        if sample_rate == 0 {
            return Err(AudioError::invalid_wav("sample rate is zero"));
        }
        if block_align == 0 {
            return Err(AudioError::invalid_wav("block align is zero"));
        }

        let frames = data_size as u64 / block_align as u64;
        let duration_seconds = frames as f64 / sample_rate as f64;

        Ok(Self {
            channels,
            sample_rate,
            bits_per_sample,
            byte_rate,
            block_align,
            data_size,
            riff_size,
            frames,
            duration_seconds,
        })
    }

    /// Whether the header describes the canonical 44-byte layout written by
    /// this crate (consistent byte rate, block align, and RIFF size).
    pub fn is_canonical(&self) -> bool {
        let block_align = self.channels as u32 * (self.bits_per_sample as u32 / 8);
        self.block_align as u32 == block_align
            && self.byte_rate as u64 == self.sample_rate as u64 * block_align as u64
            && self.riff_size as u64 == 36 + self.data_size as u64
    }
}
