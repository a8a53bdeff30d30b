//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use crate::buffer::AudioBuffer;

use super::format::WavFormat;

/// Size of the canonical PCM WAV header.
pub const WAV_HEADER_LEN: usize = 44;

/// Full-scale value a sample of 1.0 quantizes to.
const PCM16_SCALE: f64 = 32767.0;

/// Builds the 44-byte RIFF/WAVE header for `data_size` bytes of PCM.
pub fn wav_header(format: &WavFormat, data_size: u32) -> [u8; WAV_HEADER_LEN] {
    let mut header = [0u8; WAV_HEADER_LEN];
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PCM data exceeds the 4 GiB RIFF limit",
        )
    })?;

    writer.write_all(&wav_header(format, data_size))?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Quantizes one sample to signed 16-bit PCM.
///
/// The sample is clamped to [-1.0, 1.0] first, so out-of-range input
/// saturates at ±32767 instead of wrapping.
pub fn quantize_sample(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM16_SCALE).round() as i16
}

/// Interleaves a buffer into little-endian 16-bit PCM.
///
/// Output order is frame-major, channel-minor: every channel's sample for
/// frame 0, then every channel's sample for frame 1, and so on.
pub fn interleave_pcm16(buffer: &AudioBuffer) -> Vec<u8> {
    let channels = buffer.channels();
    let mut pcm = Vec::with_capacity(buffer.data_byte_count() as usize);

    for frame in 0..buffer.length() {
        for channel in channels {
            pcm.extend_from_slice(&quantize_sample(channel[frame]).to_le_bytes());
        }
    }

    pcm
}

/// Encodes a buffer as a complete 16-bit PCM WAV file.
///
/// The result is exactly `44 + length * channels * 2` bytes. Encoding is
/// pure and deterministic: the same buffer always yields identical bytes.
pub fn encode_wav(buffer: &AudioBuffer) -> Vec<u8> {
    let format = WavFormat::for_buffer(buffer);
    let data_size = buffer.data_byte_count();

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);
    wav.extend_from_slice(&wav_header(&format, data_size));
    wav.extend_from_slice(&interleave_pcm16(buffer));

    wav
}

/// Encodes a buffer straight into a writer.
pub fn encode_wav_to<W: Write>(writer: &mut W, buffer: &AudioBuffer) -> io::Result<()> {
    write_wav(writer, &WavFormat::for_buffer(buffer), &interleave_pcm16(buffer))
}
