//! PCM data extraction and hashing utilities.

use super::chunks::{chunks, is_riff_wave};

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// PCM data if found, or None if the format is invalid or the data chunk is
/// truncated
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 || !is_riff_wave(wav_data) {
        return None;
    }

    chunks(wav_data)
        .find(|chunk| &chunk.id == b"data")
        .filter(|chunk| !chunk.is_truncated())
        .map(|chunk| chunk.body)
}

/// Computes the BLAKE3 hash of raw PCM bytes.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
