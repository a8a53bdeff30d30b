//! Deterministic WAV file writer.
//!
//! This module writes canonical 16-bit PCM WAV files: a fixed 44-byte header
//! followed by interleaved little-endian samples, with no timestamps or
//! variable metadata. The same buffer always encodes to the same bytes.

mod chunks;
mod format;
mod header;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use header::WavHeader;
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use result::WavResult;
pub use writer::{
    encode_wav, encode_wav_to, interleave_pcm16, quantize_sample, wav_header, write_wav,
    WAV_HEADER_LEN,
};
