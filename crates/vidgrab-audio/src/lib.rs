//! vidgrab audio core
//!
//! This crate turns in-memory floating-point audio into canonical 16-bit PCM
//! WAV files, and synthesizes the placeholder tones that feed it.
//!
//! # Overview
//!
//! - [`AudioBuffer`] - validated multi-channel sample buffer
//! - [`encode_wav`] - buffer to a byte-exact 44-byte-header WAV stream
//! - [`ToneSpec`] / [`TonePreset`] - steady and warbling sine generators
//! - [`WavHeader`] - header parsing for inspecting existing files
//!
//! # Determinism
//!
//! Encoding is a pure function of the buffer. The same buffer always
//! produces byte-identical output, so the BLAKE3 hash of the PCM payload
//! identifies the audio content.
//!
//! # Example
//!
//! ```
//! use vidgrab_audio::{encode_wav, AudioBuffer};
//!
//! let buffer = AudioBuffer::mono(44100, vec![0.0, 1.0]).unwrap();
//! let wav = encode_wav(&buffer);
//!
//! assert_eq!(wav.len(), 44 + 2 * 2);
//! assert_eq!(&wav[0..4], b"RIFF");
//! assert_eq!(&wav[44..], &[0x00, 0x00, 0xFF, 0x7F]);
//! ```

pub mod buffer;
pub mod error;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use error::{AudioError, AudioResult};
pub use tone::{ToneKind, TonePreset, ToneSpec};
pub use wav::{encode_wav, WavFormat, WavHeader, WavResult};
