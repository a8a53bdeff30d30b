//! Deterministic tone synthesis.
//!
//! Produces the placeholder audio handed to the WAV encoder. Two shapes are
//! supported: a steady sine, and a "warble" whose instantaneous frequency
//! drifts slowly around the base frequency.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::{AudioBuffer, BYTES_PER_SAMPLE, MAX_CHANNELS, RIFF_HEADER_OVERHEAD};
use crate::error::{AudioError, AudioResult};

/// Frequency excursion of the warble, in Hz.
pub const WARBLE_DEPTH_HZ: f64 = 100.0;

/// Divisor applied to the frame index before the warble's sine.
pub const WARBLE_PERIOD_FRAMES: f64 = 1000.0;

/// Waveform shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneKind {
    /// Constant-frequency sine.
    Steady,
    /// Sine whose frequency wobbles by ±[`WARBLE_DEPTH_HZ`].
    Warble,
}

/// Named presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TonePreset {
    /// Stereo, 10 s, 440 Hz at amplitude 0.1.
    Steady,
    /// Mono, 5 s, warbling around 440 Hz at amplitude 0.3.
    Warble,
}

impl TonePreset {
    /// All presets in display order.
    pub const ALL: [TonePreset; 2] = [TonePreset::Steady, TonePreset::Warble];

    /// Returns the preset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TonePreset::Steady => "steady",
            TonePreset::Warble => "warble",
        }
    }

    /// Expands the preset into a full tone spec.
    pub fn spec(&self) -> ToneSpec {
        match self {
            TonePreset::Steady => ToneSpec {
                kind: ToneKind::Steady,
                sample_rate: 44100,
                channels: 2,
                duration_seconds: 10.0,
                frequency: 440.0,
                amplitude: 0.1,
            },
            TonePreset::Warble => ToneSpec {
                kind: ToneKind::Warble,
                sample_rate: 44100,
                channels: 1,
                duration_seconds: 5.0,
                frequency: 440.0,
                amplitude: 0.3,
            },
        }
    }
}

impl fmt::Display for TonePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TonePreset {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "steady" => Ok(TonePreset::Steady),
            "warble" => Ok(TonePreset::Warble),
            other => Err(AudioError::invalid_param(
                "preset",
                format!("unknown preset '{other}' (expected steady or warble)"),
            )),
        }
    }
}

/// Full description of a tone to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Waveform shape.
    pub kind: ToneKind,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of output channels; every channel carries the same signal.
    pub channels: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude. Values above 1.0 are allowed and clip in the encoder.
    pub amplitude: f64,
}

impl Default for ToneSpec {
    fn default() -> Self {
        TonePreset::Warble.spec()
    }
}

impl ToneSpec {
    /// Checks every parameter, returning the first problem found.
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.channels == 0 {
            return Err(AudioError::NoChannels);
        }
        if self.channels > MAX_CHANNELS {
            return Err(AudioError::TooManyChannels {
                count: self.channels,
                max: MAX_CHANNELS,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(AudioError::invalid_param(
                "duration_seconds",
                format!("must be a finite, non-negative number, got {}", self.duration_seconds),
            ));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(AudioError::invalid_param(
                "frequency",
                format!("must be a finite, positive number, got {}", self.frequency),
            ));
        }
        if !self.amplitude.is_finite() {
            return Err(AudioError::invalid_param(
                "amplitude",
                format!("must be finite, got {}", self.amplitude),
            ));
        }

        // The data chunk must fit the 32-bit RIFF size fields.
        let data_bytes = (self.sample_rate as f64 * self.duration_seconds).round()
            * self.channels as f64
            * BYTES_PER_SAMPLE as f64;
        if data_bytes + RIFF_HEADER_OVERHEAD as f64 > u32::MAX as f64 {
            return Err(AudioError::DataTooLarge {
                bytes: data_bytes as u64,
            });
        }
        Ok(())
    }

    /// Number of frames the tone renders to.
    pub fn num_frames(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Renders one channel of the tone.
    pub fn render_channel(&self) -> Vec<f64> {
        let sample_rate = self.sample_rate as f64;
        (0..self.num_frames())
            .map(|i| {
                let t = i as f64;
                let freq = match self.kind {
                    ToneKind::Steady => self.frequency,
                    ToneKind::Warble => {
                        self.frequency + (t / WARBLE_PERIOD_FRAMES).sin() * WARBLE_DEPTH_HZ
                    }
                };
                (2.0 * PI * freq * t / sample_rate).sin() * self.amplitude
            })
            .collect()
    }

    /// Validates the tone and renders it into an [`AudioBuffer`].
    pub fn render(&self) -> AudioResult<AudioBuffer> {
        self.validate()?;
        let channel = self.render_channel();
        AudioBuffer::new(self.sample_rate, vec![channel; self.channels])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(kind: ToneKind) -> ToneSpec {
        ToneSpec {
            kind,
            sample_rate: 8000,
            channels: 1,
            duration_seconds: 0.05,
            frequency: 440.0,
            amplitude: 0.5,
        }
    }

    #[test]
    fn test_presets() {
        let steady = TonePreset::Steady.spec();
        assert_eq!(steady.channels, 2);
        assert_eq!(steady.num_frames(), 441000);
        assert_eq!(steady.amplitude, 0.1);

        let warble = TonePreset::Warble.spec();
        assert_eq!(warble.channels, 1);
        assert_eq!(warble.num_frames(), 220500);
        assert_eq!(warble.amplitude, 0.3);
        assert_eq!(ToneSpec::default(), warble);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("steady".parse::<TonePreset>().unwrap(), TonePreset::Steady);
        assert_eq!("WARBLE".parse::<TonePreset>().unwrap(), TonePreset::Warble);
        assert!("square".parse::<TonePreset>().is_err());
        for preset in TonePreset::ALL {
            assert_eq!(preset.to_string().parse::<TonePreset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_steady_matches_sine() {
        let spec = short(ToneKind::Steady);
        let samples = spec.render_channel();
        assert_eq!(samples.len(), 400);
        for (i, &s) in samples.iter().enumerate() {
            let expected = (2.0 * PI * 440.0 * i as f64 / 8000.0).sin() * 0.5;
            assert!((s - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_warble_formula() {
        let spec = short(ToneKind::Warble);
        let samples = spec.render_channel();
        let i = 123.0_f64;
        let freq = 440.0 + (i / 1000.0).sin() * 100.0;
        let expected = (2.0 * PI * freq * i / 8000.0).sin() * 0.5;
        assert!((samples[123] - expected).abs() < 1e-12);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_render_duplicates_channels() {
        let mut spec = short(ToneKind::Steady);
        spec.channels = 3;
        let buffer = spec.render().unwrap();
        assert_eq!(buffer.number_of_channels(), 3);
        assert_eq!(buffer.channel(0), buffer.channel(2));
    }

    #[test]
    fn test_amplitude_bounds_peak() {
        let buffer = short(ToneKind::Warble).render().unwrap();
        let peak = buffer.channel(0).unwrap().iter().fold(0.0f64, |m, s| m.max(s.abs()));
        assert!(peak <= 0.5 + 1e-12);
        assert!(peak > 0.4);
    }

    #[test]
    fn test_zero_duration_renders_empty_buffer() {
        let mut spec = short(ToneKind::Steady);
        spec.duration_seconds = 0.0;
        let buffer = spec.render().unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let mut spec = short(ToneKind::Steady);
        spec.frequency = 0.0;
        assert!(spec.validate().is_err());

        let mut spec = short(ToneKind::Steady);
        spec.duration_seconds = -1.0;
        assert!(spec.validate().is_err());

        let mut spec = short(ToneKind::Steady);
        spec.amplitude = f64::NAN;
        assert!(spec.render().is_err());

        let mut spec = short(ToneKind::Steady);
        spec.channels = 0;
        assert!(matches!(spec.validate(), Err(AudioError::NoChannels)));

        let mut spec = short(ToneKind::Steady);
        spec.sample_rate = 0;
        assert!(matches!(
            spec.validate(),
            Err(AudioError::InvalidSampleRate { rate: 0 })
        ));

        let mut spec = short(ToneKind::Steady);
        spec.channels = 40_000;
        assert!(matches!(
            spec.validate(),
            Err(AudioError::TooManyChannels { count: 40_000, max: 32767 })
        ));
    }

    #[test]
    fn test_oversized_tone_fails_before_rendering() {
        let spec = ToneSpec {
            duration_seconds: 1e300,
            ..TonePreset::Warble.spec()
        };
        assert!(matches!(spec.validate(), Err(AudioError::DataTooLarge { .. })));
        assert!(matches!(spec.render(), Err(AudioError::DataTooLarge { .. })));

        let spec = ToneSpec {
            duration_seconds: 1e6,
            ..TonePreset::Steady.spec()
        };
        match spec.render() {
            Err(AudioError::DataTooLarge { bytes }) => assert_eq!(bytes, 176_400_000_000),
            other => panic!("expected DataTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_data_size_limit_is_exact() {
        // 1 Hz mono: one frame per second, two bytes per frame
        let mut spec = short(ToneKind::Steady);
        spec.sample_rate = 1;
        spec.duration_seconds = ((u32::MAX as u64 - 36) / 2) as f64;
        assert!(spec.validate().is_ok());

        spec.duration_seconds += 1.0;
        assert!(matches!(spec.validate(), Err(AudioError::DataTooLarge { .. })));
    }
}
