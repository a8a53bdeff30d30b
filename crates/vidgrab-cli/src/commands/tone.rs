//! Tone command implementation
//!
//! Renders a tone preset (optionally overridden from the command line) and
//! writes it as a 16-bit PCM WAV file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use vidgrab_audio::{AudioError, TonePreset, ToneSpec, WavResult};

use super::json_output::{error_codes, print_json, JsonError, ToneOutput, ToneResult};
use crate::config::Config;

/// Command-line options for `tone`.
#[derive(Debug, Clone, Default)]
pub struct ToneOptions<'a> {
    /// Preset name; `warble` when omitted.
    pub preset: Option<&'a str>,
    /// Sample rate; the config value when omitted.
    pub sample_rate: Option<u32>,
    /// Channel count override.
    pub channels: Option<usize>,
    /// Duration override in seconds.
    pub seconds: Option<f64>,
    /// Frequency override in Hz.
    pub frequency: Option<f64>,
    /// Amplitude override.
    pub amplitude: Option<f64>,
}

fn audio_error(e: AudioError) -> JsonError {
    JsonError::new(e.code(), e.to_string())
}

/// Resolves the preset and overrides into a full tone spec.
pub fn resolve_spec(
    options: &ToneOptions<'_>,
    config: &Config,
) -> Result<(TonePreset, ToneSpec), JsonError> {
    let preset = match options.preset {
        Some(name) => name.parse::<TonePreset>().map_err(audio_error)?,
        None => TonePreset::Warble,
    };

    let mut spec = preset.spec();
    spec.sample_rate = options.sample_rate.unwrap_or(config.sample_rate);
    if let Some(channels) = options.channels {
        spec.channels = channels;
    }
    if let Some(seconds) = options.seconds {
        spec.duration_seconds = seconds;
    }
    if let Some(frequency) = options.frequency {
        spec.frequency = frequency;
    }
    if let Some(amplitude) = options.amplitude {
        spec.amplitude = amplitude;
    }
    spec.validate().map_err(audio_error)?;

    Ok((preset, spec))
}

/// Renders the tone and writes it to `out`.
pub fn render_to_file(
    options: &ToneOptions<'_>,
    config: &Config,
    out: &Path,
) -> Result<ToneResult, JsonError> {
    let (preset, spec) = resolve_spec(options, config)?;
    let buffer = spec.render().map_err(audio_error)?;
    let wav = WavResult::from_buffer(&buffer);

    let write_error = |e: std::io::Error| {
        JsonError::new(error_codes::FILE_WRITE, e.to_string()).with_file(out.display().to_string())
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(out, &wav.wav_data).map_err(write_error)?;

    Ok(ToneResult {
        path: out.display().to_string(),
        preset: preset.to_string(),
        channels: wav.channels(),
        sample_rate: wav.sample_rate(),
        frames: wav.num_frames,
        duration_seconds: wav.duration_seconds(),
        size_bytes: wav.wav_data.len(),
        pcm_hash: wav.pcm_hash,
    })
}

/// Run the tone command
///
/// # Returns
/// Exit code: 0 if the file was written, 1 otherwise
pub fn run(
    options: &ToneOptions<'_>,
    out: &Path,
    config: &Config,
    verbose: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let outcome = render_to_file(options, config, out);

    if json_output {
        return match outcome {
            Ok(result) => {
                print_json(&ToneOutput::success(result))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                print_json(&ToneOutput::failure(vec![error]))?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!("{} {}", "Rendering tone:".cyan().bold(), out.display());
    match outcome {
        Ok(result) => {
            println!("{} {}", "Preset:".dimmed(), result.preset);
            println!(
                "{} {} ch, {} Hz, {} frames ({:.2}s)",
                "Format:".dimmed(),
                result.channels,
                result.sample_rate,
                result.frames,
                result.duration_seconds
            );
            if verbose {
                println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash);
            }
            println!(
                "\n{} Wrote {} bytes",
                "SUCCESS".green().bold(),
                result.size_bytes
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("\n{} {}", "FAILED".red().bold(), error.message);
            Ok(ExitCode::from(1))
        }
    }
}
