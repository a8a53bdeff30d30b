//! Download command implementation
//!
//! Validates a URL, fetches placeholder media from the synthetic source, and
//! saves it under the suggested filename.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use vidgrab_audio::TonePreset;
use vidgrab_request::{suggest_filename, DownloadRequest, MediaFormat, RequestError};

use super::json_output::{
    error_codes, print_json, warning_codes, DownloadOutput, DownloadResult, JsonError, JsonWarning,
};
use crate::config::Config;
use crate::save::save_media;
use crate::source::{FetchedMedia, MediaSource, SyntheticSource};

/// Message shown for any failed download.
pub const FAILURE_MESSAGE: &str = "Download failed. Please try again.";

/// Command-line options for `download`.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions<'a> {
    /// URL as entered.
    pub url: &'a str,
    /// Format name; the config default when omitted.
    pub format: Option<&'a str>,
    /// Quality label; the config default when omitted.
    pub quality: Option<&'a str>,
    /// Output directory; the config default when omitted.
    pub out_dir: Option<&'a Path>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// A completed download.
#[derive(Debug, Clone)]
pub struct Downloaded {
    /// The validated request.
    pub request: DownloadRequest,
    /// What the source returned.
    pub media: FetchedMedia,
    /// Suggested filename.
    pub filename: String,
    /// Where the file was written.
    pub path: PathBuf,
    /// Non-fatal problems with the request.
    pub warnings: Vec<JsonWarning>,
}

fn request_error(e: RequestError) -> JsonError {
    JsonError::new(e.code(), e.to_string())
}

/// Warnings about a request that is valid but probably not what was meant.
pub fn request_warnings(request: &DownloadRequest) -> Vec<JsonWarning> {
    if request.quality_matches_format() {
        return Vec::new();
    }
    vec![JsonWarning::new(
        warning_codes::QUALITY_MISMATCH,
        format!(
            "quality '{}' is not offered for {}; backend will receive {}",
            request.quality(),
            request.format(),
            request.payload().v_quality
        ),
    )]
}

/// Performs a download against `source`, stamping the filename with `now`.
pub fn download(
    options: &DownloadOptions<'_>,
    config: &Config,
    source: &dyn MediaSource,
    now: DateTime<Utc>,
) -> Result<Downloaded, JsonError> {
    let format = match options.format {
        Some(name) => name.parse::<MediaFormat>().map_err(request_error)?,
        None => config.default_format,
    };
    let quality = match options.quality {
        Some(q) => q.to_string(),
        None => config.quality_for(format),
    };

    let request = DownloadRequest::new(options.url, format, quality).map_err(request_error)?;
    let warnings = request_warnings(&request);

    let media = source
        .fetch(&request)
        .map_err(|e| JsonError::new(e.code(), e.to_string()))?;

    let filename = suggest_filename(request.url(), format, request.quality(), now);
    let out_dir = options.out_dir.unwrap_or(config.out_dir.as_path());
    let path = save_media(out_dir, &filename, &media.bytes, options.force)
        .map_err(|e| JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e)))?;

    Ok(Downloaded {
        request,
        media,
        filename,
        path,
        warnings,
    })
}

/// Builds the synthetic source described by `config`.
pub fn source_for(config: &Config) -> SyntheticSource {
    let mut tone = TonePreset::Warble.spec();
    tone.sample_rate = config.sample_rate;
    SyntheticSource::new(tone, config.frame_width, config.frame_height)
}

/// Run the download command
///
/// # Returns
/// Exit code: 0 if the file was saved, 1 otherwise
pub fn run(
    options: &DownloadOptions<'_>,
    config: &Config,
    verbose: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let source = source_for(config);
    let outcome = download(options, config, &source, Utc::now());

    if json_output {
        run_json(outcome)
    } else {
        run_human(options.url, outcome, verbose)
    }
}

fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Render download with human-readable (colored) output
fn run_human(url: &str, outcome: Result<Downloaded, JsonError>, verbose: bool) -> Result<ExitCode> {
    println!("{} {}", "Downloading:".cyan().bold(), url.trim());

    let done = match outcome {
        Ok(done) => done,
        Err(error) => {
            println!("\n{} {}", "FAILED".red().bold(), FAILURE_MESSAGE);
            if verbose {
                println!("  {} {}", error.code.dimmed(), error.message);
            }
            return Ok(ExitCode::from(1));
        }
    };

    let request = &done.request;
    println!("{} {}", "Platform:".dimmed(), request.platform());
    println!(
        "{} {} ({})",
        "Format:".dimmed(),
        request.format(),
        request.quality()
    );
    for warning in &done.warnings {
        println!("  {} {}", "!".yellow(), warning.message);
    }

    if verbose {
        let payload = serde_json::to_string(&request.payload())?;
        println!("{} {}", "Payload:".dimmed(), payload);
    }

    println!("{} {}", "Title:".dimmed(), done.media.title);
    println!(
        "{} {}",
        "Duration:".dimmed(),
        format_duration(done.media.duration_seconds)
    );
    if verbose {
        if let Some(thumbnail) = &done.media.thumbnail {
            println!("{} {}", "Thumbnail:".dimmed(), thumbnail);
        }
        println!("{} {}", "Content:".dimmed(), done.media.mime_type);
        if let Some(hash) = &done.media.pcm_hash {
            println!("{} {}", "PCM hash:".dimmed(), &hash[..16]);
        }
    }

    println!(
        "\n{} Saved {} ({} bytes)",
        "SUCCESS".green().bold(),
        done.path.display(),
        done.media.bytes.len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Render download with machine-readable JSON output
fn run_json(outcome: Result<Downloaded, JsonError>) -> Result<ExitCode> {
    match outcome {
        Ok(done) => {
            let result = DownloadResult {
                platform: done.request.platform().to_string(),
                title: done.media.title,
                duration_seconds: done.media.duration_seconds,
                thumbnail: done.media.thumbnail,
                format: done.request.format().to_string(),
                quality: done.request.quality().to_string(),
                filename: done.filename,
                path: done.path.display().to_string(),
                mime_type: done.media.mime_type.to_string(),
                size_bytes: done.media.bytes.len(),
                pcm_hash: done.media.pcm_hash,
                payload: done.request.payload(),
            };
            print_json(&DownloadOutput::success(result, done.warnings))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_json(&DownloadOutput::failure(vec![error], vec![]))?;
            Ok(ExitCode::from(1))
        }
    }
}
