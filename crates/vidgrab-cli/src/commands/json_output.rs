//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. In that mode nothing colored is printed;
//! a single pretty-printed document goes to stdout instead.

use anyhow::{Context, Result};
use serde::Serialize;
use vidgrab_audio::WavHeader;
use vidgrab_request::DownloadPayload;

/// Error codes for CLI operations.
///
/// Library errors pass their own codes through (`AUDIO_00x`,
/// `REQUEST_00x`, `SOURCE_00x`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Path to inspect does not exist
    pub const NOT_FOUND: &str = "CLI_003";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Quality label is not offered for the chosen format
    pub const QUALITY_MISMATCH: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Pretty-prints `output` to stdout.
pub fn print_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// JSON output for the `download` command.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadOutput {
    /// Whether the download succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings about the request
    pub warnings: Vec<JsonWarning>,
    /// Download details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DownloadResult>,
}

/// Details of a completed download.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResult {
    /// Platform display name
    pub platform: String,
    /// Media title
    pub title: String,
    /// Reported duration in seconds
    pub duration_seconds: u32,
    /// Thumbnail URL (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Requested format
    pub format: String,
    /// Requested quality label
    pub quality: String,
    /// Suggested filename
    pub filename: String,
    /// Where the file was written
    pub path: String,
    /// MIME type of the written bytes
    pub mime_type: String,
    /// File size in bytes
    pub size_bytes: usize,
    /// BLAKE3 hash of the PCM payload (audio only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Request object an extraction backend would receive
    pub payload: DownloadPayload,
}

impl DownloadOutput {
    /// Creates a successful download output.
    pub fn success(result: DownloadResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed download output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `tone` command.
#[derive(Debug, Clone, Serialize)]
pub struct ToneOutput {
    /// Whether the tone was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Tone details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ToneResult>,
}

/// Details of a rendered tone.
#[derive(Debug, Clone, Serialize)]
pub struct ToneResult {
    /// Output file
    pub path: String,
    /// Preset the tone started from
    pub preset: String,
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Frames per channel
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Total file size in bytes
    pub size_bytes: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

impl ToneOutput {
    /// Creates a successful tone output.
    pub fn success(result: ToneResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed tone output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// True when every file parsed
    pub success: bool,
    /// Errors not tied to a single file
    pub errors: Vec<JsonError>,
    /// One entry per inspected file
    pub files: Vec<InspectResult>,
}

/// Inspection of one file.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    /// File path
    pub file: String,
    /// Parsed header (when the file is a valid PCM WAV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<WavHeader>,
    /// Whether the header fields are mutually consistent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<bool>,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Why the file could not be inspected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl InspectOutput {
    /// Builds the output, deriving `success` from the per-file results.
    pub fn new(files: Vec<InspectResult>) -> Self {
        Self {
            success: files.iter().all(|f| f.error.is_none()),
            errors: Vec::new(),
            files,
        }
    }

    /// Creates an output for a failure before any file was read.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            files: Vec::new(),
        }
    }
}

/// JSON output for the `platforms` command.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformsOutput {
    /// Supported platforms
    pub platforms: Vec<PlatformEntry>,
}

/// One supported platform.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformEntry {
    /// Display name
    pub name: String,
    /// Accepted domains
    pub domains: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("CLI_001", "test error").with_file("a.wav");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"CLI_001\""));
        assert!(json.contains("\"message\":\"test error\""));
        assert!(json.contains("\"file\":\"a.wav\""));
    }

    #[test]
    fn test_json_error_optional_fields_skipped() {
        let error = JsonError::new("CLI_001", "test error");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("\"file\""));
    }

    #[test]
    fn test_download_failure_has_no_result() {
        let output = DownloadOutput::failure(
            vec![JsonError::new("REQUEST_003", "unsupported platform")],
            vec![],
        );
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["code"], "REQUEST_003");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_inspect_success_tracks_file_errors() {
        let ok = InspectResult {
            file: "a.wav".to_string(),
            header: None,
            canonical: None,
            pcm_hash: None,
            error: None,
        };
        let bad = InspectResult {
            error: Some(JsonError::new("AUDIO_008", "invalid WAV")),
            file: "b.wav".to_string(),
            ..ok.clone()
        };

        assert!(InspectOutput::new(vec![ok.clone()]).success);
        assert!(!InspectOutput::new(vec![ok, bad]).success);
    }
}
