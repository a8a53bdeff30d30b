//! CLI configuration file.
//!
//! Configuration is an optional JSON document. Every field has a default, so
//! a partial file (or none at all) is valid. Command-line flags override it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vidgrab_request::MediaFormat;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vidgrab.json";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory downloads are saved to.
    pub out_dir: PathBuf,
    /// Format used when `--format` is omitted.
    pub default_format: MediaFormat,
    /// Quality used when `--quality` is omitted; falls back to the format's
    /// default when unset.
    pub default_quality: Option<String>,
    /// Sample rate for synthesized audio, in Hz.
    pub sample_rate: u32,
    /// Width of the placeholder video frame.
    pub frame_width: u32,
    /// Height of the placeholder video frame.
    pub frame_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("downloads"),
            default_format: MediaFormat::Mp4,
            default_quality: None,
            sample_rate: 44100,
            frame_width: 640,
            frame_height: 360,
        }
    }
}

impl Config {
    /// Parse a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the explicit config file, else `vidgrab.json` in `cwd` if it
    /// exists, else the defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = cwd.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(&implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Rejects values that can never work.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            anyhow::bail!("config: sample_rate must be positive");
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            anyhow::bail!(
                "config: frame size must be positive, got {}x{}",
                self.frame_width,
                self.frame_height
            );
        }
        Ok(())
    }

    /// Quality to use for `format` when none was given on the command line.
    pub fn quality_for(&self, format: MediaFormat) -> String {
        match &self.default_quality {
            Some(q) if format.quality_options().contains(&q.as_str()) => q.clone(),
            _ => format.default_quality().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.out_dir, PathBuf::from("downloads"));
        assert_eq!(config.default_format, MediaFormat::Mp4);
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.quality_for(MediaFormat::Mp4), "720p");
        assert_eq!(config.quality_for(MediaFormat::Mp3), "320kbps");
    }

    #[test]
    fn test_partial_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        fs::write(&path, r#"{ "default_format": "mp3", "default_quality": "128kbps" }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.default_format, MediaFormat::Mp3);
        assert_eq!(config.quality_for(MediaFormat::Mp3), "128kbps");
        // Quality does not apply to the other format
        assert_eq!(config.quality_for(MediaFormat::Mp4), "720p");
        assert_eq!(config.frame_width, 640);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        fs::write(&path, r#"{ "outdir": "x" }"#).unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        fs::write(&path, r#"{ "sample_rate": 0 }"#).unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_load_implicit_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(None, tmp.path()).unwrap(), Config::default());

        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "out_dir": "media" }"#,
        )
        .unwrap();
        let config = Config::load(None, tmp.path()).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("media"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.json");
        let err = Config::load(Some(&missing), tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
