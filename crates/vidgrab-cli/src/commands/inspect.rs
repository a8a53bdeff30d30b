//! Inspect command implementation
//!
//! Parses the header of a WAV file, or of every `.wav` file under a
//! directory, and reports its format.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use vidgrab_audio::wav::{extract_pcm_data, hash_pcm};
use vidgrab_audio::WavHeader;
use walkdir::WalkDir;

use super::json_output::{error_codes, print_json, InspectOutput, InspectResult, JsonError};

/// Lists `.wav` files under `dir`, sorted by path.
pub fn find_wav_files(dir: &Path) -> Vec<PathBuf> {
    let mut wav_files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    // Sort for deterministic output
    wav_files.sort();
    wav_files
}

/// Inspects a single file.
pub fn inspect_file(path: &Path) -> InspectResult {
    let file = path.display().to_string();
    let mut result = InspectResult {
        file: file.clone(),
        header: None,
        canonical: None,
        pcm_hash: None,
        error: None,
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            result.error = Some(JsonError::new(error_codes::FILE_READ, e.to_string()).with_file(file));
            return result;
        }
    };

    match WavHeader::parse(&bytes) {
        Ok(header) => {
            result.canonical = Some(header.is_canonical());
            result.pcm_hash = extract_pcm_data(&bytes).map(hash_pcm);
            result.header = Some(header);
        }
        Err(e) => {
            result.error = Some(JsonError::new(e.code(), e.to_string()).with_file(file));
        }
    }
    result
}

/// Inspects `path`, which may be a file or a directory.
pub fn inspect_path(path: &Path) -> Result<Vec<InspectResult>, JsonError> {
    if path.is_dir() {
        Ok(find_wav_files(path).iter().map(|p| inspect_file(p)).collect())
    } else if path.exists() {
        Ok(vec![inspect_file(path)])
    } else {
        Err(
            JsonError::new(error_codes::NOT_FOUND, "path does not exist")
                .with_file(path.display().to_string()),
        )
    }
}

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 if every file parsed, 1 otherwise
pub fn run(path: &Path, verbose: bool, json_output: bool) -> Result<ExitCode> {
    let outcome = inspect_path(path);

    if json_output {
        let output = match outcome {
            Ok(files) => InspectOutput::new(files),
            Err(error) => InspectOutput::failure(vec![error]),
        };
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    println!("{} {}", "Inspecting:".cyan().bold(), path.display());
    let files = match outcome {
        Ok(files) => files,
        Err(error) => {
            println!("\n{} {}", "FAILED".red().bold(), error.message);
            return Ok(ExitCode::from(1));
        }
    };

    if files.is_empty() {
        println!("  {} no .wav files found", "!".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    let mut failures = 0usize;
    for result in &files {
        println!("\n{}", result.file.bold());
        if let Some(error) = &result.error {
            failures += 1;
            println!("  {} {}", "x".red(), error.message);
            continue;
        }
        if let Some(header) = &result.header {
            println!(
                "  {} {} ch, {} Hz, {}-bit",
                "Format:".dimmed(),
                header.channels,
                header.sample_rate,
                header.bits_per_sample
            );
            println!(
                "  {} {} frames ({:.3}s)",
                "Length:".dimmed(),
                header.frames,
                header.duration_seconds
            );
            if verbose {
                println!(
                    "  {} byte rate {}, block align {}, data {} bytes, riff {} bytes",
                    "Header:".dimmed(),
                    header.byte_rate,
                    header.block_align,
                    header.data_size,
                    header.riff_size
                );
                if let Some(hash) = &result.pcm_hash {
                    println!("  {} {}", "PCM hash:".dimmed(), hash);
                }
            }
        }
        if result.canonical == Some(false) {
            println!("  {} header fields are inconsistent", "!".yellow());
        }
    }

    if failures == 0 {
        println!("\n{} {} file(s) inspected", "SUCCESS".green().bold(), files.len());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} file(s) could not be parsed",
            "FAILED".red().bold(),
            failures,
            files.len()
        );
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vidgrab_audio::{encode_wav, AudioBuffer};

    fn write_wav(path: &Path, channels: usize, frames: usize) {
        let buffer = AudioBuffer::silent(8000, channels, frames).unwrap();
        fs::write(path, encode_wav(&buffer)).unwrap();
    }

    #[test]
    fn test_find_wav_files_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        write_wav(&tmp.path().join("b.wav"), 1, 4);
        write_wav(&tmp.path().join("nested").join("a.WAV"), 1, 4);
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let files = find_wav_files(tmp.path());
        assert_eq!(
            files,
            vec![tmp.path().join("b.wav"), tmp.path().join("nested").join("a.WAV")]
        );
    }

    #[test]
    fn test_inspect_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("x.wav");
        write_wav(&path, 2, 10);

        let result = inspect_file(&path);
        assert!(result.error.is_none());
        let header = result.header.unwrap();
        assert_eq!(header.channels, 2);
        assert_eq!(header.frames, 10);
        assert_eq!(result.canonical, Some(true));
        assert_eq!(result.pcm_hash.map(|h| h.len()), Some(64));
    }

    #[test]
    fn test_inspect_invalid_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.wav");
        fs::write(&path, b"not a wav file").unwrap();

        let result = inspect_file(&path);
        assert!(result.header.is_none());
        assert_eq!(result.error.unwrap().code, "AUDIO_008");
    }

    #[test]
    fn test_inspect_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = inspect_path(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(err.code, error_codes::NOT_FOUND);
    }

    #[test]
    fn test_inspect_directory() {
        let tmp = tempfile::tempdir().unwrap();
        write_wav(&tmp.path().join("a.wav"), 1, 4);
        fs::write(tmp.path().join("b.wav"), b"RIFF").unwrap();

        let results = inspect_path(tmp.path()).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].error.is_none());
        assert!(results[1].error.is_some());
        assert!(!InspectOutput::new(results).success);
    }
}
