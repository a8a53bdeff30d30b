//! End-to-end tests for the `vidgrab` binary.
//!
//! ```bash
//! cargo test -p vidgrab-cli --test cli
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Runs the CLI with `dir` as the working directory.
fn vidgrab(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vidgrab"))
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("Failed to execute vidgrab")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_download_audio_json() {
    let tmp = tempdir().unwrap();
    let output = vidgrab(
        tmp.path(),
        &[
            "download",
            "https://youtu.be/dQw4w9WgXcQ",
            "--format",
            "mp3",
            "--quality",
            "320kbps",
            "--out-dir",
            "media",
            "--json",
        ],
    );
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["platform"], "YouTube");
    assert_eq!(json["result"]["filename"], "dQw4w9WgXcQ_320kbps.mp3");
    assert_eq!(json["result"]["mime_type"], "audio/wav");
    assert_eq!(json["result"]["payload"]["vQuality"], "320");
    assert_eq!(json["result"]["payload"]["isAudioOnly"], true);

    let path = tmp.path().join("media").join("dQw4w9WgXcQ_320kbps.mp3");
    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.duration(), 220500);
}

#[test]
fn test_download_video_human() {
    let tmp = tempdir().unwrap();
    let output = vidgrab(
        tmp.path(),
        &["download", "https://vimeo.com/76979871", "--out-dir", "."],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("SUCCESS"));
    assert!(stdout.contains("Sample Vimeo Video"));

    let saved: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("vimeo_video_"));
    assert!(saved[0].ends_with("_720p.mp4"));
}

#[test]
fn test_download_unsupported_platform() {
    let tmp = tempdir().unwrap();

    let output = vidgrab(tmp.path(), &["download", "https://example.com/v/1"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Download failed. Please try again."));

    let output = vidgrab(tmp.path(), &["download", "not a url", "--json"]);
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["code"], "REQUEST_002");
}

#[test]
fn test_download_respects_config_file() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("vidgrab.json"),
        r#"{ "out_dir": "cfg-out", "default_format": "mp3", "sample_rate": 8000 }"#,
    )
    .unwrap();

    let output = vidgrab(
        tmp.path(),
        &["download", "https://www.tiktok.com/@user/video/123456", "--json"],
    );
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["result"]["filename"], "123456_320kbps.mp3");

    let path = tmp.path().join("cfg-out").join("123456_320kbps.mp3");
    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_rate, 8000);
}

#[test]
fn test_bad_config_file_is_reported() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("broken.json"), "{ not json").unwrap();

    let output = vidgrab(tmp.path(), &["--config", "broken.json", "platforms"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_tone_then_inspect() {
    let tmp = tempdir().unwrap();
    let output = vidgrab(
        tmp.path(),
        &[
            "tone",
            "--preset",
            "steady",
            "--seconds",
            "0.1",
            "--out",
            "out/steady.wav",
            "--json",
        ],
    );
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["result"]["channels"], 2);
    assert_eq!(json["result"]["frames"], 4410);

    let reader = hound::WavReader::open(tmp.path().join("out/steady.wav")).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.len(), 4410 * 2);

    fs::write(tmp.path().join("out/broken.wav"), b"RIFF").unwrap();
    let output = vidgrab(tmp.path(), &["inspect", "out", "--json"]);
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0]["file"].as_str().unwrap().ends_with("broken.wav"));
    assert_eq!(files[0]["error"]["code"], "AUDIO_008");
    assert_eq!(files[1]["header"]["sample_rate"], 44100);
    assert_eq!(files[1]["canonical"], true);
}

#[test]
fn test_platforms_json() {
    let tmp = tempdir().unwrap();
    let output = vidgrab(tmp.path(), &["platforms", "--json"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    let names: Vec<_> = json["platforms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["YouTube", "TikTok", "Instagram", "Facebook", "Twitter", "Vimeo", "Dailymotion"]
    );
}
