//! Writing fetched media to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Returns true if `filename` names a single file directly inside a directory.
pub fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\'])
}

/// Writes `bytes` to `out_dir/filename`, creating `out_dir` if needed.
///
/// Refuses filenames that could escape `out_dir`, and refuses to replace an
/// existing file unless `force` is set.
pub fn save_media(out_dir: &Path, filename: &str, bytes: &[u8], force: bool) -> Result<PathBuf> {
    if !is_plain_filename(filename) {
        bail!("refusing to write unsafe filename: {:?}", filename);
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let path = out_dir.join(filename);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filenames() {
        assert!(is_plain_filename("abc_720p.mp4"));
        assert!(is_plain_filename("video.2024.mp3"));
        assert!(is_plain_filename("dQw4w9WgXcQ_1..2.mp3"));
        assert!(is_plain_filename("..........._720p.mp4"));
        assert!(!is_plain_filename(".."));
        assert!(!is_plain_filename(""));
        assert!(!is_plain_filename("."));
        assert!(!is_plain_filename("../x.mp3"));
        assert!(!is_plain_filename("a/b.mp3"));
        assert!(!is_plain_filename("a\\b.mp3"));
    }

    #[test]
    fn test_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("nested").join("out");

        let path = save_media(&out_dir, "a.mp3", b"data", false).unwrap();
        assert_eq!(path, out_dir.join("a.mp3"));
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let tmp = tempfile::tempdir().unwrap();
        save_media(tmp.path(), "a.mp3", b"one", false).unwrap();

        let err = save_media(tmp.path(), "a.mp3", b"two", false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read(tmp.path().join("a.mp3")).unwrap(), b"one");

        save_media(tmp.path(), "a.mp3", b"two", true).unwrap();
        assert_eq!(fs::read(tmp.path().join("a.mp3")).unwrap(), b"two");
    }

    #[test]
    fn test_refuses_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(save_media(tmp.path(), "../escape.mp3", b"x", true).is_err());
        assert!(!tmp.path().join("../escape.mp3").exists());
        assert!(save_media(tmp.path(), "..", b"x", true).is_err());
    }

    #[test]
    fn test_saves_names_with_repeated_dots() {
        let tmp = tempfile::tempdir().unwrap();
        let path = save_media(tmp.path(), "abc_1..2.mp4", b"data", false).unwrap();
        assert_eq!(path, tmp.path().join("abc_1..2.mp4"));
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }
}
