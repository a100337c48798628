//! Last-synced release marker for a target repository.
//!
//! Each variant repository carries a single-line `LATEST_RELEASE` file at its
//! root. Because working copies are re-cloned fresh every run, the marker is
//! committed together with the site content; that commit is what makes the
//! up-to-date check work across runs.

use std::fs;
use std::io;
use std::path::Path;

/// Marker file name at the working copy root.
pub const MARKER_FILE: &str = "LATEST_RELEASE";

/// Checks the marker against the latest release and updates it when stale.
///
/// With `force` set, any existing marker is deleted first so the variant is
/// re-synced regardless of its recorded state.
///
/// Returns `Ok(true)` when the marker already matches `latest` byte-for-byte
/// (up to date, nothing written). Otherwise writes `latest` to `marker_path`
/// and returns `Ok(false)`.
///
/// Note the write happens before the caller knows whether the sync will
/// succeed; a later failure leaves the marker ahead of the pushed content.
pub fn check_and_update(marker_path: &Path, latest: &str, force: bool) -> io::Result<bool> {
    if force {
        match fs::remove_file(marker_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }

    if marker_path.exists() {
        let current = fs::read_to_string(marker_path)?;
        if current == latest {
            return Ok(true);
        }
    }

    fs::write(marker_path, latest)?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_check_writes_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);

        assert!(!check_and_update(&path, "v1", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1");
    }

    #[test]
    fn repeated_check_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);

        assert!(!check_and_update(&path, "v1", false).unwrap());
        assert!(check_and_update(&path, "v1", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1");
    }

    #[test]
    fn newer_release_overwrites_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);

        assert!(!check_and_update(&path, "v1", false).unwrap());
        assert!(!check_and_update(&path, "v2", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn force_rewrites_matching_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);

        assert!(!check_and_update(&path, "v1", false).unwrap());
        assert!(!check_and_update(&path, "v1", true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1");
    }

    #[test]
    fn force_tolerates_missing_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);

        assert!(!check_and_update(&path, "v1", true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1");
    }
}
