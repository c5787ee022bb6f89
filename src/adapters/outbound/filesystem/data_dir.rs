use crate::shared::error::ExportError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Subdirectory holding the per-asset JSON/CSV pairs.
pub const FINDINGS_SUBDIR: &str = "findings";

/// Marker file keeping the folder tracked by git even after a run that
/// wrote nothing else.
const KEEP_MARKER: &str = ".gitinclude";
const KEEP_MARKER_TEXT: &str =
    "DO NOT DELETE - This is required to make sure that the output files are tracked by git";

/// Prepares the export data directory
///
/// By default the directory is removed first, so one run's files never mix
/// with the last run's. With `keep_existing` the old contents stay in place
/// and files are overwritten as they are re-exported.
pub fn prepare(data_dir: &Path, keep_existing: bool) -> Result<PathBuf> {
    if data_dir.exists() && !keep_existing {
        debug!(path = %data_dir.display(), "removing previous export data");
        fs::remove_dir_all(data_dir).map_err(|e| ExportError::DataDir {
            path: data_dir.to_path_buf(),
            details: e.to_string(),
        })?;
    }

    let findings_dir = data_dir.join(FINDINGS_SUBDIR);
    fs::create_dir_all(&findings_dir).map_err(|e| ExportError::DataDir {
        path: findings_dir.clone(),
        details: e.to_string(),
    })?;

    let marker = data_dir.join(KEEP_MARKER);
    if !marker.exists() {
        fs::write(&marker, KEEP_MARKER_TEXT).map_err(|e| ExportError::DataDir {
            path: marker,
            details: e.to_string(),
        })?;
    }

    info!(path = %data_dir.display(), "data folder ready");
    Ok(data_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("vulnerabilities");

        let result = prepare(&data_dir, false);

        assert!(result.is_ok());
        assert!(data_dir.join(FINDINGS_SUBDIR).is_dir());
        let marker = fs::read_to_string(data_dir.join(KEEP_MARKER)).unwrap();
        assert!(marker.starts_with("DO NOT DELETE"));
    }

    #[test]
    fn test_prepare_wipes_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("vulnerabilities");
        fs::create_dir_all(&data_dir).unwrap();
        let stale = data_dir.join("assets.csv");
        fs::write(&stale, "old").unwrap();

        prepare(&data_dir, false).unwrap();

        assert!(!stale.exists());
        assert!(data_dir.join(FINDINGS_SUBDIR).is_dir());
    }

    #[test]
    fn test_prepare_keep_existing_preserves_files() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("vulnerabilities");
        fs::create_dir_all(&data_dir).unwrap();
        let stale = data_dir.join("assets.csv");
        fs::write(&stale, "old").unwrap();

        prepare(&data_dir, true).unwrap();

        assert!(stale.exists());
        assert!(data_dir.join(FINDINGS_SUBDIR).is_dir());
    }

    #[test]
    fn test_prepare_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = prepare(&blocker.join("data"), false);

        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Failed to prepare data folder"));
    }
}
