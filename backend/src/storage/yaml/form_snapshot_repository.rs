//! # YAML Form Snapshot Repository
//!
//! File-based persistence for the last-entered form values using a single
//! YAML file `form_snapshot.yaml` in the app data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! required_amount: "1,000,000"
//! current_amount: "250,000"
//! rate_per_hour: "12,500"
//! timezone: "Asia/Shanghai"
//! dark_mode: false
//! ```
//!
//! ## Features
//!
//! - Single snapshot file, replaced on every save
//! - Atomic file writes with temp files
//! - Corrupt or missing files load as "no snapshot"

use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::FormSnapshotStorage;
use shared::FormSnapshot;

const SNAPSHOT_FILE: &str = "form_snapshot.yaml";

/// YAML-file implementation of [`FormSnapshotStorage`].
#[derive(Debug, Clone)]
pub struct YamlFormSnapshotRepository {
    snapshot_path: PathBuf,
}

impl YamlFormSnapshotRepository {
    /// Create a repository rooted at the given data directory.
    pub fn new(base_directory: &Path) -> Self {
        Self {
            snapshot_path: base_directory.join(SNAPSHOT_FILE),
        }
    }

    /// Path of the snapshot file (exposed for diagnostics).
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

impl FormSnapshotStorage for YamlFormSnapshotRepository {
    fn load_snapshot(&self) -> Result<Option<FormSnapshot>> {
        if !self.snapshot_path.exists() {
            debug!("No form snapshot at {:?}", self.snapshot_path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.snapshot_path)?;
        match serde_yaml::from_str::<FormSnapshot>(&contents) {
            Ok(snapshot) => {
                debug!("Loaded form snapshot from {:?}", self.snapshot_path);
                Ok(Some(snapshot))
            }
            Err(e) => {
                // A corrupt snapshot is not worth failing startup over.
                warn!("Ignoring unreadable form snapshot: {}", e);
                Ok(None)
            }
        }
    }

    fn save_snapshot(&self, snapshot: &FormSnapshot) -> Result<()> {
        if let Some(parent) = self.snapshot_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(snapshot)?;
        let temp_path = self.snapshot_path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, &self.snapshot_path)?;

        debug!("Saved form snapshot to {:?}", self.snapshot_path);
        Ok(())
    }

    fn clear_snapshot(&self) -> Result<()> {
        if self.snapshot_path.exists() {
            fs::remove_file(&self.snapshot_path)?;
            debug!("Cleared form snapshot at {:?}", self.snapshot_path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_snapshot() -> FormSnapshot {
        FormSnapshot {
            required_amount: "1,000,000".to_string(),
            current_amount: "250,000".to_string(),
            rate_per_hour: "12,500".to_string(),
            timezone: "Asia/Tokyo".to_string(),
            dark_mode: true,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("Failed to create temp dir");
        let repo = YamlFormSnapshotRepository::new(dir.path());

        let snapshot = sample_snapshot();
        repo.save_snapshot(&snapshot).expect("Failed to save snapshot");

        let loaded = repo.load_snapshot().expect("Failed to load snapshot");
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn load_without_file_returns_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let repo = YamlFormSnapshotRepository::new(dir.path());
        assert_eq!(repo.load_snapshot().expect("Load should not fail"), None);
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let repo = YamlFormSnapshotRepository::new(dir.path());

        fs::write(repo.snapshot_path(), "{{{ not yaml").expect("Failed to write corrupt file");
        assert_eq!(repo.load_snapshot().expect("Load should not fail"), None);
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let dir = tempdir().expect("Failed to create temp dir");
        let repo = YamlFormSnapshotRepository::new(dir.path());

        repo.save_snapshot(&sample_snapshot()).expect("Failed to save first snapshot");
        let mut updated = sample_snapshot();
        updated.current_amount = "300,000".to_string();
        repo.save_snapshot(&updated).expect("Failed to save second snapshot");

        let loaded = repo.load_snapshot().expect("Failed to load snapshot");
        assert_eq!(loaded, Some(updated));
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let repo = YamlFormSnapshotRepository::new(dir.path());

        repo.save_snapshot(&sample_snapshot()).expect("Failed to save snapshot");
        repo.clear_snapshot().expect("Failed to clear snapshot");
        assert!(!repo.snapshot_path().exists());

        // Clearing an already-empty store is a no-op.
        repo.clear_snapshot().expect("Second clear should not fail");
    }
}
