//! # Level-Up Planner backend
//!
//! Domain services and storage for the planner, consumable two ways:
//! in-process by the egui front end, or over HTTP via the REST layer in
//! [`rest`] (served by the `levelup-planner-server` binary).
//!
//! All domain operations are synchronous; each calculation is independent
//! and stateless, so there is nothing to share or lock.

use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod domain;
pub mod rest;
pub mod storage;

pub use storage::FormSnapshotStorage;

/// Main backend struct that orchestrates all services.
#[derive(Clone)]
pub struct Backend {
    pub projection_service: domain::ProjectionService,
    pub timezone_catalog: domain::TimezoneCatalog,
    pub validation_service: domain::ValidationService,
    pub form_snapshot_store: storage::YamlFormSnapshotRepository,
}

impl Backend {
    /// Create a backend rooted at the platform data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_data_dir(&default_data_dir()?))
    }

    /// Create a backend rooted at an explicit data directory (tests use a
    /// temp dir here).
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self {
            projection_service: domain::ProjectionService::new(),
            timezone_catalog: domain::TimezoneCatalog::new(),
            validation_service: domain::ValidationService::new(),
            form_snapshot_store: storage::YamlFormSnapshotRepository::new(data_dir),
        }
    }
}

/// Platform data directory for the planner, e.g.
/// `~/.local/share/levelup-planner` on Linux.
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "levelup-planner")
        .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory"))?;
    Ok(dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn backend_wires_up_all_services() {
        let dir = tempdir().expect("Failed to create temp dir");
        let backend = Backend::with_data_dir(dir.path());

        assert!(backend.timezone_catalog.lookup("Asia/Shanghai").is_some());
        assert!(backend
            .form_snapshot_store
            .load_snapshot()
            .expect("Load should not fail")
            .is_none());
    }
}
