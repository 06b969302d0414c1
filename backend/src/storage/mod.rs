//! Storage abstraction for the planner.
//!
//! The only persisted state is the last-entered form snapshot. The trait
//! keeps the domain layer independent of the concrete file format.

use anyhow::Result;
use shared::FormSnapshot;

pub mod yaml;

pub use yaml::YamlFormSnapshotRepository;

/// Interface for persisting the last-entered form values.
///
/// All operations are synchronous; the snapshot is a single small record.
pub trait FormSnapshotStorage: Send + Sync {
    /// Load the stored snapshot. Missing or unreadable data yields `None`
    /// rather than an error so a fresh form always comes up.
    fn load_snapshot(&self) -> Result<Option<FormSnapshot>>;

    /// Persist the snapshot, replacing any previous one.
    fn save_snapshot(&self, snapshot: &FormSnapshot) -> Result<()>;

    /// Remove the stored snapshot (used by the form's reset action).
    fn clear_snapshot(&self) -> Result<()>;
}
