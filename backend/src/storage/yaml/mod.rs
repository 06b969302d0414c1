pub mod form_snapshot_repository;

pub use form_snapshot_repository::YamlFormSnapshotRepository;
