//! Configuration for Registrar
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::snapshot::Snapshot;

/// Main configuration for a Registrar engine
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the snapshot file
    /// Internal structure:
    ///   {data_dir}/
    ///     └── registrar.snap   (latest full snapshot)
    pub data_dir: PathBuf,

    /// When to write a snapshot
    pub sync_strategy: SnapshotSyncStrategy,

    /// Whether the undo history travels with the snapshot
    pub persist_history: bool,

    // -------------------------------------------------------------------------
    // Seed Configuration
    // -------------------------------------------------------------------------
    /// Initial roster + queue, applied only when no existing state is found
    pub seed: Option<Snapshot>,
}

/// Snapshot sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSyncStrategy {
    /// Write a full snapshot after every successful mutation
    EveryMutation,

    /// Write only on explicit flush/close
    Manual,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./registrar_data"),
            sync_strategy: SnapshotSyncStrategy::EveryMutation,
            persist_history: true,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the snapshot sync strategy
    pub fn sync_strategy(mut self, strategy: SnapshotSyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Persist (or not) the undo history alongside roster and queue
    pub fn persist_history(mut self, enabled: bool) -> Self {
        self.config.persist_history = enabled;
        self
    }

    /// Set the seed snapshot used when no existing state is present
    pub fn seed(mut self, seed: Snapshot) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Seed with the built-in sample roster
    pub fn sample_seed(self) -> Self {
        self.seed(Snapshot::sample())
    }

    pub fn build(self) -> Config {
        self.config
    }
}
