//! Snapshot stores
//!
//! The persistence hook the engine calls after each successful mutation.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RegistrarError, Result};

use super::{decode_snapshot, encode_snapshot, Snapshot};

/// Loads and saves whole snapshots
pub trait SnapshotStore {
    /// Load the last saved snapshot, `None` if nothing was ever saved
    fn load(&mut self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// Single-file store with atomic replace
///
/// Writes go to `<file>.tmp`, are fsynced, then renamed over the target, so
/// a reader sees either the old snapshot or the new one.
#[derive(Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub const FILENAME: &'static str = "registrar.snap";

    /// Store at `{dir}/registrar.snap`, creating `dir` if needed
    pub fn open_dir(dir: &Path) -> Result<Self> {
        if dir.exists() && !dir.is_dir() {
            return Err(RegistrarError::Config(format!(
                "data_dir is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(dir)?;
        Ok(Self::new(dir.join(Self::FILENAME)))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&mut self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        decode_snapshot(&bytes).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let bytes = encode_snapshot(snapshot)?;
        let temp_path = self.temp_path();

        {
            let mut file: File = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.path)?;
        tracing::trace!(path = %self.path.display(), bytes = bytes.len(), "Snapshot written");
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// Keeps the last snapshot in memory and counts writes
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: Option<Snapshot>,
    writes: usize,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            writes: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&mut self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        self.writes += 1;
        Ok(())
    }
}
