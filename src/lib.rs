//! # Registrar
//!
//! An in-memory student roster with:
//! - Grade ordering via bubble, selection, insertion or the native sort
//! - Name/ID lookup with binary search and a substring fallback
//! - First-come-first-served enrollment queue
//! - Multi-step undo of the most recent mutations
//! - Whole-state snapshots after every mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Engine                              │
//! │             (owned context, single logical caller)           │
//! └───────┬──────────────┬──────────────┬──────────────┬────────┘
//!         │              │              │              │
//!         ▼              ▼              ▼              ▼
//!   ┌──────────┐  ┌────────────┐  ┌──────────┐  ┌────────────┐
//!   │  Roster  │  │ Enrollment │  │   Undo   │  │  Snapshot  │
//!   │  (Vec)   │  │   Queue    │  │  Ledger  │  │   Store    │
//!   └────┬─────┘  └────────────┘  └──────────┘  └────────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐  ┌──────────┐
//!   │ Ordering │  │  Lookup  │
//!   │ (pure)   │  │  (pure)  │
//!   └──────────┘  └──────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod roster;
pub mod ordering;
pub mod lookup;
pub mod queue;
pub mod ledger;
pub mod snapshot;
pub mod report;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RegistrarError, Result};
pub use config::{Config, SnapshotSyncStrategy};
pub use engine::{Counts, Engine, UpsertOutcome};
pub use ledger::{UndoAction, UndoReport};
pub use lookup::SearchField;
pub use ordering::SortAlgorithm;
pub use roster::StudentRecord;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Registrar
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
