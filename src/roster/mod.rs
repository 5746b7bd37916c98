//! Roster Module
//!
//! The canonical in-memory collection of student records.
//!
//! ## Responsibilities
//! - Hold records in entry order, keyed logically by identifier
//! - Enforce identifier uniqueness on insert
//! - Provide value-semantics snapshots (`Clone`) for the undo ledger
//! - Parse free-form grade input
//!
//! ## Data Structure Choice
//! A plain `Vec<StudentRecord>`:
//! - Entry order is observable (listings, substring fallback in lookup)
//! - Rosters are small; linear id lookup is fine

mod record;
mod store;

pub use record::{parse_grades, StudentRecord};
pub use store::Roster;
