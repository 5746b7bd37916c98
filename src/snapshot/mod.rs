//! Snapshot Module
//!
//! Externalizes roster, queue and (optionally) undo history as one opaque,
//! all-or-nothing snapshot. The last full snapshot written wins.
//!
//! ## File Format
//! ```text
//! ┌──────────┬────────────┬────────────┬─────────┬──────────────────┐
//! │Magic (4) │Version (2) │PayloadLen 4│ CRC (4) │ bincode payload  │
//! └──────────┴────────────┴────────────┴─────────┴──────────────────┘
//! ```
//! All integers little-endian. The CRC covers the payload only.

mod codec;
mod store;

use serde::{Deserialize, Serialize};

use crate::ledger::UndoAction;
use crate::queue::QueueEntry;
use crate::roster::StudentRecord;

pub use codec::{decode_snapshot, encode_snapshot, HEADER_SIZE, MAGIC, VERSION};
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

/// Full state at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub students: Vec<StudentRecord>,

    #[serde(rename = "enrollmentQueue")]
    pub enrollment_queue: Vec<QueueEntry>,

    /// Empty when history persistence is disabled
    #[serde(rename = "actionHistory", default)]
    pub action_history: Vec<UndoAction>,
}

impl Snapshot {
    pub fn new(students: Vec<StudentRecord>, enrollment_queue: Vec<QueueEntry>) -> Self {
        Self {
            students,
            enrollment_queue,
            action_history: Vec::new(),
        }
    }

    /// Demonstration roster: five students and four queued names
    pub fn sample() -> Self {
        let students = vec![
            StudentRecord::new("2023-001", "Ana Santos", "BSCS 2nd Year", vec![92.1, 89.5, 94.0]),
            StudentRecord::new("2023-002", "Juan Dela Cruz", "BSIT 3rd Year", vec![85.0, 88.0, 90.0]),
            StudentRecord::new("2023-003", "Maria Reyes", "BSCS 2nd Year", vec![96.2, 94.5, 95.0]),
            StudentRecord::new("2023-004", "Pedro Dizon", "BSIT 2nd Year", vec![78.0, 82.0, 80.0]),
            StudentRecord::new("2023-005", "Carla Lopez", "BSCS 3rd Year", vec![91.0, 93.0, 92.5]),
        ];
        let queue = ["Dela Cruz, Juan", "Santos, Ana", "Reyes, Mark", "Dizon, Carla"]
            .into_iter()
            .map(QueueEntry::new)
            .collect();

        Self::new(students, queue)
    }

    /// True when there is no roster to speak of (seeding applies)
    pub fn has_no_students(&self) -> bool {
        self.students.is_empty()
    }
}
