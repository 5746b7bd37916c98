//! Undo action definitions
//!
//! Each variant holds exactly what is needed to invert one mutation. Records
//! are owned clones taken at the time of the mutation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ordering::SortAlgorithm;
use crate::queue::EnrollmentQueue;
use crate::roster::{Roster, StudentRecord};

/// One recorded, reversible mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UndoAction {
    /// A record was inserted
    Add { record: StudentRecord },

    /// A record was overwritten
    Edit {
        student_id: String,
        previous: StudentRecord,
        updated: StudentRecord,
    },

    /// A record was removed
    Delete { record: StudentRecord },

    /// A name joined the enrollment queue
    QueueAdd { name: String },

    /// A name was taken from the head of the enrollment queue
    QueueProcess { name: String },

    /// Grades were sorted (informational; nothing to restore)
    Sort {
        algorithm: SortAlgorithm,
        original: Vec<f64>,
        sorted: Vec<f64>,
    },
}

impl UndoAction {
    /// Short label for status counters
    pub fn label(&self) -> &'static str {
        match self {
            UndoAction::Add { .. } => "Added Record",
            UndoAction::Edit { .. } => "Edited Record",
            UndoAction::Delete { .. } => "Deleted Record",
            UndoAction::QueueAdd { .. } => "Added to Queue",
            UndoAction::QueueProcess { .. } => "Processed Queue",
            UndoAction::Sort { .. } => "Sorted Grades",
        }
    }

    /// One-line description of what would be undone
    pub fn describe(&self) -> String {
        match self {
            UndoAction::Add { record } => {
                format!("Added Record: {} (ID: {})", record.name, record.id)
            }
            UndoAction::Edit {
                student_id,
                previous,
                ..
            } => format!("Edited Record: {} (ID: {})", previous.name, student_id),
            UndoAction::Delete { record } => {
                format!("Deleted Record: {} (ID: {})", record.name, record.id)
            }
            UndoAction::QueueAdd { name } => format!("Added to Queue: {}", name),
            UndoAction::QueueProcess { name } => format!("Processed from Queue: {}", name),
            UndoAction::Sort { algorithm, .. } => format!("Sorted Grades using {}", algorithm),
        }
    }

    /// Apply the inverse of this action and describe what changed
    pub fn revert(self, roster: &mut Roster, queue: &mut EnrollmentQueue) -> Result<String> {
        let message = match self {
            UndoAction::Add { record } => match roster.remove(&record.id) {
                Some(removed) => format!("Removed student {}", removed.name),
                None => {
                    tracing::warn!(id = %record.id, "Undo add: record already gone");
                    format!("Student {} was no longer in the roster", record.name)
                }
            },
            UndoAction::Edit {
                student_id,
                previous,
                ..
            } => {
                if roster.contains(&student_id) {
                    let name = previous.name.clone();
                    roster.replace(&student_id, previous)?;
                    format!("Restored student {}", name)
                } else {
                    tracing::warn!(id = %student_id, "Undo edit: record no longer exists");
                    format!("Student {} was no longer in the roster", student_id)
                }
            }
            UndoAction::Delete { record } => {
                let name = record.name.clone();
                roster.insert(record)?;
                format!("Restored student {}", name)
            }
            UndoAction::QueueAdd { name } => match queue.remove_first(&name) {
                Some(_) => format!("Removed {} from queue", name),
                None => {
                    tracing::warn!(%name, "Undo queue add: name no longer queued");
                    format!("{} was no longer in the queue", name)
                }
            },
            UndoAction::QueueProcess { name } => {
                let message = format!("Added {} back to queue", name);
                queue.push_front(name);
                message
            }
            UndoAction::Sort { algorithm, .. } => {
                format!("Cleared {} from history", algorithm)
            }
        };

        Ok(message)
    }
}
