//! Enrollment Queue Module
//!
//! First-come-first-served queue of names awaiting enrollment processing.
//! Entries join at the tail and leave from the head. The only exception is
//! undo, which can put a processed name back at the head or pull a
//! just-added name out from wherever it sits.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{RegistrarError, Result};

/// A name waiting in the enrollment queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub name: String,
}

impl QueueEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// FIFO enrollment queue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentQueue {
    entries: VecDeque<QueueEntry>,
}

impl EnrollmentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<QueueEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Append a trimmed name at the tail
    pub fn enqueue(&mut self, name: &str) -> Result<&QueueEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistrarError::InvalidInput(
                "queue name must not be blank".to_string(),
            ));
        }
        self.entries.push_back(QueueEntry::new(name));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove and return the head entry
    pub fn dequeue(&mut self) -> Result<QueueEntry> {
        self.entries.pop_front().ok_or(RegistrarError::QueueEmpty)
    }

    /// Put a name back at the head
    pub fn push_front(&mut self, name: impl Into<String>) {
        self.entries.push_front(QueueEntry::new(name));
    }

    /// Remove the first entry with exactly this name
    pub fn remove_first(&mut self, name: &str) -> Option<QueueEntry> {
        let index = self.entries.iter().position(|e| e.name == name)?;
        self.entries.remove(index)
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, QueueEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<QueueEntry> {
        self.entries.iter().cloned().collect()
    }
}
