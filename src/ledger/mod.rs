//! Undo Ledger Module
//!
//! LIFO history of reversible mutations.
//!
//! ## Responsibilities
//! - Record one `UndoAction` per successful mutation
//! - Pop the most recent action and apply its inverse
//! - Surface the current tail as the "last action"
//!
//! There is no redo: an undone action is gone.

mod action;

use std::fmt;

use crate::error::{RegistrarError, Result};
use crate::queue::EnrollmentQueue;
use crate::roster::Roster;

pub use action::UndoAction;

/// What an `undo()` call did
#[derive(Debug, Clone, PartialEq)]
pub struct UndoReport {
    /// The action that was popped and inverted
    pub action: UndoAction,

    /// Human-readable effect, e.g. "Removed student Ana"
    pub message: String,
}

impl fmt::Display for UndoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Undone: {}", self.message)
    }
}

/// Append-only history, popped from the tail on undo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndoLedger {
    actions: Vec<UndoAction>,
}

impl UndoLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_actions(actions: Vec<UndoAction>) -> Self {
        Self { actions }
    }

    /// Append an action at the tail
    pub fn record(&mut self, action: UndoAction) {
        tracing::trace!(action = action.label(), depth = self.actions.len() + 1, "Recorded");
        self.actions.push(action);
    }

    /// Pop the most recent action and apply its inverse
    ///
    /// Returns `NothingToUndo` without touching any state when empty. If the
    /// inverse itself fails the action is pushed back so history stays intact.
    pub fn undo(&mut self, roster: &mut Roster, queue: &mut EnrollmentQueue) -> Result<UndoReport> {
        let action = self.actions.pop().ok_or(RegistrarError::NothingToUndo)?;

        match action.clone().revert(roster, queue) {
            Ok(message) => {
                tracing::debug!(action = action.label(), %message, "Undo applied");
                Ok(UndoReport { action, message })
            }
            Err(e) => {
                self.actions.push(action);
                Err(e)
            }
        }
    }

    /// Most recent action, if any
    pub fn last(&self) -> Option<&UndoAction> {
        self.actions.last()
    }

    pub fn actions(&self) -> &[UndoAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
