//! Engine Module
//!
//! The owned context that ties roster, enrollment queue and undo ledger
//! together.
//!
//! ## Responsibilities
//! - Validate input and apply mutations to roster/queue
//! - Record exactly one undo action per successful mutation
//! - Invoke the snapshot store after each successful mutation
//! - Load existing state (or the seed) on startup

use crate::config::{Config, SnapshotSyncStrategy};
use crate::error::{RegistrarError, Result};
use crate::ledger::{UndoAction, UndoLedger, UndoReport};
use crate::lookup::{self, SearchField};
use crate::ordering::{self, SortAlgorithm};
use crate::queue::{EnrollmentQueue, QueueEntry};
use crate::roster::{parse_grades, Roster, StudentRecord};
use crate::snapshot::{FileSnapshotStore, MemorySnapshotStore, Snapshot, SnapshotStore};

/// Result of an add/edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Counters for status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total_students: usize,
    pub queue_length: usize,
}

/// The record-manipulation engine
///
/// ## Execution Model
/// Single logical caller. Every operation takes `&mut self` (or `&self` for
/// reads) and runs to completion; no locking is involved.
pub struct Engine<S: SnapshotStore = FileSnapshotStore> {
    config: Config,
    roster: Roster,
    queue: EnrollmentQueue,
    ledger: UndoLedger,
    store: S,
}

impl Engine<FileSnapshotStore> {
    /// Open or create an engine backed by `{data_dir}/registrar.snap`
    pub fn open(config: Config) -> Result<Self> {
        let store = FileSnapshotStore::open_dir(&config.data_dir)?;
        Self::with_store(config, store)
    }
}

impl Engine<MemorySnapshotStore> {
    /// Engine whose snapshots stay in memory
    pub fn in_memory(config: Config) -> Result<Self> {
        Self::with_store(config, MemorySnapshotStore::new())
    }
}

impl<S: SnapshotStore> Engine<S> {
    /// Build an engine over an arbitrary snapshot store
    ///
    /// On startup:
    /// 1. Load the stored snapshot, if any
    /// 2. If there is none (or it holds no students) and a seed is
    ///    configured, start from the seed and persist it
    /// 3. Otherwise restore roster, queue and (if enabled) history
    pub fn with_store(config: Config, mut store: S) -> Result<Self> {
        let loaded = store.load()?;

        let needs_seed = loaded.as_ref().map_or(true, Snapshot::has_no_students);
        let (snapshot, seeded) = match (needs_seed, config.seed.clone()) {
            (true, Some(seed)) => {
                tracing::info!(
                    students = seed.students.len(),
                    queued = seed.enrollment_queue.len(),
                    "Seeding empty roster"
                );
                (seed, true)
            }
            _ => (loaded.unwrap_or_default(), false),
        };

        let history = if config.persist_history {
            snapshot.action_history
        } else {
            Vec::new()
        };

        let mut engine = Self {
            roster: Roster::from_records(snapshot.students),
            queue: EnrollmentQueue::from_entries(snapshot.enrollment_queue),
            ledger: UndoLedger::from_actions(history),
            store,
            config,
        };

        tracing::info!(
            students = engine.roster.len(),
            queued = engine.queue.len(),
            history = engine.ledger.len(),
            "Engine ready"
        );

        if seeded {
            engine.after_mutation()?;
        }

        Ok(engine)
    }

    // =========================================================================
    // Roster Operations
    // =========================================================================

    /// Add a new student or edit an existing one
    ///
    /// Name and course are always overwritten on edit; grades only when
    /// `grades` is non-empty.
    pub fn upsert_student(
        &mut self,
        id: &str,
        name: &str,
        course: &str,
        grades: &[f64],
    ) -> Result<UpsertOutcome> {
        let id = require(id, "id")?;
        let name = require(name, "name")?;
        let course = require(course, "course")?;

        let outcome = match self.roster.get(id).cloned() {
            Some(previous) => {
                let updated = StudentRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    course: course.to_string(),
                    grades: if grades.is_empty() {
                        previous.grades.clone()
                    } else {
                        grades.to_vec()
                    },
                };
                self.roster.replace(id, updated.clone())?;
                self.ledger.record(UndoAction::Edit {
                    student_id: id.to_string(),
                    previous,
                    updated,
                });
                tracing::debug!(%id, "Student updated");
                UpsertOutcome::Updated
            }
            None => {
                let record = StudentRecord::new(id, name, course, grades.to_vec());
                self.roster.insert(record.clone())?;
                self.ledger.record(UndoAction::Add { record });
                tracing::debug!(%id, "Student added");
                UpsertOutcome::Created
            }
        };

        self.after_mutation()?;
        Ok(outcome)
    }

    /// `upsert_student` with a raw comma-separated grade string
    pub fn upsert_student_from_input(
        &mut self,
        id: &str,
        name: &str,
        course: &str,
        grades_input: &str,
    ) -> Result<UpsertOutcome> {
        let grades = parse_grades(grades_input);
        self.upsert_student(id, name, course, &grades)
    }

    /// Remove a student, returning the removed record
    pub fn delete_student(&mut self, id: &str) -> Result<StudentRecord> {
        let id = require(id, "id")?;
        let record = self
            .roster
            .remove(id)
            .ok_or_else(|| RegistrarError::StudentNotFound(id.to_string()))?;

        self.ledger.record(UndoAction::Delete {
            record: record.clone(),
        });
        tracing::debug!(%id, "Student deleted");

        self.after_mutation()?;
        Ok(record)
    }

    /// Look up a student; `Ok(None)` means not found
    pub fn find_student(&self, term: &str, field: SearchField) -> Result<Option<&StudentRecord>> {
        if term.trim().is_empty() {
            return Err(RegistrarError::InvalidInput(
                "search term must not be blank".to_string(),
            ));
        }
        Ok(lookup::find(&self.roster, term, field))
    }

    /// Sort the distinct grades of the whole roster
    ///
    /// Records a `Sort` action unless there were no grades at all, in which
    /// case an empty list comes back and history is untouched.
    pub fn sort_grades(&mut self, algorithm: SortAlgorithm, ascending: bool) -> Result<Vec<f64>> {
        let original = ordering::distinct_grades(&self.roster.all_grades());
        if original.is_empty() {
            return Ok(Vec::new());
        }

        let sorted = ordering::sort(original.clone(), ascending, algorithm);
        tracing::debug!(%algorithm, ascending, count = sorted.len(), "Grades sorted");

        self.ledger.record(UndoAction::Sort {
            algorithm,
            original,
            sorted: sorted.clone(),
        });

        self.after_mutation()?;
        Ok(sorted)
    }

    // =========================================================================
    // Queue Operations
    // =========================================================================

    /// Add a name to the tail of the enrollment queue
    pub fn enqueue_student(&mut self, name: &str) -> Result<QueueEntry> {
        let entry = self.queue.enqueue(name)?.clone();
        self.ledger.record(UndoAction::QueueAdd {
            name: entry.name.clone(),
        });
        tracing::debug!(name = %entry.name, "Enqueued");

        self.after_mutation()?;
        Ok(entry)
    }

    /// Process the head of the enrollment queue
    pub fn dequeue_student(&mut self) -> Result<QueueEntry> {
        let entry = self.queue.dequeue()?;
        self.ledger.record(UndoAction::QueueProcess {
            name: entry.name.clone(),
        });
        tracing::debug!(name = %entry.name, "Processed");

        self.after_mutation()?;
        Ok(entry)
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Revert the most recent mutation
    pub fn undo(&mut self) -> Result<UndoReport> {
        let report = self.ledger.undo(&mut self.roster, &mut self.queue)?;
        self.after_mutation()?;
        Ok(report)
    }

    /// Description of the action `undo` would revert next
    pub fn last_action_summary(&self) -> Option<String> {
        self.ledger.last().map(UndoAction::describe)
    }

    /// Short label of the most recent action
    pub fn last_action_label(&self) -> Option<&'static str> {
        self.ledger.last().map(UndoAction::label)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Current state as a snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            students: self.roster.records().to_vec(),
            enrollment_queue: self.queue.to_vec(),
            action_history: if self.config.persist_history {
                self.ledger.actions().to_vec()
            } else {
                Vec::new()
            },
        }
    }

    /// Write a snapshot regardless of sync strategy
    pub fn flush(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.store.save(&snapshot)
    }

    /// Flush and consume the engine
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    fn after_mutation(&mut self) -> Result<()> {
        match self.config.sync_strategy {
            SnapshotSyncStrategy::EveryMutation => self.flush().map_err(|e| {
                tracing::error!("Failed to persist snapshot: {}", e);
                e
            }),
            SnapshotSyncStrategy::Manual => Ok(()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn counts(&self) -> Counts {
        Counts {
            total_students: self.roster.len(),
            queue_length: self.queue.len(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn queue(&self) -> &EnrollmentQueue {
        &self.queue
    }

    pub fn history(&self) -> &UndoLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Trimmed value of a required field, or a validation error
fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrarError::Validation { field });
    }
    Ok(trimmed)
}
