//! Tests for the Undo Ledger
//!
//! These tests verify:
//! - LIFO popping
//! - The inverse of every action kind
//! - Empty-ledger signalling with no state change
//! - Descriptions and labels of the tail action

use registrar::ledger::{UndoAction, UndoLedger};
use registrar::ordering::SortAlgorithm;
use registrar::queue::{EnrollmentQueue, QueueEntry};
use registrar::roster::{Roster, StudentRecord};
use registrar::RegistrarError;

// =============================================================================
// Helper Functions
// =============================================================================

fn ana() -> StudentRecord {
    StudentRecord::new("2023-001", "Ana Santos", "BSCS 2nd Year", vec![80.0])
}

fn state() -> (Roster, EnrollmentQueue) {
    let roster = Roster::from_records(vec![ana()]);
    let queue = EnrollmentQueue::from_entries(vec![QueueEntry::new("Juan"), QueueEntry::new("Maria")]);
    (roster, queue)
}

// =============================================================================
// Empty Ledger Tests
// =============================================================================

#[test]
fn test_undo_on_empty_ledger() {
    let (mut roster, mut queue) = state();
    let (roster_before, queue_before) = (roster.clone(), queue.clone());
    let mut ledger = UndoLedger::new();

    let err = ledger.undo(&mut roster, &mut queue).unwrap_err();

    assert!(matches!(err, RegistrarError::NothingToUndo));
    assert_eq!(roster, roster_before);
    assert_eq!(queue, queue_before);
    assert!(ledger.last().is_none());
}

// =============================================================================
// Inverse Tests
// =============================================================================

#[test]
fn test_undo_add_removes_record() {
    let (mut roster, mut queue) = state();
    let added = StudentRecord::new("X", "New", "BSIT", vec![]);
    roster.insert(added.clone()).unwrap();

    let mut ledger = UndoLedger::new();
    ledger.record(UndoAction::Add { record: added });

    let report = ledger.undo(&mut roster, &mut queue).unwrap();

    assert!(roster.get("X").is_none());
    assert_eq!(roster.len(), 1);
    assert_eq!(report.message, "Removed student New");
    assert_eq!(report.to_string(), "Undone: Removed student New");
}

#[test]
fn test_undo_edit_restores_previous_snapshot() {
    let (mut roster, mut queue) = state();
    let previous = roster.get("2023-001").unwrap().clone();
    let updated = StudentRecord::new("2023-001", "Ana S.", "BSCS 3rd Year", vec![90.0]);
    roster.replace("2023-001", updated.clone()).unwrap();

    let mut ledger = UndoLedger::new();
    ledger.record(UndoAction::Edit {
        student_id: "2023-001".to_string(),
        previous,
        updated,
    });

    ledger.undo(&mut roster, &mut queue).unwrap();

    assert_eq!(roster.get("2023-001").unwrap(), &ana());
}

#[test]
fn test_undo_delete_reinserts_record() {
    let (mut roster, mut queue) = state();
    let removed = roster.remove("2023-001").unwrap();

    let mut ledger = UndoLedger::new();
    ledger.record(UndoAction::Delete { record: removed });
    ledger.undo(&mut roster, &mut queue).unwrap();

    assert_eq!(roster.get("2023-001").unwrap(), &ana());
}

#[test]
fn test_undo_queue_add_removes_first_match() {
    let (mut roster, mut queue) = state();
    queue.enqueue("Juan").unwrap();

    let mut ledger = UndoLedger::new();
    ledger.record(UndoAction::QueueAdd {
        name: "Juan".to_string(),
    });
    ledger.undo(&mut roster, &mut queue).unwrap();

    // The first "Juan" (the head) goes, matching by name rather than position
    let names: Vec<_> = queue.iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["Maria", "Juan"]);
}

#[test]
fn test_undo_queue_process_restores_head() {
    let (mut roster, mut queue) = state();
    let processed = queue.dequeue().unwrap();

    let mut ledger = UndoLedger::new();
    ledger.record(UndoAction::QueueProcess { name: processed.name });
    ledger.undo(&mut roster, &mut queue).unwrap();

    assert_eq!(queue.peek().unwrap().name, "Juan");
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_undo_sort_changes_nothing() {
    let (mut roster, mut queue) = state();
    let (roster_before, queue_before) = (roster.clone(), queue.clone());

    let mut ledger = UndoLedger::new();
    ledger.record(UndoAction::Sort {
        algorithm: SortAlgorithm::Bubble,
        original: vec![80.0, 70.0],
        sorted: vec![70.0, 80.0],
    });
    let report = ledger.undo(&mut roster, &mut queue).unwrap();

    assert_eq!(roster, roster_before);
    assert_eq!(queue, queue_before);
    assert!(matches!(report.action, UndoAction::Sort { .. }));
    assert!(ledger.is_empty());
}

// =============================================================================
// LIFO Tests
// =============================================================================

#[test]
fn test_undo_walks_back_one_step_at_a_time() {
    let (mut roster, mut queue) = state();
    let mut ledger = UndoLedger::new();

    queue.enqueue("Pedro").unwrap();
    ledger.record(UndoAction::QueueAdd {
        name: "Pedro".to_string(),
    });
    let first = queue.dequeue().unwrap();
    ledger.record(UndoAction::QueueProcess { name: first.name });

    let report = ledger.undo(&mut roster, &mut queue).unwrap();
    assert!(matches!(report.action, UndoAction::QueueProcess { .. }));
    assert_eq!(queue.len(), 3);

    let report = ledger.undo(&mut roster, &mut queue).unwrap();
    assert!(matches!(report.action, UndoAction::QueueAdd { .. }));
    let names: Vec<_> = queue.iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["Juan", "Maria"]);

    assert!(ledger.undo(&mut roster, &mut queue).is_err());
}

#[test]
fn test_failed_inverse_keeps_action() {
    let (mut roster, mut queue) = state();
    let mut ledger = UndoLedger::new();

    // Re-inserting a record whose id is still present cannot succeed
    ledger.record(UndoAction::Delete { record: ana() });
    let err = ledger.undo(&mut roster, &mut queue).unwrap_err();

    assert!(matches!(err, RegistrarError::DuplicateStudent(_)));
    assert_eq!(ledger.len(), 1);
}

// =============================================================================
// Description Tests
// =============================================================================

#[test]
fn test_descriptions_and_labels() {
    let cases = vec![
        (UndoAction::Add { record: ana() }, "Added Record", "Added Record: Ana Santos (ID: 2023-001)"),
        (
            UndoAction::Edit {
                student_id: "2023-001".to_string(),
                previous: ana(),
                updated: ana(),
            },
            "Edited Record",
            "Edited Record: Ana Santos (ID: 2023-001)",
        ),
        (UndoAction::Delete { record: ana() }, "Deleted Record", "Deleted Record: Ana Santos (ID: 2023-001)"),
        (UndoAction::QueueAdd { name: "Juan".into() }, "Added to Queue", "Added to Queue: Juan"),
        (UndoAction::QueueProcess { name: "Juan".into() }, "Processed Queue", "Processed from Queue: Juan"),
        (
            UndoAction::Sort {
                algorithm: SortAlgorithm::Insertion,
                original: vec![],
                sorted: vec![],
            },
            "Sorted Grades",
            "Sorted Grades using Insertion Sort",
        ),
    ];

    for (action, label, description) in cases {
        assert_eq!(action.label(), label);
        assert_eq!(action.describe(), description);
    }
}
