//! Tests for the Enrollment Queue
//!
//! These tests verify:
//! - FIFO ordering
//! - Empty-queue signalling
//! - Blank-name rejection
//! - Head re-insertion and first-match removal used by undo

use registrar::queue::{EnrollmentQueue, QueueEntry};
use registrar::RegistrarError;

// =============================================================================
// FIFO Tests
// =============================================================================

#[test]
fn test_enqueue_then_dequeue() {
    let mut queue = EnrollmentQueue::new();

    queue.enqueue("Ana").unwrap();
    let entry = queue.dequeue().unwrap();

    assert_eq!(entry.name, "Ana");
    assert!(queue.is_empty());
}

#[test]
fn test_dequeue_follows_arrival_order() {
    let mut queue = EnrollmentQueue::new();
    for name in ["Dela Cruz, Juan", "Santos, Ana", "Reyes, Mark"] {
        queue.enqueue(name).unwrap();
    }

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek().unwrap().name, "Dela Cruz, Juan");
    assert_eq!(queue.dequeue().unwrap().name, "Dela Cruz, Juan");
    assert_eq!(queue.dequeue().unwrap().name, "Santos, Ana");
    assert_eq!(queue.dequeue().unwrap().name, "Reyes, Mark");
}

#[test]
fn test_enqueue_trims_name() {
    let mut queue = EnrollmentQueue::new();
    let entry = queue.enqueue("  Ana  ").unwrap();
    assert_eq!(entry.name, "Ana");
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_dequeue_empty() {
    let mut queue = EnrollmentQueue::new();
    let err = queue.dequeue().unwrap_err();
    assert!(matches!(err, RegistrarError::QueueEmpty));
    assert!(err.is_empty_condition());
}

#[test]
fn test_enqueue_blank_rejected() {
    let mut queue = EnrollmentQueue::new();
    assert!(matches!(queue.enqueue("   "), Err(RegistrarError::InvalidInput(_))));
    assert!(matches!(queue.enqueue(""), Err(RegistrarError::InvalidInput(_))));
    assert!(queue.is_empty());
}

// =============================================================================
// Undo Support Tests
// =============================================================================

#[test]
fn test_push_front_goes_to_head() {
    let mut queue = EnrollmentQueue::from_entries(vec![QueueEntry::new("Juan")]);
    queue.push_front("Ana");

    assert_eq!(queue.dequeue().unwrap().name, "Ana");
    assert_eq!(queue.dequeue().unwrap().name, "Juan");
}

#[test]
fn test_remove_first_missing_name() {
    let mut queue = EnrollmentQueue::from_entries(vec![QueueEntry::new("Juan")]);
    assert!(queue.remove_first("Ana").is_none());
    assert_eq!(queue.len(), 1);
}
