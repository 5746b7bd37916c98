//! Roster Tests
//!
//! Tests verify:
//! - Insert/replace/remove by identifier
//! - Identifier uniqueness
//! - Entry order preservation
//! - Clone independence (snapshots)
//! - Grade parsing

use registrar::roster::{parse_grades, Roster, StudentRecord};
use registrar::RegistrarError;

fn record(id: &str, name: &str, grades: Vec<f64>) -> StudentRecord {
    StudentRecord::new(id, name, "BSCS 2nd Year", grades)
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_roster_is_empty() {
    let roster = Roster::new();
    assert!(roster.is_empty());
    assert_eq!(roster.len(), 0);
}

#[test]
fn test_insert_and_get() {
    let mut roster = Roster::new();
    roster.insert(record("2023-001", "Ana", vec![90.0])).unwrap();

    let found = roster.get("2023-001").unwrap();
    assert_eq!(found.name, "Ana");
    assert!(roster.get("2023-999").is_none());
}

#[test]
fn test_insert_duplicate_id_rejected() {
    let mut roster = Roster::new();
    roster.insert(record("2023-001", "Ana", vec![])).unwrap();

    let err = roster.insert(record("2023-001", "Other", vec![])).unwrap_err();
    assert!(matches!(err, RegistrarError::DuplicateStudent(id) if id == "2023-001"));
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get("2023-001").unwrap().name, "Ana");
}

#[test]
fn test_insert_empty_id_rejected() {
    let mut roster = Roster::new();
    assert!(matches!(
        roster.insert(record("", "Ana", vec![])),
        Err(RegistrarError::Validation { field: "id" })
    ));
}

#[test]
fn test_replace_keeps_position() {
    let mut roster = Roster::from_records(vec![
        record("1", "Ana", vec![]),
        record("2", "Juan", vec![]),
        record("3", "Maria", vec![]),
    ]);

    let old = roster.replace("2", record("2", "Juan Dela Cruz", vec![88.0])).unwrap();

    assert_eq!(old.name, "Juan");
    assert_eq!(roster.position("2"), Some(1));
    assert_eq!(roster.records()[1].name, "Juan Dela Cruz");
}

#[test]
fn test_replace_missing_id() {
    let mut roster = Roster::new();
    assert!(matches!(
        roster.replace("9", record("9", "Ghost", vec![])),
        Err(RegistrarError::StudentNotFound(_))
    ));
}

#[test]
fn test_remove() {
    let mut roster = Roster::from_records(vec![record("1", "Ana", vec![]), record("2", "Juan", vec![])]);

    let removed = roster.remove("1").unwrap();

    assert_eq!(removed.name, "Ana");
    assert_eq!(roster.len(), 1);
    assert!(roster.remove("1").is_none());
}

#[test]
fn test_from_records_drops_duplicate_ids() {
    let roster = Roster::from_records(vec![record("1", "Ana", vec![]), record("1", "Copy", vec![])]);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get("1").unwrap().name, "Ana");
}

#[test]
fn test_all_grades_in_roster_order() {
    let roster = Roster::from_records(vec![
        record("1", "Ana", vec![90.0, 80.0]),
        record("2", "Juan", vec![]),
        record("3", "Maria", vec![70.0]),
    ]);
    assert_eq!(roster.all_grades(), vec![90.0, 80.0, 70.0]);
}

// =============================================================================
// Snapshot Independence Tests
// =============================================================================

#[test]
fn test_cloned_record_is_independent() {
    let mut roster = Roster::from_records(vec![record("1", "Ana", vec![80.0])]);
    let snapshot = roster.get("1").unwrap().clone();

    roster.replace("1", record("1", "Ana", vec![90.0])).unwrap();

    assert_eq!(snapshot.grades, vec![80.0]);
    assert_eq!(roster.get("1").unwrap().grades, vec![90.0]);
}

// =============================================================================
// Grade Parsing Tests
// =============================================================================

#[test]
fn test_parse_grades_mixed_input() {
    assert_eq!(parse_grades("89.5, abc, 92"), vec![89.5, 92.0]);
}

#[test]
fn test_parse_grades_preserves_entry_order_and_duplicates() {
    assert_eq!(parse_grades("94.0,92.1, 94.0"), vec![94.0, 92.1, 94.0]);
}

#[test]
fn test_parse_grades_reads_numeric_prefix() {
    assert_eq!(parse_grades("85%, 90"), vec![85.0, 90.0]);
    assert_eq!(parse_grades("90pts, 12abc, abc"), vec![90.0, 12.0]);
}

#[test]
fn test_parse_grades_all_invalid() {
    assert!(parse_grades("abc, def").is_empty());
    assert!(parse_grades("").is_empty());
}

#[test]
fn test_average_of_record() {
    let r = record("1", "Ana", vec![92.1, 89.5, 94.0]);
    assert!((r.average() - 91.866_666).abs() < 1e-4);
}
