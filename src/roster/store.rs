//! Roster store
//!
//! Ordered record storage with identifier-keyed access.

use crate::error::{RegistrarError, Result};

use super::StudentRecord;

/// In-memory roster of student records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a seed list
    ///
    /// Later duplicates of an identifier are dropped so the uniqueness
    /// invariant holds from the start.
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        let mut roster = Self::new();
        for record in records {
            if let Err(e) = roster.insert(record) {
                tracing::warn!("Skipping seed record: {}", e);
            }
        }
        roster
    }

    /// Get a record by identifier
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of a record in entry order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Append a record (fails if the identifier is taken)
    pub fn insert(&mut self, record: StudentRecord) -> Result<()> {
        if record.id.is_empty() {
            return Err(RegistrarError::Validation { field: "id" });
        }
        if self.contains(&record.id) {
            return Err(RegistrarError::DuplicateStudent(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Overwrite the record stored under `id`, returning the old value
    ///
    /// The replacement keeps its slot in entry order.
    pub fn replace(&mut self, id: &str, record: StudentRecord) -> Result<StudentRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistrarError::StudentNotFound(id.to_string()))?;
        if record.id != id && self.contains(&record.id) {
            return Err(RegistrarError::DuplicateStudent(record.id));
        }
        Ok(std::mem::replace(&mut self.records[index], record))
    }

    /// Remove a record by identifier
    pub fn remove(&mut self, id: &str) -> Option<StudentRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Records in entry order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every grade of every student, in roster then entry order
    pub fn all_grades(&self) -> Vec<f64> {
        self.records
            .iter()
            .flat_map(|r| r.grades.iter().copied())
            .collect()
    }

    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
