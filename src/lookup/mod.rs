//! Lookup Module
//!
//! Locates a student by name or identifier.
//!
//! ## Search Strategy
//! 1. Sort a working copy of the roster by the requested field
//! 2. Bisect for an exact, case-insensitive match
//! 3. If that misses, scan the roster in entry order for the first record
//!    whose field contains the term (case-insensitive)
//!
//! The roster itself is never reordered or modified.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{RegistrarError, Result};
use crate::roster::{Roster, StudentRecord};

/// Field to search on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Name,
    Id,
}

impl SearchField {
    fn value<'a>(&self, record: &'a StudentRecord) -> &'a str {
        match self {
            SearchField::Name => &record.name,
            SearchField::Id => &record.id,
        }
    }

    /// Ordering used for the working copy
    ///
    /// Case-insensitive first, raw string as the tie-break, so the order
    /// agrees with the lower-cased comparison used while bisecting.
    fn collate(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        let (a, b) = (self.value(a), self.value(b));
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Name => f.write_str("Name"),
            SearchField::Id => f.write_str("ID"),
        }
    }
}

impl FromStr for SearchField {
    type Err = RegistrarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "id" => Ok(SearchField::Id),
            other => Err(RegistrarError::InvalidInput(format!(
                "unknown search field: {}",
                other
            ))),
        }
    }
}

/// Find a student by `term` on `field`
///
/// Returns `None` when neither the exact bisection nor the substring
/// fallback matches. The term is trimmed and lower-cased before comparing.
pub fn find<'a>(roster: &'a Roster, term: &str, field: SearchField) -> Option<&'a StudentRecord> {
    let needle = term.trim().to_lowercase();

    let mut sorted: Vec<&StudentRecord> = roster.iter().collect();
    sorted.sort_by(|a, b| field.collate(a, b));

    if let Some(record) = binary_search(&sorted, &needle, field) {
        return Some(record);
    }

    roster
        .iter()
        .find(|r| field.value(r).to_lowercase().contains(&needle))
}

/// Inclusive-bounds bisection on the lower-cased field value
fn binary_search<'a>(
    sorted: &[&'a StudentRecord],
    needle: &str,
    field: SearchField,
) -> Option<&'a StudentRecord> {
    if sorted.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1;

    while low <= high {
        let mid = (low + high) / 2;
        let candidate = field.value(sorted[mid]).to_lowercase();

        match candidate.as_str().cmp(needle) {
            Ordering::Equal => return Some(sorted[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    None
}
