//! Ordering Module
//!
//! Comparison sorts over grade values.
//!
//! ## Responsibilities
//! - Select one of four strategies by name
//! - Order a caller-owned copy of values ascending or descending
//! - Reduce a grade pool to its distinct values before sorting
//!
//! All strategies share the same comparison: ascending places `a` before `b`
//! iff `a < b`, descending iff `a > b`. On distinct values they agree exactly.
//! Nothing in this module touches the roster.

mod algorithms;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RegistrarError, Result};

pub use algorithms::{bubble_sort, default_sort, insertion_sort, selection_sort};

/// Sorting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    /// The standard library's comparison sort
    #[default]
    Default,
}

impl SortAlgorithm {
    /// All strategies, in menu order
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Default,
    ];

    /// Human-readable label ("Bubble Sort", ...)
    pub fn label(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Default => "Default Sort",
        }
    }

    /// Resolve a name, falling back to `Default` for anything unrecognized
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortAlgorithm {
    type Err = RegistrarError;

    /// Accepts "Bubble Sort", "bubble", "BUBBLE" and the like
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let name = normalized.strip_suffix(" sort").unwrap_or(&normalized).trim();
        match name {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "default" | "native" => Ok(SortAlgorithm::Default),
            _ => Err(RegistrarError::InvalidInput(format!(
                "unknown sort algorithm: {}",
                s
            ))),
        }
    }
}

/// Sort `values` with the chosen strategy and return them
pub fn sort(mut values: Vec<f64>, ascending: bool, algorithm: SortAlgorithm) -> Vec<f64> {
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(&mut values, ascending),
        SortAlgorithm::Selection => selection_sort(&mut values, ascending),
        SortAlgorithm::Insertion => insertion_sort(&mut values, ascending),
        SortAlgorithm::Default => default_sort(&mut values, ascending),
    }
    values
}

/// Distinct values in first-seen order
///
/// Equality is numeric, so `0.0` and `-0.0` collapse into one value.
pub fn distinct_grades(values: &[f64]) -> Vec<f64> {
    let mut distinct: Vec<f64> = Vec::with_capacity(values.len());
    for &value in values {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    distinct
}
