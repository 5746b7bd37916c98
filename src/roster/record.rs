//! Student record definitions

use serde::{Deserialize, Serialize};

/// A single student in the roster
///
/// `Clone` is the snapshot operation: a cloned record shares nothing with the
/// original, so later edits to the roster never leak into recorded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique, non-empty key within the roster
    pub id: String,

    /// Display name
    pub name: String,

    /// Course/program label
    pub course: String,

    /// Grades in entry order
    pub grades: Vec<f64>,
}

impl StudentRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        course: impl Into<String>,
        grades: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            grades,
        }
    }

    /// Mean of all grades, 0 when there are none
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }
}

/// Parse a comma-separated grade string
///
/// Each trimmed token contributes its longest leading number ("85%" reads
/// as 85). Tokens with no numeric prefix are dropped silently; only when no
/// token survives is the result empty.
pub fn parse_grades(input: &str) -> Vec<f64> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(leading_float)
        .filter(|grade| !grade.is_nan())
        .collect()
}

/// Longest prefix of `token` that reads as a decimal float
///
/// Grammar: `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`,
/// or a signed `Infinity`.
fn leading_float(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if token[end..].starts_with("Infinity") {
        return token[..end + "Infinity".len()].parse().ok();
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_start = end + 1;
        if exp_start < len && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    token[..end].parse().ok()
}
