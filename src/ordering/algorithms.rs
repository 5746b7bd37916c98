//! Sorting strategies
//!
//! In-place sorts over `f64` slices. `out_of_order(a, b)` is true when `a`
//! must come after `b` in the requested direction.

use std::cmp::Ordering;

#[inline]
fn out_of_order(a: f64, b: f64, ascending: bool) -> bool {
    if ascending {
        a > b
    } else {
        a < b
    }
}

/// Bubble sort: n-1 passes of adjacent swaps, each pass one shorter
///
/// Stops early once a pass makes no swap.
pub fn bubble_sort(values: &mut [f64], ascending: bool) {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if out_of_order(values[j], values[j + 1], ascending) {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort: move the extremal element of the remainder into place
pub fn selection_sort(values: &mut [f64], ascending: bool) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut extremal = i;
        for j in (i + 1)..n {
            if out_of_order(values[extremal], values[j], ascending) {
                extremal = j;
            }
        }
        if extremal != i {
            values.swap(i, extremal);
        }
    }
}

/// Insertion sort: shift each key left past everything it must precede
pub fn insertion_sort(values: &mut [f64], ascending: bool) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && out_of_order(values[j - 1], key, ascending) {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// Standard library sort with the same ordering contract
pub fn default_sort(values: &mut [f64], ascending: bool) {
    values.sort_by(|a, b| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}
