//! Row selection model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of selected row indices, kept ascending and duplicate-free.
///
/// This is both the candidate and the final answer type for every solver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct RowSet {
    rows: Vec<usize>,
}

impl RowSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from arbitrary indices (sorted and deduplicated).
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut rows: Vec<usize> = indices.into_iter().collect();
        rows.sort_unstable();
        rows.dedup();
        Self { rows }
    }

    /// Number of selected rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `row` is selected.
    pub fn contains(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Selected indices as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.rows
    }

    /// Selected indices converted to 1-based numbering for display.
    pub fn to_one_based(&self) -> Vec<usize> {
        self.rows.iter().map(|&r| r + 1).collect()
    }
}

impl From<Vec<usize>> for RowSet {
    fn from(indices: Vec<usize>) -> Self {
        Self::from_indices(indices)
    }
}

impl From<RowSet> for Vec<usize> {
    fn from(set: RowSet) -> Self {
        set.rows
    }
}

impl FromIterator<usize> for RowSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

impl fmt::Display for RowSet {
    /// Formats as 1-based, comma-separated row numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.to_one_based().iter().map(|r| r.to_string()).collect();
        f.write_str(&parts.join(", "))
    }
}
