//! Coverage evaluation.
//!
//! [`covers_all`] is the feasibility test every solver relies on.
//! [`CoverageState`] is its incremental form, used where a selection grows one
//! row at a time.

use crate::models::Matrix;

/// Whether the given rows together cover every column of `matrix`.
///
/// Out-of-range row indices contribute nothing. An empty selection never
/// covers a matrix with at least one column.
///
/// # Complexity
/// O(|rows| × num_cols)
///
/// # Example
/// ```
/// use u_cover::coverage::covers_all;
/// use u_cover::models::Matrix;
///
/// let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
/// assert!(covers_all(&m, &[1, 2]));
/// assert!(!covers_all(&m, &[0, 1]));
/// ```
pub fn covers_all(matrix: &Matrix, rows: &[usize]) -> bool {
    let mut state = CoverageState::new(matrix.num_cols());
    for &row in rows {
        state.cover_row(matrix, row);
        if state.is_complete() {
            return true;
        }
    }
    state.is_complete()
}

/// Set of columns covered so far, updated one row at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageState {
    covered: Vec<bool>,
    covered_count: usize,
}

impl CoverageState {
    /// Creates a state with no column covered.
    pub fn new(num_cols: usize) -> Self {
        Self {
            covered: vec![false; num_cols],
            covered_count: 0,
        }
    }

    /// Number of currently uncovered columns `row` would cover.
    pub fn gain(&self, matrix: &Matrix, row: usize) -> usize {
        matrix
            .row_columns(row)
            .filter(|&col| !self.is_covered(col))
            .count()
    }

    /// Marks the columns of `row` as covered.
    ///
    /// Returns the number of newly covered columns.
    pub fn cover_row(&mut self, matrix: &Matrix, row: usize) -> usize {
        let mut newly = 0;
        for col in matrix.row_columns(row) {
            if let Some(flag) = self.covered.get_mut(col) {
                if !*flag {
                    *flag = true;
                    newly += 1;
                }
            }
        }
        self.covered_count += newly;
        newly
    }

    /// Whether `col` is covered.
    #[inline]
    pub fn is_covered(&self, col: usize) -> bool {
        self.covered.get(col).copied().unwrap_or(false)
    }

    /// Number of covered columns.
    #[inline]
    pub fn covered_count(&self) -> usize {
        self.covered_count
    }

    /// Whether every column is covered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.covered_count == self.covered.len()
    }

    /// Columns not yet covered, ascending.
    pub fn uncovered_columns(&self) -> Vec<usize> {
        self.covered
            .iter()
            .enumerate()
            .filter(|(_, covered)| !**covered)
            .map(|(col, _)| col)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap()
    }

    #[test]
    fn test_covers_all() {
        let m = sample();
        assert!(covers_all(&m, &[1, 2]));
        assert!(covers_all(&m, &[0, 1, 2]));
        assert!(!covers_all(&m, &[0, 2]));
    }

    #[test]
    fn test_empty_selection_never_covers() {
        assert!(!covers_all(&sample(), &[]));
    }

    #[test]
    fn test_all_rows_cover_iff_no_zero_column() {
        let coverable = sample();
        assert!(covers_all(&coverable, &[0, 1, 2]));

        let zero_column = Matrix::new(vec![vec![1, 0], vec![1, 0]]).unwrap();
        assert!(!covers_all(&zero_column, &[0, 1]));
    }

    #[test]
    fn test_out_of_range_rows_ignored() {
        let m = sample();
        assert!(!covers_all(&m, &[7]));
        assert!(covers_all(&m, &[7, 1, 2]));
    }

    #[test]
    fn test_incremental_state() {
        let m = sample();
        let mut state = CoverageState::new(m.num_cols());
        assert_eq!(state.gain(&m, 1), 3);

        assert_eq!(state.cover_row(&m, 1), 3);
        assert_eq!(state.covered_count(), 3);
        assert_eq!(state.gain(&m, 0), 0);
        assert_eq!(state.gain(&m, 2), 1);
        assert_eq!(state.uncovered_columns(), vec![3]);
        assert!(!state.is_complete());

        assert_eq!(state.cover_row(&m, 2), 1);
        assert!(state.is_complete());
        assert!(state.uncovered_columns().is_empty());
    }
}
