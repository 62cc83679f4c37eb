//! Greedy maximal-marginal-coverage solver.
//!
//! # Algorithm
//!
//! 1. Start with no column covered.
//! 2. For every row, count the uncovered columns it would cover.
//! 3. Select the row with the largest count (lowest index on ties).
//! 4. Repeat until every column is covered or no row adds coverage.
//!
//! # Complexity
//! O(k * m * n) where k=selected rows, m=rows, n=columns.
//!
//! # Reference
//! Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

use tracing::debug;

use crate::coverage::CoverageState;
use crate::models::{Matrix, RowSet};

/// Deterministic greedy cover heuristic.
///
/// Always terminates. The result is generally not minimal, and when some
/// column cannot be covered at all it is a partial selection; check it with
/// [`covers_all`](crate::coverage::covers_all) or reject such matrices upfront
/// via [`Matrix::uncoverable_columns`].
///
/// # Example
///
/// ```
/// use u_cover::models::Matrix;
/// use u_cover::solver::GreedySolver;
///
/// let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
/// let rows = GreedySolver::new().solve(&m);
/// assert_eq!(rows.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solves and returns the selection in ascending row order.
    pub fn solve(&self, matrix: &Matrix) -> RowSet {
        RowSet::from_indices(self.solve_ordered(matrix))
    }

    /// Solves and returns rows in the order they were picked.
    pub fn solve_ordered(&self, matrix: &Matrix) -> Vec<usize> {
        let mut state = CoverageState::new(matrix.num_cols());
        let mut picked = Vec::new();

        while !state.is_complete() {
            let mut best_row: Option<usize> = None;
            let mut best_gain = 0;

            for row in 0..matrix.num_rows() {
                let gain = state.gain(matrix, row);
                if gain > best_gain {
                    best_gain = gain;
                    best_row = Some(row);
                }
            }

            // No row adds coverage: some column is uncoverable.
            let Some(row) = best_row else {
                debug!(
                    uncovered = ?state.uncovered_columns(),
                    "greedy stalled before full coverage"
                );
                break;
            };

            state.cover_row(matrix, row);
            picked.push(row);
            debug!(row, gain = best_gain, covered = state.covered_count(), "greedy pick");
        }

        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::covers_all;

    #[test]
    fn test_basic_cover() {
        let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
        let ordered = GreedySolver::new().solve_ordered(&m);
        assert_eq!(ordered, vec![1, 2]);
        assert!(covers_all(&m, &ordered));
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        let m = Matrix::new(vec![vec![1, 1, 0, 0], vec![0, 0, 1, 1], vec![1, 1, 0, 0]]).unwrap();
        assert_eq!(GreedySolver::new().solve_ordered(&m), vec![0, 1]);
    }

    #[test]
    fn test_output_is_ascending() {
        // Row 2 has the largest gain and is picked first.
        let m = Matrix::new(vec![vec![1, 0, 0, 0], vec![0, 0, 0, 1], vec![0, 1, 1, 0]]).unwrap();
        let solver = GreedySolver::new();
        assert_eq!(solver.solve_ordered(&m), vec![2, 0, 1]);
        assert_eq!(solver.solve(&m).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_single_row() {
        let m = Matrix::new(vec![vec![1, 1, 1]]).unwrap();
        assert_eq!(GreedySolver::new().solve(&m).as_slice(), &[0]);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::new(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(GreedySolver::new().solve(&m).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_uncoverable_column_terminates_with_partial() {
        let m = Matrix::new(vec![vec![1, 0, 0], vec![0, 0, 1]]).unwrap();
        let rows = GreedySolver::new().solve(&m);
        assert_eq!(rows.as_slice(), &[0, 1]);
        assert!(!covers_all(&m, rows.as_slice()));
    }

    #[test]
    fn test_all_zero_matrix() {
        let m = Matrix::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
        assert!(GreedySolver::new().solve(&m).is_empty());
    }

    #[test]
    fn test_greedy_is_suboptimal_on_classic_instance() {
        // Greedy takes the wide middle row first, then needs both halves.
        let m = Matrix::new(vec![
            vec![1, 1, 1, 0, 0, 0],
            vec![0, 0, 0, 1, 1, 1],
            vec![0, 1, 1, 1, 1, 0],
            vec![1, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let solver = GreedySolver::new();
        assert_eq!(solver.solve_ordered(&m), vec![2, 0, 1]);

        let rows = solver.solve(&m);
        assert!(covers_all(&m, rows.as_slice()));
        // Rows 0 and 1 alone are a cover.
        assert_eq!(rows.len(), 3);
    }
}
