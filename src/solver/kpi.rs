//! Cover quality metrics (KPIs).
//!
//! Computes indicators that let external reporting compare the selections
//! produced by different algorithms on the same matrix.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Selected Rows | Size of the selection |
//! | Coverage Ratio | Covered columns / all columns |
//! | Redundant Rows | Rows whose removal keeps full coverage |
//! | Avg Multiplicity | Mean number of selected rows per covered column |

use crate::coverage::{CoverageState, covers_all};
use crate::models::{Matrix, RowSet};

/// Cover quality indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverKpi {
    /// Number of selected rows.
    pub selected_rows: usize,
    /// Columns covered by the selection.
    pub covered_columns: usize,
    /// Columns in the matrix.
    pub total_columns: usize,
    /// Fraction of columns covered (0.0..1.0).
    pub coverage_ratio: f64,
    /// Selected rows that can be dropped without losing full coverage.
    pub redundant_rows: Vec<usize>,
    /// Mean number of selected rows covering each covered column.
    pub avg_column_multiplicity: f64,
}

impl CoverKpi {
    /// Computes KPIs for a selection.
    pub fn calculate(matrix: &Matrix, rows: &RowSet) -> Self {
        let mut state = CoverageState::new(matrix.num_cols());
        let mut incidences = 0usize;
        for row in rows.iter() {
            state.cover_row(matrix, row);
            incidences += matrix.row_columns(row).count();
        }

        let covered_columns = state.covered_count();
        let total_columns = matrix.num_cols();

        let redundant_rows = if state.is_complete() {
            rows.iter()
                .filter(|&skip| {
                    let rest: Vec<usize> = rows.iter().filter(|&r| r != skip).collect();
                    covers_all(matrix, &rest)
                })
                .collect()
        } else {
            Vec::new()
        };

        let coverage_ratio = if total_columns == 0 {
            1.0
        } else {
            covered_columns as f64 / total_columns as f64
        };

        let avg_column_multiplicity = if covered_columns == 0 {
            0.0
        } else {
            incidences as f64 / covered_columns as f64
        };

        Self {
            selected_rows: rows.len(),
            covered_columns,
            total_columns,
            coverage_ratio,
            redundant_rows,
            avg_column_multiplicity,
        }
    }

    /// Whether every column is covered.
    pub fn is_complete(&self) -> bool {
        self.covered_columns == self.total_columns
    }

    /// Whether the selection is a cover with no removable row.
    pub fn is_irredundant(&self) -> bool {
        self.is_complete() && self.redundant_rows.is_empty()
    }
}
