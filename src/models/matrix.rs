//! Cover matrix model.
//!
//! A matrix is a rectangular grid of non-negative integers. Row `r` covers
//! column `c` when the entry at `(r, c)` is nonzero. The matrix is validated
//! once on construction and is immutable afterwards, so solvers can rely on
//! `num_rows() > 0` and `num_cols() > 0`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoverError, Result};
use crate::validation::validate_rows;

/// A validated, immutable cover matrix.
///
/// # Example
/// ```
/// use u_cover::models::Matrix;
///
/// let matrix = Matrix::new(vec![vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
/// assert_eq!(matrix.num_rows(), 2);
/// assert_eq!(matrix.num_cols(), 3);
/// assert!(matrix.covers(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    cells: Vec<Vec<u32>>,
    num_cols: usize,
}

impl Matrix {
    /// Validates and builds a matrix from raw row-major data.
    ///
    /// Fails with [`CoverError::InvalidMatrix`] when the data is empty,
    /// ragged, or contains negative entries.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        validate_rows(&rows).map_err(CoverError::InvalidMatrix)?;

        let num_cols = rows.first().map_or(0, Vec::len);
        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| v as u32).collect())
            .collect();

        Ok(Self { cells, num_cols })
    }

    /// Generates a uniform random 0/1 matrix.
    pub fn random<R: Rng>(num_rows: usize, num_cols: usize, rng: &mut R) -> Result<Self> {
        let rows = (0..num_rows)
            .map(|_| {
                (0..num_cols)
                    .map(|_| i64::from(rng.random_bool(0.5)))
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Entry at `(row, col)`, if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cells of one row, if in range.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Whether `row` covers `col`. Out-of-range positions cover nothing.
    #[inline]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v != 0)
    }

    /// Columns covered by `row`, ascending.
    pub fn row_columns(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells.get(row).into_iter().flat_map(|cells| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, v)| **v != 0)
                .map(|(col, _)| col)
        })
    }

    /// Rows covering `col`, ascending.
    pub fn rows_covering(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_rows()).filter(move |&row| self.covers(row, col))
    }

    /// Columns that no row covers.
    ///
    /// A non-empty result means no selection of rows can be a cover.
    pub fn uncoverable_columns(&self) -> Vec<usize> {
        (0..self.num_cols)
            .filter(|&col| self.rows_covering(col).next().is_none())
            .collect()
    }

    /// Whether selecting every row covers every column.
    pub fn is_coverable(&self) -> bool {
        self.uncoverable_columns().is_empty()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = CoverError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(matrix: Matrix) -> Self {
        matrix
            .cells
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect()
    }
}
