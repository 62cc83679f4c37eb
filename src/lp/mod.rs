//! Integer-programming cover formulation.
//!
//! Builds a 0/1 integer program from a cover matrix and solves it with
//! `good_lp` on the pure-Rust `microlp` backend.
//!
//! # Model
//!
//! ```text
//! minimize    Σ_r x_r
//! subject to  Σ_{r : a_rc ≠ 0} x_r ≥ 1    for every column c
//!             x_r ∈ {0, 1}
//! ```
//!
//! # Reference
//! - Vazirani (2001), "Approximation Algorithms", Ch. 13 (LP-duality for set cover)
//! - Caprara, Toth & Fischetti (2000), "Algorithms for the Set Covering Problem"

use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, microlp,
    variable,
};
use tracing::{debug, warn};

use crate::error::{CoverError, Result};
use crate::models::{Matrix, RowSet};

/// Solver-independent cover model.
///
/// One variable per row; one covering constraint per column listing the rows
/// that may satisfy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLpModel {
    variable_count: usize,
    constraints: Vec<Vec<usize>>,
}

impl CoverLpModel {
    /// Number of row variables.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of column constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Rows appearing in the constraint of `col`.
    pub fn constraint(&self, col: usize) -> Option<&[usize]> {
        self.constraints.get(col).map(Vec::as_slice)
    }

    /// Columns whose constraint has no variable and can never be satisfied.
    pub fn empty_constraints(&self) -> Vec<usize> {
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, rows)| rows.is_empty())
            .map(|(col, _)| col)
            .collect()
    }
}

/// Builds and solves the integer program for a matrix.
///
/// # Example
/// ```
/// use u_cover::lp::CoverLpBuilder;
/// use u_cover::models::Matrix;
///
/// let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
/// let builder = CoverLpBuilder::new(&m);
/// assert_eq!(builder.build().constraint_count(), 4);
/// assert_eq!(builder.solve().unwrap().as_slice(), &[1, 2]);
/// ```
pub struct CoverLpBuilder<'a> {
    matrix: &'a Matrix,
}

impl<'a> CoverLpBuilder<'a> {
    /// Creates a builder over `matrix`.
    pub fn new(matrix: &'a Matrix) -> Self {
        Self { matrix }
    }

    /// Builds the solver-independent model.
    pub fn build(&self) -> CoverLpModel {
        let constraints = (0..self.matrix.num_cols())
            .map(|col| self.matrix.rows_covering(col).collect())
            .collect();
        CoverLpModel {
            variable_count: self.matrix.num_rows(),
            constraints,
        }
    }

    /// Solves the 0/1 program and returns the optimal rows.
    ///
    /// Fails with [`CoverError::Infeasible`] when a column has no covering
    /// row, before the backend is invoked.
    pub fn solve(&self) -> Result<RowSet> {
        let model = self.build();
        let uncovered = model.empty_constraints();
        if !uncovered.is_empty() {
            warn!(columns = ?uncovered, "integer program is infeasible");
            return Err(CoverError::infeasible(uncovered));
        }

        let mut vars = ProblemVariables::new();
        let x: Vec<Variable> = (0..model.variable_count)
            .map(|_| vars.add(variable().binary()))
            .collect();
        let values = Self::optimize(vars, &x, &model)?;

        let rows = Self::decode_solution(&values);
        debug!(size = rows.len(), "integer program solved");
        Ok(rows)
    }

    /// Solves the continuous relaxation (`0 ≤ x_r ≤ 1`) and returns its
    /// objective rounded up, a lower bound on the minimum cover size.
    pub fn lower_bound(&self) -> Result<usize> {
        let model = self.build();
        let uncovered = model.empty_constraints();
        if !uncovered.is_empty() {
            return Err(CoverError::infeasible(uncovered));
        }

        let mut vars = ProblemVariables::new();
        let x: Vec<Variable> = (0..model.variable_count)
            .map(|_| vars.add(variable().min(0).max(1)))
            .collect();
        let values = Self::optimize(vars, &x, &model)?;

        let objective: f64 = values.iter().sum();
        // Absorb floating-point noise before rounding up.
        Ok((objective - 1e-6).ceil().max(0.0) as usize)
    }

    fn optimize(vars: ProblemVariables, x: &[Variable], model: &CoverLpModel) -> Result<Vec<f64>> {
        let objective: Expression = x.iter().sum();
        let mut problem = vars.minimise(objective).using(microlp);

        for rows in &model.constraints {
            let covering: Expression = rows.iter().map(|&r| x[r]).sum();
            problem.add_constraint(covering.geq(1));
        }

        match problem.solve() {
            Ok(solution) => Ok(x.iter().map(|&v| solution.value(v)).collect()),
            Err(ResolutionError::Infeasible) => {
                warn!("integer programming backend reported infeasibility");
                Err(CoverError::infeasible(Vec::new()))
            }
            Err(e) => Err(CoverError::solver(e.to_string())),
        }
    }

    /// Rows whose variable is set in a solution.
    fn decode_solution(values: &[f64]) -> RowSet {
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.5)
            .map(|(row, _)| row)
            .collect()
    }
}

/// Exact cover solver backed by integer programming.
#[derive(Debug, Clone, Copy, Default)]
pub struct LpSolver;

impl LpSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Returns an optimal cover or [`CoverError::Infeasible`].
    pub fn solve(&self, matrix: &Matrix) -> Result<RowSet> {
        CoverLpBuilder::new(matrix).solve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::covers_all;
    use crate::solver::BranchAndBoundSolver;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sample() -> Matrix {
        Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap()
    }

    #[test]
    fn test_build_model() {
        let m = sample();
        let model = CoverLpBuilder::new(&m).build();
        assert_eq!(model.variable_count(), 3);
        assert_eq!(model.constraint_count(), 4);
        assert_eq!(model.constraint(0), Some(&[1][..]));
        assert_eq!(model.constraint(2), Some(&[1, 2][..]));
        assert!(model.empty_constraints().is_empty());
    }

    #[test]
    fn test_solve_basic() {
        let m = sample();
        let rows = LpSolver::new().solve(&m).unwrap();
        assert_eq!(rows.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_single_row() {
        let m = Matrix::new(vec![vec![1, 1, 1]]).unwrap();
        assert_eq!(LpSolver::new().solve(&m).unwrap().as_slice(), &[0]);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::new(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(LpSolver::new().solve(&m).unwrap().as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_zero_column_is_infeasible() {
        let m = Matrix::new(vec![vec![1, 0], vec![1, 0]]).unwrap();
        let builder = CoverLpBuilder::new(&m);
        assert_eq!(builder.build().empty_constraints(), vec![1]);
        assert_eq!(
            builder.solve().unwrap_err(),
            CoverError::Infeasible { columns: vec![1] }
        );
        assert!(builder.lower_bound().is_err());
    }

    #[test]
    fn test_lower_bound() {
        let m = sample();
        assert_eq!(CoverLpBuilder::new(&m).lower_bound().unwrap(), 2);

        let id = Matrix::new(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(CoverLpBuilder::new(&id).lower_bound().unwrap(), 3);
    }

    #[test]
    fn test_agrees_with_branch_and_bound() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..15 {
            let m = Matrix::random(6, 5, &mut rng).unwrap();
            if !m.is_coverable() {
                continue;
            }
            let lp = LpSolver::new().solve(&m).unwrap();
            let bnb = BranchAndBoundSolver::new().solve(&m);
            assert!(covers_all(&m, lp.as_slice()));
            assert_eq!(lp.len(), bnb.len());
        }
    }
}
