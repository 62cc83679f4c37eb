//! Algorithm dispatch and timed runs.
//!
//! [`SolverRegistry`] maps an [`Algorithm`] to its solver, normalizes every
//! outcome into [`Result<RowSet>`](crate::error::Result), and records timed
//! runs into a caller-owned [`ResultStore`].
//!
//! # Usage
//!
//! ```
//! use u_cover::models::{Matrix, ResultStore};
//! use u_cover::registry::{Algorithm, SolverRegistry};
//!
//! let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
//! let registry = SolverRegistry::new();
//! let mut store = ResultStore::new();
//!
//! registry.run_all(&m, &Algorithm::ALL, &mut store).unwrap();
//! assert_eq!(store.rows(Algorithm::BranchAndBound).unwrap().as_slice(), &[1, 2]);
//! assert_eq!(store.compare(&Algorithm::ALL).unwrap().len(), 4);
//! ```

mod algorithm;

pub use algorithm::Algorithm;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::{CoverError, Result};
use crate::ga::{GaConfig, GeneticSolver};
use crate::lp::LpSolver;
use crate::models::{AlgorithmResult, Matrix, ResultStore, RowSet};
use crate::solver::{BranchAndBoundSolver, GreedySolver};

/// Per-algorithm settings used by [`SolverRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// GA hyperparameters.
    pub genetic: GaConfig,
    /// Wall-clock limit for branch and bound (`None` = exhaustive).
    pub branch_and_bound_time_limit: Option<Duration>,
}

impl SolverConfig {
    /// Sets the GA hyperparameters.
    pub fn with_genetic(mut self, genetic: GaConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Sets the branch-and-bound time limit.
    pub fn with_branch_and_bound_time_limit(mut self, limit: Duration) -> Self {
        self.branch_and_bound_time_limit = Some(limit);
        self
    }
}

/// Dispatches cover problems to the configured solvers.
#[derive(Debug, Clone, Default)]
pub struct SolverRegistry {
    config: SolverConfig,
}

impl SolverRegistry {
    /// Creates a registry with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the given settings.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Active settings.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `matrix` with `algorithm`.
    ///
    /// # Errors
    /// - [`CoverError::Infeasible`] if some column has no covering row
    ///   (checked before any solver runs)
    /// - [`CoverError::NoSolution`] if the GA never reached a full cover
    /// - [`CoverError::TimeLimit`] if a deadline expired before any cover
    /// - [`CoverError::Solver`] on an integer programming backend failure
    pub fn solve(&self, matrix: &Matrix, algorithm: Algorithm) -> Result<RowSet> {
        self.solve_with_proof(matrix, algorithm).map(|(rows, _)| rows)
    }

    /// Solves and reports whether the selection is proven minimum.
    #[instrument(skip_all, fields(algorithm = %algorithm))]
    fn solve_with_proof(&self, matrix: &Matrix, algorithm: Algorithm) -> Result<(RowSet, bool)> {
        let uncovered = matrix.uncoverable_columns();
        if !uncovered.is_empty() {
            warn!(columns = ?uncovered, "matrix has uncoverable columns");
            return Err(CoverError::infeasible(uncovered));
        }

        match algorithm {
            Algorithm::BranchAndBound => {
                let limit = self.config.branch_and_bound_time_limit;
                let outcome = BranchAndBoundSolver::new()
                    .with_time_limit(limit)
                    .solve_with_stats(matrix);
                match (outcome.is_solution_found(), limit) {
                    (true, _) => {
                        if !outcome.complete {
                            warn!(size = outcome.rows.len(), "returning unproven incumbent");
                        }
                        Ok((outcome.rows, outcome.complete))
                    }
                    (false, Some(limit)) if !outcome.complete => {
                        Err(CoverError::TimeLimit { algorithm, limit })
                    }
                    (false, _) => Err(CoverError::NoSolution { algorithm }),
                }
            }
            Algorithm::Greedy => Ok((GreedySolver::new().solve(matrix), false)),
            Algorithm::GeneticAlgorithm => {
                let genetic = &self.config.genetic;
                let result = GeneticSolver::with_config(genetic.clone()).run(matrix);
                match result.selected_rows() {
                    Some(rows) => Ok((rows, false)),
                    None => match genetic.time_limit {
                        Some(limit) if result.timed_out => {
                            Err(CoverError::TimeLimit { algorithm, limit })
                        }
                        _ => Err(CoverError::NoSolution { algorithm }),
                    },
                }
            }
            Algorithm::LinearProgramming => LpSolver::new().solve(matrix).map(|rows| (rows, true)),
        }
    }

    /// Solves `matrix`, timing the call, and records the result in `store`.
    ///
    /// A failed solve leaves `store` untouched.
    pub fn run<'s>(
        &self,
        matrix: &Matrix,
        algorithm: Algorithm,
        store: &'s mut ResultStore,
    ) -> Result<&'s AlgorithmResult> {
        let start = Instant::now();
        let (rows, optimal) = self.solve_with_proof(matrix, algorithm)?;
        let elapsed = start.elapsed();

        info!(
            %algorithm,
            size = rows.len(),
            optimal,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "solve completed"
        );
        Ok(store.insert(AlgorithmResult::new(algorithm, rows, elapsed).with_optimal(optimal)))
    }

    /// Runs each algorithm in turn, stopping at the first failure.
    ///
    /// Results recorded before the failure stay in `store`.
    #[instrument(skip_all, fields(count = algorithms.len()))]
    pub fn run_all(
        &self,
        matrix: &Matrix,
        algorithms: &[Algorithm],
        store: &mut ResultStore,
    ) -> Result<()> {
        for &algorithm in algorithms {
            self.run(matrix, algorithm, store)?;
        }
        Ok(())
    }
}
