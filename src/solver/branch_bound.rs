//! Exact branch-and-bound search over row subsets.
//!
//! # Algorithm
//!
//! A FIFO worklist starts with every singleton `{r}`. Each popped candidate is
//! either
//! - **feasible**: it covers every column; it replaces the incumbent when
//!   strictly smaller and is never extended,
//! - **promising**: infeasible and at least two rows smaller than the
//!   incumbent (or no incumbent yet); it is extended by one row each, or
//! - **pruned**: infeasible and unable to beat the incumbent with one more row.
//!
//! Candidates are only extended with rows above their largest row, so every
//! subset is generated once. FIFO order then visits subsets by size and, within
//! a size, lexicographically, which makes the result the lexicographically
//! smallest minimum cover.
//!
//! # Complexity
//! O(2^m * n) worst case. Use [`with_time_limit`](BranchAndBoundSolver::with_time_limit)
//! for large inputs.
//!
//! # Reference
//! Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, warn};

use crate::coverage::covers_all;
use crate::models::{Matrix, RowSet};
use crate::monitor::TimeLimit;

/// Search statistics and result of a branch-and-bound run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbOutcome {
    /// Best cover found (empty if none).
    pub rows: RowSet,
    /// Candidates popped from the worklist.
    pub explored: u64,
    /// Candidates extended.
    pub branched: u64,
    /// Infeasible candidates discarded by the bound.
    pub pruned: u64,
    /// `false` when the time limit stopped the search early.
    pub complete: bool,
}

impl BnbOutcome {
    /// Whether a cover was found.
    pub fn is_solution_found(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Whether the result is proven minimum.
    pub fn is_optimal(&self) -> bool {
        self.complete && self.is_solution_found()
    }
}

/// Exact minimum cover by breadth-first branch and bound.
///
/// # Example
///
/// ```
/// use u_cover::models::Matrix;
/// use u_cover::solver::BranchAndBoundSolver;
///
/// let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
/// let rows = BranchAndBoundSolver::new().solve(&m);
/// assert_eq!(rows.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver {
    time_limit: Option<Duration>,
}

impl BranchAndBoundSolver {
    /// Creates a solver without a time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search after `limit`, keeping the best cover found so far.
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    /// Configured time limit.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Returns the minimum cover, or an empty set if none exists.
    pub fn solve(&self, matrix: &Matrix) -> RowSet {
        self.solve_with_stats(matrix).rows
    }

    /// Runs the search and reports statistics alongside the result.
    pub fn solve_with_stats(&self, matrix: &Matrix) -> BnbOutcome {
        let mut outcome = BnbOutcome {
            rows: RowSet::new(),
            explored: 0,
            branched: 0,
            pruned: 0,
            complete: true,
        };

        let num_rows = matrix.num_rows();
        if num_rows == 0 {
            return outcome;
        }

        let mut deadline = TimeLimit::new(self.time_limit);
        let mut worklist: VecDeque<Vec<usize>> = (0..num_rows).map(|r| vec![r]).collect();
        let mut best: Option<Vec<usize>> = None;

        while let Some(candidate) = worklist.pop_front() {
            if deadline.step() {
                warn!(
                    explored = outcome.explored,
                    pending = worklist.len() + 1,
                    "branch and bound stopped by time limit"
                );
                outcome.complete = false;
                break;
            }
            outcome.explored += 1;

            if covers_all(matrix, &candidate) {
                if best.as_ref().is_none_or(|b| candidate.len() < b.len()) {
                    debug!(size = candidate.len(), rows = ?candidate, "new incumbent");
                    best = Some(candidate);
                }
                continue;
            }

            let promising = best.as_ref().is_none_or(|b| candidate.len() + 1 < b.len());
            if !promising {
                outcome.pruned += 1;
                continue;
            }

            outcome.branched += 1;
            let last = candidate.last().copied().unwrap_or(0);
            for row in (last + 1)..num_rows {
                let mut extended = Vec::with_capacity(candidate.len() + 1);
                extended.extend_from_slice(&candidate);
                extended.push(row);
                worklist.push_back(extended);
            }
        }

        if let Some(rows) = best {
            outcome.rows = RowSet::from_indices(rows);
        }
        debug!(
            explored = outcome.explored,
            branched = outcome.branched,
            pruned = outcome.pruned,
            size = outcome.rows.len(),
            "branch and bound finished"
        );
        outcome
    }
}
