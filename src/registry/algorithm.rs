//! Closed set of cover algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoverError;

/// A cover algorithm known to [`SolverRegistry`](super::SolverRegistry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Algorithm {
    /// Exhaustive breadth-first search with size pruning (exact).
    BranchAndBound,
    /// Largest-gain-first heuristic.
    Greedy,
    /// Generational GA with elitism (heuristic).
    GeneticAlgorithm,
    /// 0/1 integer program (exact).
    LinearProgramming,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BranchAndBound,
        Algorithm::Greedy,
        Algorithm::GeneticAlgorithm,
        Algorithm::LinearProgramming,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BranchAndBound => "Branch and Bound",
            Algorithm::Greedy => "Greedy",
            Algorithm::GeneticAlgorithm => "Genetic Algorithm",
            Algorithm::LinearProgramming => "Linear Programming",
        }
    }

    /// Whether the algorithm returns a minimum cover when it runs to completion.
    ///
    /// Branch and bound stopped by a time limit returns its best cover so far,
    /// which may not be minimum; see [`AlgorithmResult::optimal`](crate::models::AlgorithmResult::optimal).
    pub fn is_exact(&self) -> bool {
        matches!(self, Algorithm::BranchAndBound | Algorithm::LinearProgramming)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CoverError;

    /// Accepts display names and snake/kebab identifiers, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "branch and bound" | "bnb" => Ok(Algorithm::BranchAndBound),
            "greedy" => Ok(Algorithm::Greedy),
            "genetic algorithm" | "genetic" | "ga" => Ok(Algorithm::GeneticAlgorithm),
            "linear programming" | "lp" => Ok(Algorithm::LinearProgramming),
            _ => Err(CoverError::UnknownAlgorithm(s.to_string())),
        }
    }
}
