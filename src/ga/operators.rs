//! Configurable parent selection for the cover GA.
//!
//! Provides runtime-selectable selection strategies via [`GeneticOperators`].
//!
//! # Usage
//!
//! ```
//! use u_cover::ga::operators::{GeneticOperators, SelectionType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.selection_type, SelectionType::Roulette);
//! ```

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};

/// Parent selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionType {
    /// Fitness-proportional (roulette-wheel) selection over shifted fitness.
    ///
    /// Feasible (finite) individuals weigh `max_feasible - fitness + 1`,
    /// infeasible ones weigh nothing. Falls back to [`Rank`](SelectionType::Rank) when no
    /// individual is feasible.
    #[default]
    Roulette,
    /// Linear rank selection: the best (lowest) of `n` weighs `n`, the worst weighs `1`.
    ///
    /// Ties keep population order.
    Rank,
}

/// Runtime-selectable genetic operators for the cover GA.
///
/// # Example
///
/// ```
/// use u_cover::ga::operators::{GeneticOperators, SelectionType};
///
/// let ops = GeneticOperators {
///     selection_type: SelectionType::Rank,
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticOperators {
    /// Parent selection strategy.
    pub selection_type: SelectionType,
}

impl GeneticOperators {
    /// Creates operators with the given selection strategy.
    pub fn new(selection_type: SelectionType) -> Self {
        Self { selection_type }
    }

    /// Samples two parent indices (with replacement) from scored fitness values
    /// (lower = better).
    ///
    /// Returns `None` only for an empty population.
    pub fn select_parents<R: Rng + ?Sized>(
        &self,
        fitness: &[f64],
        rng: &mut R,
    ) -> Option<[usize; 2]> {
        if fitness.is_empty() {
            return None;
        }
        let weights = match self.selection_type {
            SelectionType::Roulette => {
                roulette_weights(fitness).unwrap_or_else(|| rank_weights(fitness))
            }
            SelectionType::Rank => rank_weights(fitness),
        };
        let dist = WeightedIndex::new(&weights).ok()?;
        Some([dist.sample(rng), dist.sample(rng)])
    }
}

/// Shifted proportional weights, or `None` when nothing is feasible.
fn roulette_weights(fitness: &[f64]) -> Option<Vec<f64>> {
    let max_feasible = fitness
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .max_by(f64::total_cmp)?;
    Some(
        fitness
            .iter()
            .map(|&f| {
                if f.is_finite() {
                    max_feasible - f + 1.0
                } else {
                    0.0
                }
            })
            .collect(),
    )
}

fn rank_weights(fitness: &[f64]) -> Vec<f64> {
    let n = fitness.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));

    let mut weights = vec![0.0; n];
    for (rank, &idx) in order.iter().enumerate() {
        weights[idx] = (n - rank) as f64;
    }
    weights
}
