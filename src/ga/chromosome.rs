//! Row-membership chromosome for the cover GA.
//!
//! # Encoding
//!
//! One boolean gene per matrix row: `genes[r] == true` selects row `r`.
//! Every bit string is a valid chromosome; feasibility (full coverage) is
//! expressed through fitness, not through the encoding.

use rand::Rng;

use u_metaheur::ga::Individual;

use crate::models::RowSet;

/// Fitness of a chromosome that does not cover every column.
///
/// Strictly worse than any feasible fitness.
pub const INFEASIBLE: f64 = f64::INFINITY;

/// Boolean row-selection chromosome.
///
/// Lower fitness = better (minimization convention). A full cover scores
/// `selected - covered`, the negated cover score.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverChromosome {
    /// Row membership flags.
    pub genes: Vec<bool>,
    /// Cached fitness ([`INFEASIBLE`] until evaluated).
    pub fitness: f64,
}

impl Individual for CoverChromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl CoverChromosome {
    /// Creates a chromosome from explicit genes.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: INFEASIBLE,
        }
    }

    /// Creates a random chromosome; each row is selected with probability 0.5.
    pub fn random<R: Rng>(num_rows: usize, rng: &mut R) -> Self {
        let genes = (0..num_rows).map(|_| rng.random_bool(0.5)).collect();
        Self::from_genes(genes)
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Selected rows, ascending.
    pub fn selected_rows(&self) -> RowSet {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, g)| **g)
            .map(|(row, _)| row)
            .collect()
    }

    /// Whether the cached fitness marks a full cover.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.fitness.is_finite()
    }

    /// Cover score `covered - selected` (higher = better), if feasible.
    pub fn score(&self) -> Option<i64> {
        self.is_feasible().then(|| -self.fitness as i64)
    }
}

// ======================== Crossover operators ========================

/// Uniform crossover: each gene is taken from either parent with equal probability.
///
/// Produces a single child with unevaluated fitness.
pub fn uniform_crossover<R: Rng>(
    p1: &CoverChromosome,
    p2: &CoverChromosome,
    rng: &mut R,
) -> CoverChromosome {
    let genes = p1
        .genes
        .iter()
        .zip(&p2.genes)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect();
    CoverChromosome::from_genes(genes)
}

// ======================== Mutation operators ========================

/// Flip mutation: inverts one uniformly chosen gene.
pub fn flip_mutation<R: Rng>(chromosome: &mut CoverChromosome, rng: &mut R) {
    let len = chromosome.genes.len();
    if len == 0 {
        return;
    }
    let idx = rng.random_range(0..len);
    chromosome.genes[idx] = !chromosome.genes[idx];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_random_chromosome() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = CoverChromosome::random(8, &mut rng);
        assert_eq!(ch.genes.len(), 8);
        assert_eq!(ch.fitness, INFEASIBLE);
        assert!(!ch.is_feasible());
    }

    #[test]
    fn test_selected_rows() {
        let ch = CoverChromosome::from_genes(vec![false, true, true, false]);
        assert_eq!(ch.selected_count(), 2);
        assert_eq!(ch.selected_rows().as_slice(), &[1, 2]);
    }

    #[test]
    fn test_score_is_negated_fitness() {
        let mut ch = CoverChromosome::from_genes(vec![true, true]);
        assert_eq!(ch.score(), None);
        ch.fitness = -3.0;
        assert!(ch.is_feasible());
        assert_eq!(ch.score(), Some(3));
    }

    #[test]
    fn test_uniform_crossover_takes_genes_from_parents() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = CoverChromosome::from_genes(vec![true; 16]);
        let p2 = CoverChromosome::from_genes(vec![false; 16]);

        let child = uniform_crossover(&p1, &p2, &mut rng);
        assert_eq!(child.genes.len(), 16);
        assert_eq!(child.fitness, INFEASIBLE);
        // With 16 fair coin flips both parents contribute.
        assert!(child.genes.iter().any(|&g| g));
        assert!(child.genes.iter().any(|&g| !g));
    }

    #[test]
    fn test_crossover_of_identical_parents_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p = CoverChromosome::from_genes(vec![true, false, true]);
        let child = uniform_crossover(&p, &p, &mut rng);
        assert_eq!(child.genes, p.genes);
    }

    #[test]
    fn test_flip_mutation_changes_exactly_one_gene() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original = CoverChromosome::from_genes(vec![false; 10]);
        let mut ch = original.clone();
        flip_mutation(&mut ch, &mut rng);

        let diff = ch
            .genes
            .iter()
            .zip(&original.genes)
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(diff, 1);
    }

    #[test]
    fn test_flip_mutation_empty() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = CoverChromosome::from_genes(Vec::new());
        flip_mutation(&mut ch, &mut rng);
        assert!(ch.genes.is_empty());
    }
}
