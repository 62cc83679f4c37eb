//! Cover GA problem definition.
//!
//! Implements `u_metaheur::ga::GaProblem` for minimum row coverage and wraps
//! it in [`GeneticSolver`], the entry point used by the registry.
//!
//! # Fitness
//!
//! `selected_rows - covered_columns` when every column is covered, otherwise
//! [`INFEASIBLE`]. Lower is better, so among full covers fewer rows is
//! strictly better.

use rand::Rng;
use u_metaheur::ga::GaProblem;

use super::chromosome::{CoverChromosome, INFEASIBLE, flip_mutation, uniform_crossover};
use super::runner::{GaConfig, GaResult, GaRunner, StopCriterion};
use crate::coverage::CoverageState;
use crate::models::{Matrix, RowSet};

/// Computes the fitness of a gene vector against `matrix` (lower = better).
pub fn cover_fitness(matrix: &Matrix, genes: &[bool]) -> f64 {
    let mut state = CoverageState::new(matrix.num_cols());
    let mut selected = 0usize;
    for (row, _) in genes.iter().enumerate().filter(|(_, g)| **g) {
        state.cover_row(matrix, row);
        selected += 1;
    }
    if state.is_complete() {
        selected as f64 - state.covered_count() as f64
    } else {
        INFEASIBLE
    }
}

/// GA problem definition for minimum row coverage.
///
/// # Example
/// ```
/// use u_cover::ga::{CoverGaProblem, GaConfig, GaRunner};
/// use u_cover::models::Matrix;
///
/// let m = Matrix::new(vec![vec![1, 1, 1]]).unwrap();
/// let problem = CoverGaProblem::new(&m);
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42));
/// assert_eq!(result.best.unwrap().selected_rows().as_slice(), &[0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoverGaProblem<'a> {
    matrix: &'a Matrix,
}

impl<'a> CoverGaProblem<'a> {
    /// Creates a problem over `matrix`.
    pub fn new(matrix: &'a Matrix) -> Self {
        Self { matrix }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &'a Matrix {
        self.matrix
    }
}

impl GaProblem for CoverGaProblem<'_> {
    type Individual = CoverChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> CoverChromosome {
        CoverChromosome::random(self.matrix.num_rows(), rng)
    }

    fn evaluate(&self, individual: &CoverChromosome) -> f64 {
        cover_fitness(self.matrix, &individual.genes)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &CoverChromosome,
        parent2: &CoverChromosome,
        rng: &mut R,
    ) -> Vec<CoverChromosome> {
        vec![uniform_crossover(parent1, parent2, rng)]
    }

    fn mutate<R: Rng>(&self, individual: &mut CoverChromosome, rng: &mut R) {
        flip_mutation(individual, rng);
    }
}

impl StopCriterion for CoverGaProblem<'_> {
    /// A full cover whose score equals `num_cols - selected`.
    fn is_optimal(&self, individual: &CoverChromosome) -> bool {
        individual.score()
            == Some(self.matrix.num_cols() as i64 - individual.selected_count() as i64)
    }
}

impl GaResult<CoverChromosome> {
    /// Rows of the best individual, if it is a full cover.
    pub fn selected_rows(&self) -> Option<RowSet> {
        self.best
            .as_ref()
            .filter(|b| b.is_feasible())
            .map(CoverChromosome::selected_rows)
    }
}

/// Genetic-algorithm cover solver.
///
/// Returns `None` when no generation ever produced a full cover, which is
/// distinct from an empty selection.
#[derive(Debug, Clone, Default)]
pub struct GeneticSolver {
    config: GaConfig,
}

impl GeneticSolver {
    /// Creates a solver with default hyperparameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given configuration.
    pub fn with_config(config: GaConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA and returns the full run outcome.
    pub fn run(&self, matrix: &Matrix) -> GaResult<CoverChromosome> {
        GaRunner::run(&CoverGaProblem::new(matrix), &self.config)
    }

    /// Runs the GA and returns the best cover found.
    pub fn solve(&self, matrix: &Matrix) -> Option<RowSet> {
        self.run(matrix).selected_rows()
    }

    /// Runs the GA with a caller-supplied RNG, ignoring `config.seed`.
    pub fn solve_with_rng<R: Rng>(&self, matrix: &Matrix, rng: &mut R) -> Option<RowSet> {
        GaRunner::run_with_rng(&CoverGaProblem::new(matrix), &self.config, rng).selected_rows()
    }
}
