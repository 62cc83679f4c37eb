//! Generational GA loop with elitism.
//!
//! Drives any [`GaProblem`] from `u-metaheur` (lower fitness = better).
//!
//! # Generation
//!
//! 1. Score the initial population once; later individuals are scored when
//!    created or mutated.
//! 2. Track the best-ever individual (ties keep the earlier one).
//! 3. Stop early once the best-ever is optimal ([`StopCriterion`]).
//! 4. Select two parents.
//! 5. Cross them over into children.
//! 6. Mutate each of children ∪ population with probability `mutation_rate`.
//! 7. Next population = best-ever + top `population_size - 1` candidates.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

use std::cmp::Ordering;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;
use u_metaheur::ga::{Fitness, GaProblem, Individual};

use super::operators::{GeneticOperators, SelectionType};
use crate::monitor::TimeLimit;

/// Early-stop test layered on [`GaProblem`].
pub trait StopCriterion: GaProblem {
    /// Whether an evaluated individual cannot be improved upon, ending the run.
    fn is_optimal(&self, _individual: &Self::Individual) -> bool {
        false
    }
}

/// GA hyperparameters.
///
/// # Example
/// ```
/// use u_cover::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// assert_eq!(config.mutation_rate, 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation (default: 100).
    pub population_size: usize,
    /// Generation cap (default: 1000).
    pub max_generations: usize,
    /// Per-individual probability of a single-gene flip (default: 0.01).
    pub mutation_rate: f64,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Stop as soon as the best individual is optimal for its size (default: true).
    pub early_stop: bool,
    /// Wall-clock limit checked once per generation.
    pub time_limit: Option<Duration>,
    /// Parent selection strategy.
    pub selection: SelectionType,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            mutation_rate: 0.01,
            seed: None,
            early_stop: true,
            time_limit: None,
            selection: SelectionType::Roulette,
        }
    }
}

impl GaConfig {
    /// Sets the population size (at least 1).
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size.max(1);
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the mutation rate (clamped to 0.0..=1.0).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables early stopping.
    pub fn with_early_stop(mut self, early_stop: bool) -> Self {
        self.early_stop = early_stop;
        self
    }

    /// Sets a wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: SelectionType) -> Self {
        self.selection = selection;
        self
    }

    fn effective_mutation_rate(&self) -> f64 {
        if self.mutation_rate.is_finite() {
            self.mutation_rate.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual ever seen (`None` only if no generation ran).
    pub best: Option<I>,
    /// Fitness of `best` (worst possible if none).
    pub best_fitness: I::Fitness,
    /// Best fitness present in each generation's population.
    pub history: Vec<I::Fitness>,
    /// Generations evaluated.
    pub generations: usize,
    /// Whether the early-stop condition ended the run.
    pub stopped_early: bool,
    /// Whether the time limit ended the run.
    pub timed_out: bool,
}

/// Runs the generation loop for any [`StopCriterion`] problem.
pub struct GaRunner;

impl GaRunner {
    /// Runs with an RNG seeded from `config.seed` (or the OS).
    pub fn run<P: StopCriterion>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs with a caller-supplied RNG.
    pub fn run_with_rng<P: StopCriterion, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> GaResult<P::Individual> {
        let population_size = config.population_size.max(1);
        let mutation_rate = config.effective_mutation_rate();
        let operators = GeneticOperators::new(config.selection);
        let mut deadline = TimeLimit::with_clock_check_mask(config.time_limit, 0);

        let mut population: Vec<P::Individual> = (0..population_size)
            .map(|_| {
                let mut individual = problem.create_individual(rng);
                let fitness = problem.evaluate(&individual);
                individual.set_fitness(fitness);
                individual
            })
            .collect();
        let mut best: Option<P::Individual> = None;

        let mut result = GaResult {
            best: None,
            best_fitness: Fitness::worst(),
            history: Vec::new(),
            generations: 0,
            stopped_early: false,
            timed_out: false,
        };

        for generation in 0..config.max_generations {
            if deadline.step() {
                debug!(generation, "GA stopped by time limit");
                result.timed_out = true;
                break;
            }
            result.generations += 1;

            let mut generation_best: <P::Individual as Individual>::Fitness = Fitness::worst();
            for individual in &population {
                let fitness = individual.fitness();
                if fitness < generation_best {
                    generation_best = fitness;
                }
                if best.as_ref().is_none_or(|b| fitness < b.fitness()) {
                    debug!(generation, fitness = fitness.to_f64(), "GA improved");
                    best = Some(individual.clone());
                }
            }
            result.history.push(generation_best);
            if let Some(b) = &best {
                problem.on_generation(generation, b.fitness());
            }

            if config.early_stop && best.as_ref().is_some_and(|b| problem.is_optimal(b)) {
                result.stopped_early = true;
                break;
            }

            let fitness: Vec<f64> = population.iter().map(|i| i.fitness().to_f64()).collect();
            let Some([a, b]) = operators.select_parents(&fitness, rng) else {
                break;
            };
            let mut candidates = problem.crossover(&population[a], &population[b], rng);
            let child_count = candidates.len();
            candidates.append(&mut population);

            // Children are unscored; survivors keep their cached fitness unless mutated.
            for (i, individual) in candidates.iter_mut().enumerate() {
                let mutated = rng.random_bool(mutation_rate);
                if mutated {
                    problem.mutate(individual, rng);
                }
                if mutated || i < child_count {
                    let fitness = problem.evaluate(individual);
                    individual.set_fitness(fitness);
                }
            }
            candidates.sort_by(|x, y| {
                x.fitness()
                    .partial_cmp(&y.fitness())
                    .unwrap_or(Ordering::Equal)
            });
            candidates.truncate(population_size - 1);

            population = best.iter().cloned().chain(candidates).collect();
        }

        if let Some(b) = &best {
            result.best_fitness = b.fitness();
        }
        result.best = best;
        debug!(
            generations = result.generations,
            best_fitness = result.best_fitness.to_f64(),
            stopped_early = result.stopped_early,
            "GA finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    /// Maximize the number of `true` genes; optimal when all are set.
    struct OneMax {
        len: usize,
    }

    #[derive(Debug, Clone)]
    struct Bits {
        genes: Vec<bool>,
        fitness: f64,
    }

    impl Individual for Bits {
        type Fitness = f64;

        fn fitness(&self) -> f64 {
            self.fitness
        }

        fn set_fitness(&mut self, fitness: f64) {
            self.fitness = fitness;
        }
    }

    fn ones(bits: &Bits) -> f64 {
        -(bits.genes.iter().filter(|&&g| g).count() as f64)
    }

    fn random_bits<R: Rng>(len: usize, rng: &mut R) -> Bits {
        Bits {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
            fitness: f64::INFINITY,
        }
    }

    impl GaProblem for OneMax {
        type Individual = Bits;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Bits {
            random_bits(self.len, rng)
        }

        fn evaluate(&self, individual: &Bits) -> f64 {
            ones(individual)
        }

        fn crossover<R: Rng>(&self, p1: &Bits, p2: &Bits, rng: &mut R) -> Vec<Bits> {
            let genes = p1
                .genes
                .iter()
                .zip(&p2.genes)
                .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
                .collect();
            vec![Bits {
                genes,
                fitness: f64::INFINITY,
            }]
        }

        fn mutate<R: Rng>(&self, individual: &mut Bits, rng: &mut R) {
            let i = rng.random_range(0..individual.genes.len());
            individual.genes[i] = !individual.genes[i];
        }
    }

    impl StopCriterion for OneMax {
        fn is_optimal(&self, individual: &Bits) -> bool {
            individual.fitness == -(self.len as f64)
        }
    }

    /// Crossover and mutation always produce the all-false (worst) individual.
    struct Decaying {
        len: usize,
    }

    impl GaProblem for Decaying {
        type Individual = Bits;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Bits {
            random_bits(self.len, rng)
        }

        fn evaluate(&self, individual: &Bits) -> f64 {
            ones(individual)
        }

        fn crossover<R: Rng>(&self, _p1: &Bits, _p2: &Bits, _rng: &mut R) -> Vec<Bits> {
            vec![Bits {
                genes: vec![false; self.len],
                fitness: f64::INFINITY,
            }]
        }

        fn mutate<R: Rng>(&self, individual: &mut Bits, _rng: &mut R) {
            individual.genes.iter_mut().for_each(|g| *g = false);
        }
    }

    impl StopCriterion for Decaying {}

    /// Every individual scores the same; ids record creation order.
    struct Flat {
        next_id: AtomicUsize,
        evaluations: AtomicUsize,
    }

    impl Flat {
        fn new() -> Self {
            Self {
                next_id: AtomicUsize::new(0),
                evaluations: AtomicUsize::new(0),
            }
        }
    }

    #[derive(Debug, Clone)]
    struct Tagged {
        id: usize,
        fitness: f64,
    }

    impl Individual for Tagged {
        type Fitness = f64;

        fn fitness(&self) -> f64 {
            self.fitness
        }

        fn set_fitness(&mut self, fitness: f64) {
            self.fitness = fitness;
        }
    }

    impl GaProblem for Flat {
        type Individual = Tagged;

        fn create_individual<R: Rng>(&self, _rng: &mut R) -> Tagged {
            Tagged {
                id: self.next_id.fetch_add(1, AtomicOrdering::SeqCst),
                fitness: f64::INFINITY,
            }
        }

        fn evaluate(&self, _individual: &Tagged) -> f64 {
            self.evaluations.fetch_add(1, AtomicOrdering::SeqCst);
            0.0
        }
    }

    impl StopCriterion for Flat {}

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 1000);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!(config.early_stop);
        assert_eq!(config.selection, SelectionType::Roulette);
    }

    #[test]
    fn test_config_builders_clamp() {
        let config = GaConfig::default()
            .with_population_size(0)
            .with_mutation_rate(3.0);
        assert_eq!(config.population_size, 1);
        assert!((config.mutation_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: GaConfig = serde_json::from_str(r#"{"population_size": 10}"#).unwrap();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.max_generations, 1000);

        let json = serde_json::to_string(&GaConfig::default().with_seed(7)).unwrap();
        let back: GaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(7));
    }

    #[test]
    fn test_runner_improves() {
        let problem = OneMax { len: 12 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(300)
            .with_mutation_rate(0.5)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config);
        assert!(result.generations > 0);
        assert_eq!(result.history.len(), result.generations);
        let best = result.best.unwrap();
        assert_eq!(best.fitness, result.best_fitness);
        assert!(result.best_fitness <= -8.0);
    }

    #[test]
    fn test_elite_survives_destructive_mutation() {
        let problem = Decaying { len: 8 };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(25)
            .with_mutation_rate(1.0)
            .with_early_stop(false)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config);
        assert_eq!(result.history.len(), 25);

        let mut best_so_far = f64::INFINITY;
        for &generation_best in &result.history {
            if best_so_far.is_finite() {
                assert!(generation_best <= best_so_far);
            }
            best_so_far = best_so_far.min(generation_best);
        }
        // Only the elite escapes decay, so the initial best persists.
        assert!(result.history[0] < 0.0);
        assert!(result.history.iter().all(|&f| f == result.history[0]));
        assert_eq!(result.best_fitness, result.history[0]);
    }

    #[test]
    fn test_ties_keep_earlier_individual() {
        let problem = Flat::new();
        let config = GaConfig::default()
            .with_population_size(5)
            .with_max_generations(3)
            .with_early_stop(false)
            .with_seed(1);

        let result = GaRunner::run(&problem, &config);
        assert_eq!(result.best.unwrap().id, 0);
        assert!(result.history.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_unchanged_survivors_are_not_rescored() {
        let problem = Flat::new();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(5)
            .with_mutation_rate(0.0)
            .with_early_stop(false)
            .with_seed(1);

        GaRunner::run(&problem, &config);
        // Initial population plus one child per generation.
        assert_eq!(problem.evaluations.load(AtomicOrdering::SeqCst), 10 + 5);
    }

    #[test]
    fn test_early_stop() {
        // A single gene: some initial individual is almost surely optimal.
        let problem = OneMax { len: 1 };
        let config = GaConfig::default().with_population_size(30).with_seed(42);

        let result = GaRunner::run(&problem, &config);
        assert!(result.stopped_early);
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_fitness, -1.0);
    }

    #[test]
    fn test_seed_is_deterministic() {
        let problem = OneMax { len: 16 };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(20)
            .with_early_stop(false)
            .with_seed(7);

        let a = GaRunner::run(&problem, &config);
        let b = GaRunner::run(&problem, &config);
        assert_eq!(a.best.unwrap().genes, b.best.unwrap().genes);
        assert_eq!(a.generations, 20);
    }

    #[test]
    fn test_zero_time_limit() {
        let problem = OneMax { len: 4 };
        let config = GaConfig::default()
            .with_time_limit(Duration::ZERO)
            .with_seed(1);

        let result = GaRunner::run(&problem, &config);
        assert!(result.timed_out);
        assert_eq!(result.generations, 0);
        assert!(result.best.is_none());
        assert_eq!(result.best_fitness, f64::INFINITY);
    }

    #[test]
    fn test_zero_generations() {
        let problem = OneMax { len: 4 };
        let config = GaConfig::default().with_max_generations(0).with_seed(1);
        let result = GaRunner::run(&problem, &config);
        assert!(result.best.is_none());
        assert_eq!(result.generations, 0);
        assert!(result.history.is_empty());
    }
}
