//! GA-based cover search.
//!
//! A generational GA loop ([`GaRunner`]) over the `u_metaheur::ga` problem
//! traits, and its cover-specific encoding.
//!
//! # Encoding
//!
//! One boolean gene per matrix row. Fitness is `selected - covered` for full
//! covers and [`INFEASIBLE`] otherwise (lower = better), so any cover outranks
//! any non-cover and smaller covers outrank larger ones.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable parent selection strategies
//!
//! # Reference
//! - Beasley & Chu (1996), "A genetic algorithm for the set covering problem"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod chromosome;
pub mod operators;
mod problem;
mod runner;

pub use chromosome::{CoverChromosome, INFEASIBLE, flip_mutation, uniform_crossover};
pub use problem::{CoverGaProblem, GeneticSolver, cover_fitness};
pub use runner::{GaConfig, GaResult, GaRunner, StopCriterion};
