//! Minimum row coverage on binary matrices.
//!
//! Given a matrix whose nonzero entry `(r, c)` means "row `r` covers column
//! `c`", find a smallest set of rows covering every column (unicost set
//! cover). Four interchangeable solvers are provided behind a single
//! registry.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Matrix`, `RowSet`, `AlgorithmResult`, `ResultStore`
//! - **`validation`**: Structural checks on raw matrix input
//! - **`coverage`**: Coverage predicate and incremental coverage tracking
//! - **`solver`**: Greedy heuristic, exact branch and bound, cover KPIs
//! - **`ga`**: Genetic algorithm framework and cover encoding
//! - **`lp`**: 0/1 integer programming formulation (`good_lp` + `microlp`)
//! - **`registry`**: `Algorithm` dispatch and timed runs
//! - **`monitor`**: Wall-clock limits for long searches
//!
//! # Example
//!
//! ```
//! use u_cover::{Algorithm, Matrix, SolverRegistry};
//!
//! let m = Matrix::new(vec![vec![0, 1, 0, 0], vec![1, 1, 1, 0], vec![0, 0, 1, 1]]).unwrap();
//! let rows = SolverRegistry::new().solve(&m, Algorithm::LinearProgramming).unwrap();
//! assert_eq!(rows.to_string(), "2, 3");
//! ```
//!
//! # Logging
//!
//! Solvers emit `tracing` events; the crate never installs a subscriber.
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Beasley & Chu (1996), "A genetic algorithm for the set covering problem"
//! - Caprara, Toth & Fischetti (2000), "Algorithms for the Set Covering Problem"

pub mod coverage;
pub mod error;
pub mod ga;
pub mod lp;
pub mod models;
pub mod monitor;
pub mod registry;
pub mod solver;
pub mod validation;

pub use coverage::covers_all;
pub use error::{CoverError, Result};
pub use models::{AlgorithmResult, Matrix, ResultStore, RowSet};
pub use registry::{Algorithm, SolverConfig, SolverRegistry};
