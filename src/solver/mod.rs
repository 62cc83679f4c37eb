//! Deterministic cover solvers and KPI evaluation.
//!
//! # Algorithms
//!
//! - [`GreedySolver`]: picks the row with the largest marginal coverage until
//!   every column is covered. Fast, not optimal.
//! - [`BranchAndBoundSolver`]: breadth-first subset search with a size bound.
//!   Exact, exponential worst case.
//!
//! # KPI
//!
//! [`CoverKpi`] computes selection size, coverage ratio, redundancy, and
//! column multiplicity for comparing results.
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Balas & Ho (1980), "Set Covering Algorithms Using Cutting Planes, Heuristics,
//!   and Subgradient Optimization"

mod branch_bound;
mod greedy;
mod kpi;

pub use branch_bound::{BnbOutcome, BranchAndBoundSolver};
pub use greedy::GreedySolver;
pub use kpi::CoverKpi;
