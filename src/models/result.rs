//! Timed solver results and the caller-owned result store.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::RowSet;
use crate::error::{CoverError, Result};
use crate::registry::Algorithm;

/// The outcome of one timed solve.
///
/// Immutable once created. Re-running the same algorithm replaces the entry
/// in [`ResultStore`] rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Selected rows (ascending).
    pub rows: RowSet,
    /// Wall-clock duration of the solve call.
    pub elapsed: Duration,
    /// Whether `rows` is proven to be a minimum cover.
    #[serde(default)]
    pub optimal: bool,
}

impl AlgorithmResult {
    /// Creates a new result with no optimality proof.
    pub fn new(algorithm: Algorithm, rows: RowSet, elapsed: Duration) -> Self {
        Self {
            algorithm,
            rows,
            elapsed,
            optimal: false,
        }
    }

    /// Marks whether the selection is proven minimum.
    pub fn with_optimal(mut self, optimal: bool) -> Self {
        self.optimal = optimal;
        self
    }
}

impl fmt::Display for AlgorithmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Minimum rows for full coverage: {}",
            self.algorithm, self.rows
        )
    }
}

/// Results keyed by algorithm, owned by the caller.
///
/// Holds at most one result per [`Algorithm`]; the latest run wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultStore {
    results: BTreeMap<Algorithm, AlgorithmResult>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a result, replacing any previous one for the same algorithm.
    ///
    /// Returns the stored entry.
    pub fn insert(&mut self, result: AlgorithmResult) -> &AlgorithmResult {
        let algorithm = result.algorithm;
        self.results.insert(algorithm, result);
        &self.results[&algorithm]
    }

    /// Latest result for `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmResult> {
        self.results.get(&algorithm)
    }

    /// Latest selected rows for `algorithm`.
    pub fn rows(&self, algorithm: Algorithm) -> Option<&RowSet> {
        self.get(algorithm).map(|r| &r.rows)
    }

    /// Latest recorded duration for `algorithm`.
    pub fn elapsed(&self, algorithm: Algorithm) -> Option<Duration> {
        self.get(algorithm).map(|r| r.elapsed)
    }

    /// Number of algorithms with a recorded result.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All results, ordered by algorithm.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmResult> {
        self.results.values()
    }

    /// Recorded durations for the requested algorithms, in request order.
    ///
    /// Fails with [`CoverError::MissingResult`] on the first algorithm that
    /// was never run.
    pub fn compare(&self, algorithms: &[Algorithm]) -> Result<Vec<(Algorithm, Duration)>> {
        algorithms
            .iter()
            .map(|&algorithm| {
                self.elapsed(algorithm)
                    .map(|elapsed| (algorithm, elapsed))
                    .ok_or(CoverError::MissingResult(algorithm))
            })
            .collect()
    }
}
