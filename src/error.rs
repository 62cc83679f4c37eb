//! Crate-wide error type.
//!
//! Structural problems with the input matrix are collected by
//! [`validation`](crate::validation) and surfaced as a single
//! [`CoverError::InvalidMatrix`]. Everything else a solve can fail with is a
//! dedicated variant so callers never have to inspect messages.

use std::time::Duration;

use thiserror::Error;

use crate::registry::Algorithm;
use crate::validation::ValidationError;

/// Errors produced while validating input or solving a cover problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverError {
    /// The matrix failed structural validation.
    #[error("invalid matrix: {}", join_messages(.0))]
    InvalidMatrix(Vec<ValidationError>),

    /// An algorithm identifier outside the supported set.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// No row subset covers every column.
    ///
    /// `columns` lists the columns without any nonzero entry. It is empty when
    /// the infeasibility was reported by the integer programming backend.
    #[error("infeasible: columns {columns:?} are not covered by any row")]
    Infeasible { columns: Vec<usize> },

    /// The algorithm terminated without ever reaching full coverage.
    #[error("{algorithm} found no covering selection")]
    NoSolution { algorithm: Algorithm },

    /// The time limit expired before a covering selection was found.
    #[error("{algorithm} reached its time limit of {limit:?} without a cover")]
    TimeLimit { algorithm: Algorithm, limit: Duration },

    /// The integer programming backend failed for a reason other than infeasibility.
    #[error("integer programming solver failed: {message}")]
    Solver { message: String },

    /// A comparison referenced an algorithm with no recorded result.
    #[error("no recorded result for {0}")]
    MissingResult(Algorithm),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoverError>;

impl CoverError {
    /// Creates an infeasibility error for the given uncovered columns.
    pub fn infeasible(columns: Vec<usize>) -> Self {
        Self::Infeasible { columns }
    }

    /// Creates a backend failure error.
    pub fn solver(message: impl Into<String>) -> Self {
        Self::Solver {
            message: message.into(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
