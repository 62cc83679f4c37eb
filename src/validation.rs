//! Input validation for cover matrices.
//!
//! Checks structural integrity of a raw matrix before any solver sees it.
//! Detects:
//! - Empty matrices
//! - Rows with no columns
//! - Ragged rows (length differs from the first row)
//! - Negative or oversized entries
//!
//! Uncoverable columns are *not* a validation error: the matrix is
//! well-formed, the problem is just infeasible. See
//! [`Matrix::uncoverable_columns`](crate::models::Matrix::uncoverable_columns).

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The matrix has no rows.
    EmptyMatrix,
    /// A row has no columns.
    EmptyRow,
    /// A row's length differs from the first row.
    RaggedRow,
    /// An entry is below zero.
    NegativeEntry,
    /// An entry does not fit the stored cell type.
    EntryOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a raw row-major matrix.
///
/// Checks:
/// 1. At least one row exists
/// 2. Every row has at least one column
/// 3. Every row has the same length as the first row
/// 4. Every entry is a non-negative integer representable as `u32`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_rows(rows: &[Vec<i64>]) -> ValidationResult {
    let mut errors = Vec::new();

    let Some(first) = rows.first() else {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyMatrix,
            "Matrix has no rows",
        )]);
    };
    let width = first.len();

    for (i, row) in rows.iter().enumerate() {
        if row.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRow,
                format!("Row {i} has no columns"),
            ));
            continue;
        }

        if row.len() != width {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedRow,
                format!("Row {i} has {} columns, expected {width}", row.len()),
            ));
        }

        for (j, &value) in row.iter().enumerate() {
            if value < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeEntry,
                    format!("Entry ({i}, {j}) is negative: {value}"),
                ));
            } else if value > i64::from(u32::MAX) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EntryOutOfRange,
                    format!("Entry ({i}, {j}) is out of range: {value}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
