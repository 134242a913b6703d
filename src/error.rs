//! Error types for the posemat conversion pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`PoseInputError`] - single-pose text input validation
//! - [`CsvError`] - CSV ingestion errors (fatal to a batch)
//! - [`RowFieldError`] - per-row field errors (non-fatal, collected)
//! - [`BatchError`] - top-level batch orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Single-Pose Input Errors
// =============================================================================

/// Validation failure for the single-pose text input path.
///
/// The display text is a fixed, user-facing message: every non-numeric field
/// produces the same message, shown in place of a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter valid numeric values.")]
pub struct PoseInputError;

// =============================================================================
// CSV Ingestion Errors
// =============================================================================

/// Errors while reading the batch input table. All of these are fatal:
/// if the table itself cannot be loaded there is nothing to iterate.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Input file has no content.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header row could not be split into column names.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Per-Row Field Errors
// =============================================================================

/// Why a field lookup failed for a given row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The column does not exist in the header row.
    MissingColumn,
    /// The cell exists but is empty.
    EmptyValue,
    /// The cell text could not be parsed as a number.
    NotNumeric(String),
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn => write!(f, "column does not exist"),
            Self::EmptyValue => write!(f, "value is empty"),
            Self::NotNumeric(value) => write!(f, "value '{}' is not numeric", value),
        }
    }
}

/// A required field that could not be read for one input row.
///
/// These are collected while the batch keeps processing the remaining rows;
/// they never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Row {row}: column '{field}': {kind}")]
pub struct RowFieldError {
    /// Zero-based index of the data row (header excluded).
    pub row: usize,
    /// Name of the offending column.
    pub field: String,
    /// What went wrong with the lookup.
    pub kind: FieldErrorKind,
}

// =============================================================================
// Batch Errors (top-level)
// =============================================================================

/// Top-level batch orchestration errors.
///
/// This is the main error type returned by [`crate::transform::run_batch`].
/// It wraps the fatal lower-level errors; [`RowFieldError`]s are *not* part
/// of it because they are collected into the report instead.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Input table could not be loaded.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Tabular export could not be written.
    #[error("Failed to write matrix CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    /// JSON export could not be serialized or written.
    #[error("Failed to write matrix JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Output destination I/O failure.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Input table parsed but contains no data rows.
    #[error("No pose rows to convert")]
    EmptyInput,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV ingestion.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_input_error_message_is_fixed() {
        assert_eq!(
            PoseInputError.to_string(),
            "Please enter valid numeric values."
        );
    }

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> BatchError
        let csv_err = CsvError::EmptyFile;
        let batch_err: BatchError = csv_err.into();
        assert!(batch_err.to_string().contains("empty"));
    }

    #[test]
    fn test_row_field_error_format() {
        let err = RowFieldError {
            row: 3,
            field: "Roll".into(),
            kind: FieldErrorKind::MissingColumn,
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 3"));
        assert!(msg.contains("'Roll'"));
        assert!(msg.contains("does not exist"));
    }

    #[test]
    fn test_not_numeric_includes_value() {
        let err = RowFieldError {
            row: 0,
            field: "Yaw".into(),
            kind: FieldErrorKind::NotNumeric("abc".into()),
        };
        assert!(err.to_string().contains("'abc'"));
    }
}
