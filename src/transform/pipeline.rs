//! High-level batch API: pose table in, two matrix artifacts out.
//!
//! The pipeline parses the input table, converts each row through the
//! engine, and writes the CSV and JSON artifacts. Rows with a missing or
//! unusable field are skipped and their errors collected; they never abort
//! the batch. Only an unreadable input or a failed artifact write is fatal.
//!
//! # Example
//!
//! ```rust,ignore
//! use posemat::{run_batch, BatchOptions};
//! use std::path::Path;
//!
//! let report = run_batch(
//!     Path::new("poses.csv"),
//!     Path::new("matrices.csv"),
//!     Path::new("matrices.json"),
//!     &BatchOptions::default(),
//! )?;
//! println!("Converted {} poses", report.converted);
//! ```

use std::path::Path;

use nalgebra::Matrix4;

use crate::error::{BatchError, BatchResult, RowFieldError};
use crate::export;
use crate::models::{PoseColumns, PoseRecord};
use crate::parser;
use crate::transform::engine::compute_transform;

/// Options for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Force this delimiter instead of auto-detecting it.
    pub delimiter: Option<char>,
}

/// Input table metadata, echoed into the report.
#[derive(Debug, Clone)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Result of converting parsed rows, before anything is written.
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    /// `(record, rounded matrix)` pairs, in input-row order.
    pub matrices: Vec<(PoseRecord, Matrix4<f64>)>,
    /// Field errors for the skipped rows, in input-row order.
    pub errors: Vec<RowFieldError>,
}

impl ConversionResult {
    /// Whether every input row converted.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Report of a completed batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Number of poses written to both artifacts.
    pub converted: usize,
    /// Non-fatal per-row errors, in input-row order.
    pub field_errors: Vec<RowFieldError>,
    /// Input table metadata.
    pub csv_info: CsvInfo,
}

/// Convert parsed rows into rounded transformation matrices.
///
/// The column mapping is resolved once from the headers; each row is then
/// extracted, run through the engine, and rounded to 3 decimals. Output
/// order matches input order.
pub fn convert_rows(headers: &[String], rows: &[Vec<String>]) -> ConversionResult {
    let columns = PoseColumns::resolve(headers);
    let mut result = ConversionResult::default();

    for (row_idx, cells) in rows.iter().enumerate() {
        match columns.extract(row_idx, cells) {
            Ok(record) => {
                let matrix = export::round_transform(&compute_transform(&record.pose));
                result.matrices.push((record, matrix));
            }
            Err(err) => result.errors.push(err),
        }
    }

    result
}

/// Run a complete batch: parse the input table, convert every row, write
/// the CSV and JSON artifacts.
///
/// Both artifacts are written even when some (or all) rows failed; the
/// per-row errors come back in the report. Fatal conditions are an
/// unreadable/empty input and artifact write failures - there is no
/// partial-output guarantee in the write-failure case.
pub fn run_batch(
    input: &Path,
    csv_out: &Path,
    json_out: &Path,
    options: &BatchOptions,
) -> BatchResult<BatchReport> {
    let parsed = parser::parse_file(input, options.delimiter)?;
    if parsed.rows.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let csv_info = CsvInfo {
        encoding: parsed.encoding.clone(),
        delimiter: parsed.delimiter,
        headers: parsed.headers.clone(),
        row_count: parsed.rows.len(),
    };

    let conversion = convert_rows(&parsed.headers, &parsed.rows);

    export::write_matrix_csv(csv_out, &conversion.matrices)?;
    export::write_matrix_json(json_out, &conversion.matrices)?;

    Ok(BatchReport {
        converted: conversion.matrices.len(),
        field_errors: conversion.errors,
        csv_info,
    })
}
