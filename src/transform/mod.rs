//! Pose-to-matrix conversion.
//!
//! - [`engine`] - the pure Euler-angle to homogeneous-matrix computation
//! - [`pipeline`] - the batch run: table in, CSV + JSON artifacts out

pub mod engine;
pub mod pipeline;

pub use engine::{compute_transform, rotation_matrix};
pub use pipeline::{
    convert_rows, run_batch, BatchOptions, BatchReport, ConversionResult, CsvInfo,
};
