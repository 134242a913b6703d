//! # Posemat - Euler-angle poses to homogeneous transformation matrices
//!
//! Posemat converts 6-parameter poses (X/Y/Z translation plus
//! roll/pitch/yaw in degrees) into 4×4 homogeneous transformation matrices,
//! one at a time or in batch from a CSV pose table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Pose CSV   │────▶│   Parser    │────▶│  Transform  │────▶│  CSV + JSON  │
//! │ (enc/delim) │     │  (auto-enc) │     │  (Rz·Ry·Rx) │     │  (matrices)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
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
//! ).unwrap();
//! println!("Converted {} poses", report.converted);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Pose, PoseRecord, column mapping)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - The matrix engine and the batch pipeline
//! - [`export`] - Rounding, artifact writers, display formatting
//! - [`logs`] - CLI progress reporting

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Conversion
pub mod transform;

// Output
pub mod export;

// Reporting
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    BatchError,
    CsvError,
    FieldErrorKind,
    PoseInputError,
    RowFieldError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Pose, PoseColumns, PoseRecord, REQUIRED_COLUMNS};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_bytes,
    parse_file,
    ParseResult,
};

// =============================================================================
// Re-exports - Engine
// =============================================================================

pub use transform::{compute_transform, rotation_matrix};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    convert_rows,
    run_batch,
    BatchOptions,
    BatchReport,
    ConversionResult,
    CsvInfo,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{format_matrix, round3, round_transform, MatrixEntry};
