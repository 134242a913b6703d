//! Output formatting for computed matrices.
//!
//! Two batch artifacts share the same rounded values:
//!
//! - a CSV table, one row per pose, matrix flattened row-major as `M1..M16`
//! - a JSON array of `{ position, transform_matrix }` objects with the
//!   matrix kept as nested rows, indented with 4 spaces
//!
//! plus the 3-decimal grid used to display a single computed matrix.

use std::fs::File;
use std::path::Path;

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use crate::error::BatchResult;
use crate::models::PoseRecord;

/// Header of the tabular export: `position_id` followed by `M1..M16`.
pub fn csv_headers() -> Vec<String> {
    let mut headers = Vec::with_capacity(17);
    headers.push("position_id".to_string());
    for i in 1..=16 {
        headers.push(format!("M{}", i));
    }
    headers
}

/// Round a value to 3 decimal places, half away from zero.
///
/// Values that round to zero are normalized to `0.0` so no artifact ever
/// serializes a `-0.0`.
pub fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round every entry of a matrix to 3 decimal places.
pub fn round_transform(matrix: &Matrix4<f64>) -> Matrix4<f64> {
    matrix.map(round3)
}

/// The matrix as nested rows (row-major), the JSON export layout.
pub fn matrix_rows(matrix: &Matrix4<f64>) -> [[f64; 4]; 4] {
    std::array::from_fn(|i| std::array::from_fn(|j| matrix[(i, j)]))
}

// =============================================================================
// JSON Export
// =============================================================================

/// One element of the JSON export array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// Position identifier, zero-padded to at least 2 characters.
    pub position: String,
    /// The 4×4 matrix as nested rows.
    pub transform_matrix: [[f64; 4]; 4],
}

impl MatrixEntry {
    pub fn new(record: &PoseRecord, matrix: &Matrix4<f64>) -> Self {
        Self {
            position: record.padded_position(),
            transform_matrix: matrix_rows(matrix),
        }
    }
}

/// Write the JSON artifact: an array of [`MatrixEntry`] objects, 4-space
/// indented.
pub fn write_matrix_json(path: &Path, matrices: &[(PoseRecord, Matrix4<f64>)]) -> BatchResult<()> {
    let entries: Vec<MatrixEntry> = matrices
        .iter()
        .map(|(record, matrix)| MatrixEntry::new(record, matrix))
        .collect();

    let file = File::create(path)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(file, formatter);
    entries.serialize(&mut serializer)?;
    Ok(())
}

// =============================================================================
// CSV Export
// =============================================================================

/// Write the tabular artifact: `position_id, M1..M16`, matrix flattened
/// row-major, one row per converted pose.
pub fn write_matrix_csv(path: &Path, matrices: &[(PoseRecord, Matrix4<f64>)]) -> BatchResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(csv_headers())?;

    for (record, matrix) in matrices {
        let mut fields = Vec::with_capacity(17);
        fields.push(record.position.clone());
        for i in 0..4 {
            for j in 0..4 {
                fields.push(format_value(matrix[(i, j)]));
            }
        }
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    Ok(())
}

/// Shortest round-trip decimal with an explicit fractional part
/// (`1.0`, not `1`), matching the JSON side.
fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Format a matrix as a 4-line grid of tab-separated values rounded to
/// 3 decimal places, the single-pose result display.
pub fn format_matrix(matrix: &Matrix4<f64>) -> String {
    (0..4)
        .map(|i| {
            (0..4)
                .map(|j| format!("{:.3}", matrix[(i, j)]))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pose;
    use crate::transform::engine::compute_transform;

    fn record(position: &str) -> PoseRecord {
        PoseRecord {
            position: position.into(),
            row: 0,
            pose: Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        }
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.70710678), 0.707);
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-1.23456), -1.235);
        assert_eq!(round3(2.0), 2.0);
    }

    #[test]
    fn test_round3_no_negative_zero() {
        let rounded = round3(-0.0001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_matrix_rows_is_row_major() {
        let mut m = Matrix4::identity();
        m[(0, 3)] = 7.0;
        let rows = matrix_rows(&m);
        assert_eq!(rows[0], [1.0, 0.0, 0.0, 7.0]);
        assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_csv_headers() {
        let headers = csv_headers();
        assert_eq!(headers.len(), 17);
        assert_eq!(headers[0], "position_id");
        assert_eq!(headers[1], "M1");
        assert_eq!(headers[16], "M16");
    }

    #[test]
    fn test_matrix_entry_pads_position() {
        let entry = MatrixEntry::new(&record("3"), &Matrix4::identity());
        assert_eq!(entry.position, "03");
        assert_eq!(entry.transform_matrix[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_json_artifact_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrices.json");
        let matrices = vec![(record("1"), Matrix4::identity())];

        write_matrix_json(&path, &matrices).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        // 4-space indentation, padded identifier, nested rows.
        assert!(content.contains("    {"));
        assert!(content.contains("\"position\": \"01\""));

        let parsed: Vec<MatrixEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].transform_matrix[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_csv_artifact_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrices.csv");
        let mut m = Matrix4::identity();
        m[(0, 3)] = 2.5;
        let matrices = vec![(record("7"), m)];

        write_matrix_csv(&path, &matrices).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("position_id,M1,"));
        // Identifier is not padded in the tabular export; M4 is the x
        // translation, M16 the homogeneous 1.
        assert_eq!(
            lines[1],
            "7,1.0,0.0,0.0,2.5,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0"
        );
    }

    #[test]
    fn test_format_matrix_grid() {
        let pose = Pose::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0);
        let grid = format_matrix(&compute_transform(&pose));
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "1.000\t0.000\t0.000\t1.000");
        assert_eq!(lines[3], "0.000\t0.000\t0.000\t1.000");
    }

    #[test]
    fn test_format_matrix_rounds_to_3_decimals() {
        let pose = Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 45.0);
        let grid = format_matrix(&compute_transform(&pose));
        assert!(grid.contains("0.707"));
        assert!(!grid.contains("0.7071"));
    }
}
