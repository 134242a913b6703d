//! Domain models for the posemat conversion pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`Pose`] - translation + Euler angles, the engine's input
//! - [`PoseRecord`] - a pose with its position identifier and source row
//! - [`PoseColumns`] - validated column mapping resolved from the header row
//!
//! Column names are matched case-sensitively against the trimmed header. The
//! identifier column carries the Spanish name used by the source spreadsheets.

use serde::{Deserialize, Serialize};

use crate::error::{FieldErrorKind, PoseInputError, RowFieldError};

// =============================================================================
// Column Names
// =============================================================================

/// Position identifier column, as named in the source spreadsheets.
pub const COL_POSITION: &str = "Numero de posición";
pub const COL_X: &str = "X";
pub const COL_Y: &str = "Y";
pub const COL_Z: &str = "Z";
pub const COL_ROLL: &str = "Roll";
pub const COL_PITCH: &str = "Pitch";
pub const COL_YAW: &str = "Yaw";

/// All required input columns, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_POSITION,
    COL_X,
    COL_Y,
    COL_Z,
    COL_ROLL,
    COL_PITCH,
    COL_YAW,
];

// =============================================================================
// Pose
// =============================================================================

/// A rigid-body pose: translation in linear units, rotation as roll/pitch/yaw
/// Euler angles in degrees.
///
/// Angles are not wrapped; translations are unconstrained. The value is
/// immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { x, y, z, roll, pitch, yaw }
    }

    /// Parse a pose from six text fields (the single-pose input path).
    ///
    /// Every field is trimmed and parsed as `f64`. Any failure yields the
    /// uniform [`PoseInputError`] whose message replaces the result.
    ///
    /// # Example
    /// ```ignore
    /// let pose = Pose::from_fields("1.5", "0", "-2", "10", "20", "30")?;
    /// assert_eq!(pose.yaw, 30.0);
    /// ```
    pub fn from_fields(
        x: &str,
        y: &str,
        z: &str,
        roll: &str,
        pitch: &str,
        yaw: &str,
    ) -> Result<Self, PoseInputError> {
        Ok(Self {
            x: parse_field(x)?,
            y: parse_field(y)?,
            z: parse_field(z)?,
            roll: parse_field(roll)?,
            pitch: parse_field(pitch)?,
            yaw: parse_field(yaw)?,
        })
    }
}

fn parse_field(text: &str) -> Result<f64, PoseInputError> {
    text.trim().parse::<f64>().map_err(|_| PoseInputError)
}

// =============================================================================
// Pose Record
// =============================================================================

/// A pose read from one batch input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// Position identifier, kept as the raw cell text.
    pub position: String,
    /// Zero-based data row index this record came from (error messages only).
    pub row: usize,
    /// The parsed pose.
    pub pose: Pose,
}

impl PoseRecord {
    /// Position identifier left-padded with zeros to at least 2 characters,
    /// as used in the JSON export.
    pub fn padded_position(&self) -> String {
        format!("{:0>2}", self.position)
    }
}

// =============================================================================
// Column Mapping
// =============================================================================

/// Column indices for the required input fields, resolved once from the
/// header row.
///
/// A column absent from the header stays `None`; the lookup then fails per
/// row with a checked [`RowFieldError`] instead of a panic, so a batch with
/// a missing column still runs to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseColumns {
    position: Option<usize>,
    x: Option<usize>,
    y: Option<usize>,
    z: Option<usize>,
    roll: Option<usize>,
    pitch: Option<usize>,
    yaw: Option<usize>,
}

impl PoseColumns {
    /// Resolve column indices from trimmed header names.
    pub fn resolve(headers: &[String]) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            position: find(COL_POSITION),
            x: find(COL_X),
            y: find(COL_Y),
            z: find(COL_Z),
            roll: find(COL_ROLL),
            pitch: find(COL_PITCH),
            yaw: find(COL_YAW),
        }
    }

    /// Names of required columns that are absent from the header.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (COL_POSITION, self.position),
            (COL_X, self.x),
            (COL_Y, self.y),
            (COL_Z, self.z),
            (COL_ROLL, self.roll),
            (COL_PITCH, self.pitch),
            (COL_YAW, self.yaw),
        ]
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect()
    }

    /// Extract a [`PoseRecord`] from one data row.
    ///
    /// Stops at the first offending field: an absent column, an empty cell,
    /// or non-numeric cell text. The caller collects the error and moves on
    /// to the next row.
    pub fn extract(&self, row: usize, cells: &[String]) -> Result<PoseRecord, RowFieldError> {
        let position = text_field(row, cells, COL_POSITION, self.position)?;
        let pose = Pose {
            x: numeric_field(row, cells, COL_X, self.x)?,
            y: numeric_field(row, cells, COL_Y, self.y)?,
            z: numeric_field(row, cells, COL_Z, self.z)?,
            roll: numeric_field(row, cells, COL_ROLL, self.roll)?,
            pitch: numeric_field(row, cells, COL_PITCH, self.pitch)?,
            yaw: numeric_field(row, cells, COL_YAW, self.yaw)?,
        };
        Ok(PoseRecord { position, row, pose })
    }
}

fn text_field(
    row: usize,
    cells: &[String],
    field: &str,
    index: Option<usize>,
) -> Result<String, RowFieldError> {
    let index = index.ok_or_else(|| field_error(row, field, FieldErrorKind::MissingColumn))?;
    let value = cells.get(index).map(String::as_str).unwrap_or("").trim();
    if value.is_empty() {
        return Err(field_error(row, field, FieldErrorKind::EmptyValue));
    }
    Ok(value.to_string())
}

fn numeric_field(
    row: usize,
    cells: &[String],
    field: &str,
    index: Option<usize>,
) -> Result<f64, RowFieldError> {
    let text = text_field(row, cells, field, index)?;
    text.parse::<f64>()
        .map_err(|_| field_error(row, field, FieldErrorKind::NotNumeric(text)))
}

fn field_error(row: usize, field: &str, kind: FieldErrorKind) -> RowFieldError {
    RowFieldError { row, field: field.to_string(), kind }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pose_from_fields() {
        let pose = Pose::from_fields("1.5", " 2 ", "-3", "10", "0", "90").unwrap();
        assert_eq!(pose, Pose::new(1.5, 2.0, -3.0, 10.0, 0.0, 90.0));
    }

    #[test]
    fn test_pose_from_fields_rejects_text() {
        assert_eq!(
            Pose::from_fields("1", "2", "3", "ten", "0", "0"),
            Err(PoseInputError)
        );
        assert_eq!(Pose::from_fields("", "2", "3", "4", "5", "6"), Err(PoseInputError));
    }

    #[test]
    fn test_padded_position() {
        let mut record = PoseRecord {
            position: "1".into(),
            row: 0,
            pose: Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        };
        assert_eq!(record.padded_position(), "01");

        record.position = "12".into();
        assert_eq!(record.padded_position(), "12");

        record.position = "A".into();
        assert_eq!(record.padded_position(), "0A");
    }

    #[test]
    fn test_resolve_full_header() {
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "X", "Y", "Z", "Roll", "Pitch", "Yaw",
        ]));
        assert!(cols.missing().is_empty());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "x", "Y", "Z", "Roll", "Pitch", "Yaw",
        ]));
        assert_eq!(cols.missing(), vec!["X"]);
    }

    #[test]
    fn test_extract_row() {
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "X", "Y", "Z", "Roll", "Pitch", "Yaw",
        ]));
        let cells = strings(&["1", "10", "20", "30", "0", "0", "90"]);
        let record = cols.extract(0, &cells).unwrap();
        assert_eq!(record.position, "1");
        assert_eq!(record.pose.x, 10.0);
        assert_eq!(record.pose.yaw, 90.0);
    }

    #[test]
    fn test_extract_missing_column() {
        // Header has no Roll column at all.
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "X", "Y", "Z", "Pitch", "Yaw",
        ]));
        let cells = strings(&["1", "10", "20", "30", "0", "90"]);
        let err = cols.extract(4, &cells).unwrap_err();
        assert_eq!(err.row, 4);
        assert_eq!(err.field, "Roll");
        assert_eq!(err.kind, FieldErrorKind::MissingColumn);
    }

    #[test]
    fn test_extract_empty_cell() {
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "X", "Y", "Z", "Roll", "Pitch", "Yaw",
        ]));
        let cells = strings(&["1", "10", "", "30", "0", "0", "90"]);
        let err = cols.extract(0, &cells).unwrap_err();
        assert_eq!(err.field, "Y");
        assert_eq!(err.kind, FieldErrorKind::EmptyValue);
    }

    #[test]
    fn test_extract_non_numeric_cell() {
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "X", "Y", "Z", "Roll", "Pitch", "Yaw",
        ]));
        let cells = strings(&["1", "10", "20", "30", "abc", "0", "90"]);
        let err = cols.extract(0, &cells).unwrap_err();
        assert_eq!(err.field, "Roll");
        assert_eq!(err.kind, FieldErrorKind::NotNumeric("abc".into()));
    }

    #[test]
    fn test_extract_short_row_is_empty_value() {
        let cols = PoseColumns::resolve(&strings(&[
            "Numero de posición", "X", "Y", "Z", "Roll", "Pitch", "Yaw",
        ]));
        let cells = strings(&["1", "10", "20"]);
        let err = cols.extract(0, &cells).unwrap_err();
        assert_eq!(err.field, "Z");
        assert_eq!(err.kind, FieldErrorKind::EmptyValue);
    }
}
