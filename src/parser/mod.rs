//! CSV ingestion with encoding and delimiter auto-detection.
//!
//! Pose tables come from spreadsheet exports with varying encodings and
//! separators, so the reader sniffs both before splitting rows. Header names
//! are trimmed on load; cell values are trimmed and unquoted. No pose-specific
//! logic here - typed field extraction happens in [`crate::models`].

use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows, one `Vec<String>` of cells per row. Header excluded.
    pub rows: Vec<Vec<String>>,
    /// Detected or used encoding.
    pub encoding: String,
    /// Detected or used delimiter.
    pub delimiter: char,
    /// Trimmed column headers.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ';';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse a CSV file, auto-detecting encoding and delimiter unless a
/// delimiter override is given.
///
/// # Example
/// ```ignore
/// let result = parse_file("poses.csv", None)?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Rows: {}", result.rows.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, delimiter)
}

/// Parse CSV bytes, auto-detecting encoding and (optionally) delimiter.
pub fn parse_bytes(bytes: &[u8], delimiter: Option<char>) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    parse_content(&content, delimiter, encoding)
}

/// Parse decoded CSV text with an explicit delimiter.
///
/// Empty lines are skipped. Cells are trimmed and stripped of surrounding
/// quotes; rows shorter than the header are kept short (missing cells are a
/// per-row concern for the typed extraction step).
pub fn parse_content(content: &str, delimiter: char, encoding: String) -> CsvResult<ParseResult> {
    let mut lines = content.lines();

    let header_line = lines.next().ok_or(CsvError::EmptyFile)?;
    if header_line.trim().is_empty() {
        return Err(CsvError::NoHeaders);
    }

    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|s| s.trim().trim_matches('"').to_string())
        .collect();

    let mut rows = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<String> = line
            .split(delimiter)
            .map(|s| s.trim().trim_matches('"').to_string())
            .collect();

        rows.push(cells);
    }

    Ok(ParseResult {
        rows,
        encoding,
        delimiter,
        headers,
    })
}
