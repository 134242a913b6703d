//! Posemat CLI - Euler poses to homogeneous transformation matrices
//!
//! # Main Commands
//!
//! ```bash
//! posemat compute 1 2 3 10 20 30          # Single pose, printed as a grid
//! posemat batch poses.csv \
//!     --output-csv matrices.csv \
//!     --output-json matrices.json         # Batch convert a pose table
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! posemat parse poses.csv                 # Just parse the table to JSON
//! ```

use clap::{Parser, Subcommand};
use posemat::logs::{log_error, log_info, log_success, log_warning};
use posemat::{
    format_matrix, parse_file, run_batch, BatchOptions, BatchReport, Pose, RowFieldError,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "posemat")]
#[command(about = "Compute 4x4 homogeneous transformation matrices from Euler-angle poses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the matrix for a single pose and print it as a grid
    Compute {
        /// Translation X
        x: String,
        /// Translation Y
        y: String,
        /// Translation Z
        z: String,
        /// Roll in degrees (rotation about X)
        roll: String,
        /// Pitch in degrees (rotation about Y)
        pitch: String,
        /// Yaw in degrees (rotation about Z)
        yaw: String,
    },

    /// Convert a pose table into CSV and JSON matrix artifacts
    Batch {
        /// Input pose table (CSV)
        input: PathBuf,

        /// Output CSV file (position_id, M1..M16)
        #[arg(long)]
        output_csv: PathBuf,

        /// Output JSON file (array of transform_matrix objects)
        #[arg(long)]
        output_json: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Parse a pose table and output its rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compute { x, y, z, roll, pitch, yaw } => {
            cmd_compute(&x, &y, &z, &roll, &pitch, &yaw)
        }

        Commands::Batch { input, output_csv, output_json, delimiter } => {
            cmd_batch(&input, &output_csv, &output_json, delimiter)
        }

        Commands::Parse { input, delimiter, output } => {
            cmd_parse(&input, delimiter, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compute(
    x: &str,
    y: &str,
    z: &str,
    roll: &str,
    pitch: &str,
    yaw: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validation failures print the uniform message in place of a result.
    let pose = match Pose::from_fields(x, y, z, roll, pitch, yaw) {
        Ok(pose) => pose,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let matrix = posemat::compute_transform(&pose);
    println!("{}", format_matrix(&matrix));
    Ok(())
}

fn cmd_batch(
    input: &Path,
    output_csv: &Path,
    output_json: &Path,
    delimiter: Option<char>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let options = BatchOptions { delimiter };
    let report = run_batch(input, output_csv, output_json, &options)?;

    print_report(&report);

    if !report.field_errors.is_empty() {
        print_field_errors(&report.field_errors);
    }

    log_success(format!(
        "Matrices saved to {} and {}",
        output_csv.display(),
        output_json.display()
    ));
    eprintln!("\n✨ Done!");
    Ok(())
}

fn print_report(report: &BatchReport) {
    log_info(format!("Encoding: {}", report.csv_info.encoding));
    log_info(format!(
        "Delimiter: '{}'",
        format_delimiter(report.csv_info.delimiter)
    ));
    log_info(format!("Rows: {}", report.csv_info.row_count));
    log_info(format!("Columns: {}", report.csv_info.headers.join(", ")));
    log_success(format!("Converted {} poses", report.converted));
}

/// Group field errors by column and reason so large batches stay readable:
/// a few row numbers per group, then a count.
fn print_field_errors(errors: &[RowFieldError]) {
    log_warning(format!("{} rows skipped", errors.len()));

    let mut groups: std::collections::BTreeMap<String, Vec<usize>> = std::collections::BTreeMap::new();
    for err in errors {
        let key = format!("column '{}': {}", err.field, err.kind);
        groups.entry(key).or_default().push(err.row);
    }

    for (reason, rows) in &groups {
        let sample: Vec<String> = rows.iter().take(5).map(|r| r.to_string()).collect();
        let more = if rows.len() > 5 {
            format!(" ... +{}", rows.len() - 5)
        } else {
            String::new()
        };
        log_error(format!("• {} (rows: {}{})", reason, sample.join(", "), more));
    }
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_file(input, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(result.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Parsed {} rows", result.rows.len());

    // Rows as JSON objects keyed by header, missing cells as empty strings.
    let objects: Vec<serde_json::Value> = result
        .rows
        .iter()
        .map(|cells| {
            let map: serde_json::Map<String, serde_json::Value> = result
                .headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = cells.get(i).map(String::as_str).unwrap_or("");
                    (header.clone(), serde_json::Value::String(value.to_string()))
                })
                .collect();
            serde_json::Value::Object(map)
        })
        .collect();

    let json = serde_json::to_string_pretty(&objects)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
