//! Matrix CSV parser - Reads the spreadsheet upload format into an analysis
//! command.
//!
//! ```text
//! ,c1,c2,c3,WRC
//! r1,0.9,0.8,0.6,1
//! r2,0.2,0.4,0.3,1
//! WEC,1,1,1,
//! ```
//!
//! The header row names the criteria (up to a `WRC` or empty cell). Each
//! following row is a requirement: label, one matching strength per
//! criterion, then the requirement weight. An optional `WEC` row carries the
//! criterion weights and ends the requirement block.

use thiserror::Error;

use crate::application::RunAnalysisCommand;
use crate::domain::analysis::{clamp_strength, ThresholdOverrides};

/// Marker cell ending the criterion names in the header row.
const REQUIREMENT_WEIGHT_MARKER: &str = "WRC";

/// Marker cell opening the criterion weight row.
const CRITERION_WEIGHT_MARKER: &str = "WEC";

/// Weight used when a weight cell is missing or unreadable.
const DEFAULT_WEIGHT: f64 = 1.0;

/// Downloadable example of the upload format.
pub const MATRIX_CSV_TEMPLATE: &str = ",c1,c2,c3,WRC
r1,0.9,0.8,0.6,1
r2,0.2,0.4,0.3,1
r3,0.0,0.0,0.0,1
WEC,1,1,1,
";

/// Errors raised while reading a matrix CSV.
#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error("CSV must have at least 3 rows (header + 1 requirement + WEC row), got {actual}")]
    TooFewRows { actual: usize },

    #[error("No criteria found in header row")]
    NoCriteria,

    #[error("No requirements found in CSV")]
    NoRequirements,
}

/// Parses a matrix CSV into a command with default thresholds.
///
/// Unreadable or non-finite matching strengths count as 0 and the rest are
/// clamped into [0, 1]; unreadable or non-finite weights count as 1.
pub fn parse_matrix_csv(text: &str) -> Result<RunAnalysisCommand, CsvImportError> {
    let rows = read_rows(text)?;

    if rows.len() < 3 {
        return Err(CsvImportError::TooFewRows { actual: rows.len() });
    }

    let criteria = criterion_names(&rows[0]);
    if criteria.is_empty() {
        return Err(CsvImportError::NoCriteria);
    }
    let m = criteria.len();

    let wec_index = rows
        .iter()
        .skip(1)
        .position(|row| is_marker(row, CRITERION_WEIGHT_MARKER))
        .map(|offset| offset + 1);
    let requirement_rows = &rows[1..wec_index.unwrap_or(rows.len())];

    let mut requirements = Vec::new();
    let mut requirement_weights = Vec::new();
    let mut match_matrix = Vec::new();

    for row in requirement_rows {
        if row.len() < 2 || row[0].is_empty() {
            continue;
        }

        requirements.push(row[0].clone());
        match_matrix.push(
            (1..=m)
                .map(|col| clamp_strength(parse_cell(row, col).unwrap_or(0.0)))
                .collect(),
        );
        requirement_weights.push(parse_cell(row, m + 1).unwrap_or(DEFAULT_WEIGHT));
    }

    if requirements.is_empty() {
        return Err(CsvImportError::NoRequirements);
    }

    let criterion_weights = match wec_index {
        Some(index) => (1..=m)
            .map(|col| parse_cell(&rows[index], col).unwrap_or(DEFAULT_WEIGHT))
            .collect(),
        None => vec![DEFAULT_WEIGHT; m],
    };

    Ok(RunAnalysisCommand {
        requirements,
        criteria,
        requirement_weights,
        criterion_weights,
        match_matrix,
        thresholds: ThresholdOverrides::none(),
    })
}

fn read_rows(text: &str) -> Result<Vec<Vec<String>>, CsvImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Header cells after the corner cell, up to the first `WRC` or empty cell.
fn criterion_names(header: &[String]) -> Vec<String> {
    header
        .iter()
        .skip(1)
        .take_while(|cell| {
            !cell.is_empty() && !cell.eq_ignore_ascii_case(REQUIREMENT_WEIGHT_MARKER)
        })
        .cloned()
        .collect()
}

fn is_marker(row: &[String], marker: &str) -> bool {
    row.first()
        .map(|cell| cell.eq_ignore_ascii_case(marker))
        .unwrap_or(false)
}

fn parse_cell(row: &[String], col: usize) -> Option<f64> {
    row.get(col)
        .and_then(|cell| cell.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
