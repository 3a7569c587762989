//! CSV reader for feature batches.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if every
//!   non-empty cell is non-numeric; a first row mixing numbers and text is
//!   a malformed data row)
//! - Double-quoted fields with embedded commas are handled correctly
//! - Blank lines are skipped
//!
//! Every data row becomes one row of the returned batch; all rows must have
//! the same width.

use crate::error::LoadError;
use crate::math::matrix::Matrix;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV text into an `M × N` feature matrix.
pub fn parse_batch(text: &str) -> Result<Matrix, LoadError> {
    let mut lines = text.lines().enumerate().peekable();

    // Auto-detect header: skip first line if all of its cells are text.
    let mut header_width = None;
    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            header_width = Some(parse_csv_row(first).len());
            lines.next();
        }
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let feats = parse_floats(&parse_csv_row(line), line_no)?;
        match width {
            None => width = Some(feats.len()),
            Some(w) if w != feats.len() => {
                return Err(LoadError::Csv {
                    line: line_no,
                    message: format!("feature count {} does not match first row's {}", feats.len(), w),
                });
            }
            Some(_) => {}
        }
        rows.push(feats);
    }

    // A header-only file is an empty batch that still knows its width.
    Ok(Matrix::from_rows_with_cols(rows, width.or(header_width).unwrap_or(0))?)
}

/// Reads and parses a CSV file into a feature matrix.
pub fn read_batch(path: &str) -> Result<Matrix, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_batch(&text)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row looks like a header: at least one non-empty
/// cell, and no cell that parses as a number.
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line);
    let mut filled = cells.iter().map(|c| c.trim()).filter(|t| !t.is_empty()).peekable();
    filled.peek().is_some() && filled.all(|t| t.parse::<f64>().is_err())
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote inside quoted field.
                    current.push('"');
                    chars.next();
                    continue;
                }
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses string cells as `f64`, returning an error with line info on failure.
fn parse_floats(cells: &[String], line: usize) -> Result<Vec<f64>, LoadError> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| LoadError::Csv {
                line,
                message: format!("'{}' is not a valid number", c),
            })
        })
        .collect()
}
