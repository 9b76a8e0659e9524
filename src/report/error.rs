//! Gas report parsing errors.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors that can occur while reading or summarizing a gas report.
///
/// Line numbers are 0-based indices into the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read gas report {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Gas report has {lines} line(s); expected table rows from line {first_row}")]
    TooShort { lines: usize, first_row: usize },

    #[error("Line {line} has {fields} field(s); the average gas column is field {column}")]
    MissingField {
        line: usize,
        fields: usize,
        column: usize,
    },

    #[error("Line {line}: average gas '{value}' is not an integer: {source}")]
    InvalidGas {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Line {line}: total of average gas overflows a 64-bit integer")]
    Overflow { line: usize },
}
