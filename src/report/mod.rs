//! Rendered gas report input.
//!
//! A report is the text table hardhat-gas-reporter writes to
//! `gas-report.txt`. The first [`FIRST_ROW`] lines are borders and
//! headings; after that data rows and separator lines alternate, so only
//! every second line is a candidate row.

mod cleanup;
mod error;
mod row;

use std::path::{Path, PathBuf};

pub use cleanup::CleanupTable;
pub use error::ReportError;
pub use row::{Row, AVERAGE_GAS_COLUMN, FIELD_SEPARATOR, SENTINEL};

/// File name the reporter writes and the summarizer reads by default.
pub const DEFAULT_REPORT_PATH: &str = "gas-report.txt";

/// Zero-based index of the first data row.
pub const FIRST_ROW: usize = 9;

/// Distance between consecutive data rows.
pub const ROW_STRIDE: usize = 2;

/// A gas report loaded fully into memory.
#[derive(Debug, Clone, Default)]
pub struct Report {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl Report {
    /// Read a report from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut report = Self::from_text(&text);
        report.path = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            lines = report.lines.len(),
            "loaded gas report"
        );
        Ok(report)
    }

    /// Build a report from text already in memory.
    pub fn from_text(text: &str) -> Self {
        Self {
            path: None,
            lines: split_lines(text),
        }
    }

    /// Path the report was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of lines in the report.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Candidate data rows in order: lines 9, 11, 13, ...
    ///
    /// A report too short to hold a single data row is rejected rather
    /// than summarized to zero.
    pub fn rows<'a>(
        &'a self,
        cleanup: &'a CleanupTable,
    ) -> Result<impl Iterator<Item = Row<'a>> + 'a, ReportError> {
        if self.lines.len() <= FIRST_ROW {
            return Err(ReportError::TooShort {
                lines: self.lines.len(),
                first_row: FIRST_ROW,
            });
        }
        Ok(self
            .lines
            .iter()
            .enumerate()
            .skip(FIRST_ROW)
            .step_by(ROW_STRIDE)
            .map(move |(index, text)| Row::parse(index, text, cleanup)))
    }
}

/// Split on `\n`, `\r\n` and a lone `\r`, dropping the terminators.
///
/// A trailing terminator does not produce an empty last line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}
