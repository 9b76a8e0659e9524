//! A single data row of the rendered gas table.

use super::cleanup::CleanupTable;
use super::error::ReportError;

/// Cell separator used by hardhat-gas-reporter (U+00B7 MIDDLE DOT).
pub const FIELD_SEPARATOR: char = '·';

/// Cleaned first-column name marking the start of the deployments section.
pub const SENTINEL: &str = "Deployments";

/// Zero-based column holding the method's average gas.
pub const AVERAGE_GAS_COLUMN: usize = 4;

/// Zero-based column holding the method name.
const METHOD_COLUMN: usize = 1;

/// One candidate row: its position in the report, its cleaned contract
/// and method names, and the raw cells it was split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Zero-based line index in the report.
    pub line: usize,
    /// Contract name after cleanup.
    pub contract: String,
    method: Option<String>,
    cells: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// Split `text` into cells and clean the contract name.
    ///
    /// Parsing never fails: a line without any separator is a row with a
    /// single cell. Missing columns are reported only when they are read.
    pub fn parse(line: usize, text: &'a str, cleanup: &CleanupTable) -> Self {
        let cells: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        let contract = cleanup.clean(cells[0]);
        let method = cells
            .get(METHOD_COLUMN)
            .map(|cell| cleanup.clean(cell).trim().to_string());
        Self {
            line,
            contract,
            method,
            cells,
        }
    }

    /// Whether this row is the `Deployments` heading.
    pub fn is_sentinel(&self) -> bool {
        self.contract == SENTINEL
    }

    /// Number of `·`-separated cells on the line.
    pub fn field_count(&self) -> usize {
        self.cells.len()
    }

    /// Cleaned method name, if the row has a method column.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Parse the average gas column as a base-10 integer.
    pub fn average_gas(&self) -> Result<u64, ReportError> {
        let raw = self
            .cells
            .get(AVERAGE_GAS_COLUMN)
            .ok_or(ReportError::MissingField {
                line: self.line,
                fields: self.cells.len(),
                column: AVERAGE_GAS_COLUMN,
            })?;
        let value = raw.trim();
        value.parse::<u64>().map_err(|source| ReportError::InvalidGas {
            line: self.line,
            value: value.to_string(),
            source,
        })
    }
}
