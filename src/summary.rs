//! Summing average gas over an allow-list of contracts.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::preset::Preset;
use crate::report::{CleanupTable, Report, ReportError};

/// One row that contributed to a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludedRow {
    /// Zero-based line index in the report.
    pub line: usize,
    pub contract: String,
    pub method: Option<String>,
    pub average_gas: u64,
}

/// Result of summarizing a report.
///
/// `Display` renders the single output line, `<label>: <total>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub label: String,
    pub total: u64,
    #[serde(rename = "contracts")]
    pub included: Vec<IncludedRow>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.total)
    }
}

/// Sums the average gas column for allow-listed contracts.
#[derive(Debug, Clone)]
pub struct Summarizer {
    label: String,
    allow_list: BTreeSet<String>,
    cleanup: CleanupTable,
}

impl Summarizer {
    /// Create a summarizer for an explicit label and allow-list.
    pub fn new<I, S>(label: impl Into<String>, allow_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            allow_list: allow_list.into_iter().map(Into::into).collect(),
            cleanup: CleanupTable::default(),
        }
    }

    /// Create a summarizer from a preset.
    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(preset.label.clone(), preset.contracts.iter().cloned())
    }

    /// Use a different contract-name cleanup table.
    pub fn with_cleanup(mut self, cleanup: CleanupTable) -> Self {
        self.cleanup = cleanup;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `contract` is summed.
    pub fn includes(&self, contract: &str) -> bool {
        self.allow_list.contains(contract)
    }

    /// Walk the report's data rows and total the allow-listed averages.
    ///
    /// Stops at the `Deployments` row. Any error aborts the whole
    /// summary; there is no partial result.
    pub fn summarize(&self, report: &Report) -> Result<Summary, ReportError> {
        let mut total: u64 = 0;
        let mut included = Vec::new();

        for row in report.rows(&self.cleanup)? {
            tracing::trace!(line = row.line, contract = %row.contract, "inspecting row");

            if row.is_sentinel() {
                tracing::debug!(line = row.line, "reached deployments section");
                break;
            }
            if !self.includes(&row.contract) {
                continue;
            }

            let average_gas = row.average_gas()?;
            total = total
                .checked_add(average_gas)
                .ok_or(ReportError::Overflow { line: row.line })?;
            tracing::debug!(
                line = row.line,
                contract = %row.contract,
                average_gas,
                total,
                "included row"
            );
            included.push(IncludedRow {
                line: row.line,
                method: row.method().map(str::to_string),
                contract: row.contract,
                average_gas,
            });
        }

        tracing::info!(label = %self.label, total, rows = included.len(), "summarized report");
        Ok(Summary {
            label: self.label.clone(),
            total,
            included,
        })
    }
}
