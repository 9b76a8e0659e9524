//! Gas Average - totals average gas from hardhat-gas-reporter output.
//!
//! Reads the rendered `gas-report.txt` table, keeps the rows of an
//! allow-listed set of contracts up to the Deployments section, and sums
//! their `Avg` column.
//!
//! ```no_run
//! use gas_avg::{Preset, Report, Summarizer};
//!
//! let report = Report::load("gas-report.txt")?;
//! let summary = Summarizer::from_preset(&Preset::arbitrator()).summarize(&report)?;
//! println!("{}", summary);
//! # Ok::<(), gas_avg::ReportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod preset;
pub mod report;
pub mod summary;

pub use config::{Config, ConfigError};
pub use preset::Preset;
pub use report::{CleanupTable, Report, ReportError, Row};
pub use summary::{IncludedRow, Summarizer, Summary};
