//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `--version` output: package version, commit hash (dev builds) and build date.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("GAS_AVG_BUILD_DATE"),
    ")"
);

/// `--version` output: package version and build date.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("GAS_AVG_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "gas-avg")]
#[command(about = "Sum average gas from a hardhat-gas-reporter report")]
#[command(
    long_about = "Sum the average gas column of a hardhat-gas-reporter text report \
                  (gas-report.txt) for a set of contracts.\n\n\
                  Without a subcommand, summarizes gas-report.txt with the default preset."
)]
#[command(version, long_version = LONG_VERSION)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file (default: ./gas-avg.toml, then the user config dir)
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub summarize: SummarizeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sum average gas for a preset or an explicit list of contracts
    #[command(long_about = "Sum average gas for a preset or an explicit list of contracts.

Reads every second line from line 10 of the report, cleans the contract
name and adds the Avg column when the contract is allow-listed. Stops at
the Deployments section.

EXAMPLES:
    gas-avg summarize                          Default preset, ./gas-report.txt
    gas-avg summarize --preset arbitrator      Arbitrator competition scope
    gas-avg summarize -c HATVault -c HATToken  Ad-hoc allow-list
    gas-avg summarize --format json            Machine-readable output")]
    Summarize(SummarizeArgs),

    /// List available presets
    Presets,

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration as TOML
    Show,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SummarizeArgs {
    /// Preset to use (see `gas-avg presets`)
    #[arg(short, long, conflicts_with = "contracts")]
    pub preset: Option<String>,

    /// Gas report to read (default: gas-report.txt)
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Contract to include; repeat to build an ad-hoc allow-list
    #[arg(short = 'c', long = "contract", value_name = "NAME")]
    pub contracts: Vec<String>,

    /// Label printed before the total for an ad-hoc allow-list
    #[arg(short, long, requires = "contracts")]
    pub label: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print each included row before the total
    #[arg(short, long)]
    pub breakdown: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<label>: <total>`
    #[default]
    Text,
    /// JSON object with label, total and included rows
    Json,
}
