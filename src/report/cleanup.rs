//! Contract-name cleanup for rendered gas report rows.
//!
//! hardhat-gas-reporter decorates the first column with a box-drawing
//! prefix and a handful of colour escapes. Rather than running a general
//! ANSI stripper, the exact tokens a given reporter version emits are kept
//! in a versioned table and deleted verbatim.

/// Gray foreground (`ESC[90m`), used for contract and method names.
pub const GRAY_FG: &str = "\x1b[90m";
/// Default foreground (`ESC[39m`).
pub const DEFAULT_FG: &str = "\x1b[39m";
/// Bold green (`ESC[32m ESC[1m`), used for the `Deployments` heading.
pub const BOLD_GREEN: &str = "\x1b[32m\x1b[1m";
/// Reset bold followed by default foreground.
pub const RESET_BOLD_DEFAULT_FG: &str = "\x1b[22m\x1b[39m";
/// Reset bold (`ESC[22m`).
pub const RESET_BOLD: &str = "\x1b[22m";

/// Left table border plus padding that precedes every row's first cell.
pub const ROW_PREFIX: &str = "|  ";

/// An ordered list of literal tokens removed from a raw contract-name cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupTable {
    /// Reporter output format this table matches.
    pub version: &'static str,
    /// Tokens deleted in order, every occurrence each.
    pub tokens: &'static [&'static str],
}

impl CleanupTable {
    /// Tokens emitted by hardhat-gas-reporter 1.x text output with colours on.
    pub const HARDHAT_GAS_REPORTER_V1: CleanupTable = CleanupTable {
        version: "hardhat-gas-reporter/1",
        tokens: &[
            ROW_PREFIX,
            GRAY_FG,
            DEFAULT_FG,
            BOLD_GREEN,
            RESET_BOLD_DEFAULT_FG,
            RESET_BOLD,
        ],
    };

    /// Clean a raw first cell into a bare contract name.
    ///
    /// Surrounding whitespace is trimmed first; the tokens are then deleted
    /// as plain substrings. Whitespace revealed by a deletion is kept, which
    /// means a cell with unexpected styling simply fails to match any
    /// allow-listed name.
    pub fn clean(&self, raw: &str) -> String {
        let mut name = raw.trim().to_string();
        for token in self.tokens {
            if name.contains(token) {
                name = name.replace(token, "");
            }
        }
        name
    }
}

impl Default for CleanupTable {
    fn default() -> Self {
        Self::HARDHAT_GAS_REPORTER_V1
    }
}
