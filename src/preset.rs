//! Named allow-lists.
//!
//! A preset pairs the label printed with the total and the contracts whose
//! averages are summed. Two presets are built in; more can be declared in
//! the config file.

use serde::{Deserialize, Serialize};

/// Name of the preset used when none is given.
pub const DEFAULT_PRESET: &str = "vaults";

/// Label used by the `vaults` preset and by ad-hoc allow-lists.
pub const DEFAULT_LABEL: &str = "Total of averages";

/// A label and the contracts it totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Identifier used on the command line.
    pub name: String,
    /// Text printed before the total.
    pub label: String,
    /// Contract names whose average gas is summed.
    pub contracts: Vec<String>,
}

impl Preset {
    /// Create a preset from borrowed parts.
    pub fn new(name: &str, label: &str, contracts: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            contracts: contracts.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Arbitration contracts in scope for the arbitrator audit competition.
    pub fn arbitrator() -> Self {
        Self::new(
            "arbitrator",
            "Total of averages for the Arbitrator Audit Competition",
            &["HATArbitrator", "HATKlerosConnector"],
        )
    }

    /// Core vault contracts.
    pub fn vaults() -> Self {
        Self::new(
            "vaults",
            DEFAULT_LABEL,
            &[
                "HATVault",
                "HATClaimsManager",
                "HATVaultsRegistry",
                "RewardController",
                "HATGovernanceArbitrator",
                "HATTimelockController",
            ],
        )
    }

    /// All built-in presets.
    pub fn builtin() -> Vec<Preset> {
        vec![Self::arbitrator(), Self::vaults()]
    }

    /// Look up a preset by name.
    pub fn find<'a>(presets: &'a [Preset], name: &str) -> Option<&'a Preset> {
        presets.iter().find(|p| p.name == name)
    }
}
