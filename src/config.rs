//! Configuration file handling.
//!
//! The config file is optional. Lookup order is an explicit `--config`
//! path, then `gas-avg.toml` in the working directory, then
//! `<config dir>/gas-avg/config.toml`. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::preset::{Preset, DEFAULT_PRESET};
use crate::report::DEFAULT_REPORT_PATH;

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "gas-avg.toml";

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown preset '{name}'. Available presets: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("Preset '{name}' has no contracts")]
    EmptyAllowList { name: String },
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gas report to read when `--report` is not given.
    pub report: PathBuf,
    /// Preset used when `--preset` is not given.
    pub default_preset: String,
    /// Additional presets; these replace built-ins with the same name.
    pub presets: Vec<Preset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT_PATH),
            default_preset: DEFAULT_PRESET.to_string(),
            presets: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the first existing default
    /// location is used, falling back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load_from(path);
        }

        for path in Self::search_paths() {
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Per-user config file location, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gas-avg").join("config.toml"))
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        paths.extend(Self::config_path());
        paths
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.presets.iter().find(|p| p.contracts.is_empty()) {
            Some(preset) => Err(ConfigError::EmptyAllowList {
                name: preset.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Built-in presets merged with configured ones, sorted by name.
    pub fn presets(&self) -> Vec<Preset> {
        let mut presets: Vec<Preset> = Preset::builtin()
            .into_iter()
            .filter(|builtin| Preset::find(&self.presets, &builtin.name).is_none())
            .collect();
        presets.extend(self.presets.iter().cloned());
        presets.sort_by(|a, b| a.name.cmp(&b.name));
        presets
    }

    /// Resolve a preset by name, or the default preset when `name` is None.
    pub fn preset(&self, name: Option<&str>) -> Result<Preset, ConfigError> {
        let name = name.unwrap_or(&self.default_preset);
        let presets = self.presets();
        Preset::find(&presets, name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: name.to_string(),
                available: presets
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
