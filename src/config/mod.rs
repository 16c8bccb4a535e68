//! Configuration for Narrascope
//!
//! Supports loading config from:
//! - `narrascope.toml` in the working directory (highest file priority)
//! - `~/.config/narrascope/config.toml`
//! - Environment variables (`NARRASCOPE_OFFLINE`)
//!
//! # Configuration Format
//!
//! ```toml
//! # narrascope.toml
//!
//! [lookup]
//! timeout_secs = 8
//! per_source_limit = 4
//! offline = false
//!
//! [scoring]
//! manipulation_penalty = 12
//! political_propaganda_threshold = 40
//! ```
//!
//! Unreadable or malformed config degrades to defaults with a warning;
//! configuration is never a fatal error.

use crate::analysis::ScoreWeights;
use crate::references::LookupSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const PROJECT_CONFIG_FILE: &str = "narrascope.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub scoring: ScoringOverrides,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupConfig {
    pub timeout_secs: Option<u64>,
    pub per_source_limit: Option<usize>,
    pub offline: Option<bool>,
}

/// Partial overrides for [`ScoreWeights`] - anything unset keeps the
/// built-in default.
#[derive(Debug, Default, Deserialize)]
pub struct ScoringOverrides {
    pub manipulation_penalty: Option<u32>,
    pub directional_intent_penalty: Option<u32>,
    pub institutional_intent_penalty: Option<u32>,
    pub political_propaganda_threshold: Option<u8>,
    pub factual_reliability_min: Option<u8>,
    pub factual_objectivity_min: Option<u8>,
    pub factual_propaganda_max: Option<u8>,
    pub pr_propaganda_threshold: Option<u8>,
}

impl Config {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. `narrascope.toml` in the working directory
    /// 3. User config (`~/.config/narrascope/config.toml`)
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(user) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| Self::load_from(&p))
        {
            config.merge(user);
        }
        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            if let Some(project_config) = Self::load_from(&project) {
                config.merge(project_config);
            }
        }

        if std::env::var("NARRASCOPE_OFFLINE").is_ok_and(|v| v == "1" || v == "true") {
            config.lookup.offline = Some(true);
        }

        config
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("narrascope").join("config.toml"))
    }

    /// Read and parse one config file; malformed content degrades to
    /// `None` with a warning.
    pub fn load_from(path: &Path) -> Option<Config> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Could not read {}: {err}", path.display());
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!("Ignoring malformed {}: {err}", path.display());
                None
            }
        }
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: Config) {
        if other.lookup.timeout_secs.is_some() {
            self.lookup.timeout_secs = other.lookup.timeout_secs;
        }
        if other.lookup.per_source_limit.is_some() {
            self.lookup.per_source_limit = other.lookup.per_source_limit;
        }
        if other.lookup.offline.is_some() {
            self.lookup.offline = other.lookup.offline;
        }
        macro_rules! merge_scoring {
            ($($field:ident),*) => {
                $(if other.scoring.$field.is_some() {
                    self.scoring.$field = other.scoring.$field;
                })*
            };
        }
        merge_scoring!(
            manipulation_penalty,
            directional_intent_penalty,
            institutional_intent_penalty,
            political_propaganda_threshold,
            factual_reliability_min,
            factual_objectivity_min,
            factual_propaganda_max,
            pr_propaganda_threshold
        );
    }

    /// Resolve lookup settings; an explicit CLI `--offline` beats the
    /// config file.
    pub fn lookup_settings(&self, offline_flag: bool) -> LookupSettings {
        let defaults = LookupSettings::default();
        LookupSettings {
            timeout_secs: self.lookup.timeout_secs.unwrap_or(defaults.timeout_secs),
            per_source_limit: self
                .lookup
                .per_source_limit
                .unwrap_or(defaults.per_source_limit),
            offline: offline_flag || self.lookup.offline.unwrap_or(defaults.offline),
        }
    }

    /// Apply scoring overrides on top of the default weights.
    pub fn score_weights(&self) -> ScoreWeights {
        let mut weights = ScoreWeights::default();
        let overrides = &self.scoring;
        if let Some(v) = overrides.manipulation_penalty {
            weights.manipulation_penalty = v;
        }
        if let Some(v) = overrides.directional_intent_penalty {
            weights.directional_intent_penalty = v;
        }
        if let Some(v) = overrides.institutional_intent_penalty {
            weights.institutional_intent_penalty = v;
        }
        if let Some(v) = overrides.political_propaganda_threshold {
            weights.political_propaganda_threshold = v;
        }
        if let Some(v) = overrides.factual_reliability_min {
            weights.factual_reliability_min = v;
        }
        if let Some(v) = overrides.factual_objectivity_min {
            weights.factual_objectivity_min = v;
        }
        if let Some(v) = overrides.factual_propaganda_max {
            weights.factual_propaganda_max = v;
        }
        if let Some(v) = overrides.pr_propaganda_threshold {
            weights.pr_propaganda_threshold = v;
        }
        weights
    }
}
