pub mod defaults;
mod observability_config;
mod scoring_config;
mod thesaurus_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use thesaurus_config::ThesaurusConfig;

use crate::errors::{CilinError, CilinResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CilinConfig {
    pub thesaurus: ThesaurusConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl CilinConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> CilinResult<Self> {
        toml::from_str(source).map_err(|e| CilinError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CilinResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| CilinError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }
}
