use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Part-of-speech tags whose tokens are dropped before scoring.
    pub excluded_tags: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            excluded_tags: defaults::DEFAULT_EXCLUDED_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}
