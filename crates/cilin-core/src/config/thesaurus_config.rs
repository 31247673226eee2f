use serde::{Deserialize, Serialize};

use super::defaults;

/// Thesaurus source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesaurusConfig {
    /// Path to the line-oriented thesaurus file.
    pub path: String,
    /// Degrade to an empty thesaurus when the source cannot be read.
    /// When false, the load error is returned to the caller.
    pub fail_open: bool,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_THESAURUS_PATH.to_string(),
            fail_open: defaults::DEFAULT_FAIL_OPEN,
        }
    }
}
