use std::collections::HashSet;

use cilin_core::config::ScoringConfig;
use cilin_core::TaggedToken;

/// Drops tokens whose part-of-speech tag is excluded, keeping the rest in order.
///
/// Tags are matched exactly: excluding `u` does not exclude `uj`.
#[derive(Debug, Clone)]
pub struct AdmissibleFilter {
    excluded: HashSet<String>,
}

impl AdmissibleFilter {
    pub fn new<I, S>(excluded_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded_tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.excluded_tags.iter().cloned())
    }

    pub fn is_admissible(&self, token: &TaggedToken) -> bool {
        !self.excluded.contains(&token.tag)
    }

    /// Words of the admissible tokens, in input order.
    pub fn filter(&self, tokens: &[TaggedToken]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| self.is_admissible(t))
            .map(|t| t.word.clone())
            .collect()
    }
}

impl Default for AdmissibleFilter {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}
