use cilin_core::errors::{CilinResult, ScoringError};
use cilin_core::traits::IPosTagger;
use cilin_core::TaggedToken;

/// Reads text that is already segmented and tagged: `人民/n 的/u 力量/n`.
///
/// The tag is everything after the last `/`. Tokens without a slash get an
/// empty tag, so plain space-separated words pass through as admissible.
/// A word followed by a bare slash (`人民/`) is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashTagger;

impl SlashTagger {
    pub fn new() -> Self {
        Self
    }

    fn split(&self, token: &str) -> CilinResult<TaggedToken> {
        match token.rsplit_once('/') {
            Some((word, "")) if !word.is_empty() => Err(ScoringError::TaggingFailed {
                tagger: self.name().to_string(),
                reason: format!("token {token:?} has an empty tag"),
            }
            .into()),
            Some((word, tag)) if !word.is_empty() => Ok(TaggedToken::new(word, tag)),
            _ => Ok(TaggedToken::new(token, "")),
        }
    }
}

impl IPosTagger for SlashTagger {
    fn tag(&self, text: &str) -> CilinResult<Vec<TaggedToken>> {
        text.split_whitespace().map(|t| self.split(t)).collect()
    }

    fn name(&self) -> &str {
        "slash"
    }
}
