use crate::errors::CilinResult;
use crate::models::TaggedToken;

/// Segments raw text into words and tags each with its part of speech.
///
/// Implementations are external collaborators of the engine; the engine only
/// filters what they return.
pub trait IPosTagger: Send + Sync {
    /// Segment and tag `text`, preserving word order.
    fn tag(&self, text: &str) -> CilinResult<Vec<TaggedToken>>;

    /// Human-readable tagger name.
    fn name(&self) -> &str;
}
