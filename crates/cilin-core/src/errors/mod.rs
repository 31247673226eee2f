mod scoring_error;
mod thesaurus_error;

pub use scoring_error::{ScoringError, Side};
pub use thesaurus_error::ThesaurusError;

/// Result alias used across the workspace.
pub type CilinResult<T> = Result<T, CilinError>;

/// Top-level error for the Cilin similarity engine.
#[derive(Debug, thiserror::Error)]
pub enum CilinError {
    #[error("thesaurus error: {0}")]
    ThesaurusError(#[from] ThesaurusError),

    #[error("scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("degraded mode: {component} fell back to {fallback}")]
    DegradedMode { component: String, fallback: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
