use std::fmt;

/// Which input of a pairwise text comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Similarity scoring errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("{side} text has no admissible words after filtering")]
    EmptyAdmissibleSequence { side: Side },

    #[error("tagger {tagger} failed: {reason}")]
    TaggingFailed { tagger: String, reason: String },
}
