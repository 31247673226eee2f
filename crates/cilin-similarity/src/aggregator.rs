//! Text-to-text similarity from word similarities.
//!
//! Each word of one text is paired with its best-scoring word in the other
//! text and those best scores are averaged. This is done in both directions and
//! the larger average is the text similarity. The two directions are combined
//! with `max`, not with their mean, so a short text fully covered by a longer
//! one scores as highly as the reverse.

use cilin_core::errors::{ScoringError, Side};
use cilin_thesaurus::Thesaurus;
use serde::Serialize;

use crate::word::word_similarity;

/// Both directional averages of a text comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalScores {
    /// Mean best-partner score of the left words against the right text.
    pub forward: f64,
    /// Mean best-partner score of the right words against the left text.
    pub backward: f64,
}

impl DirectionalScores {
    pub fn combined(&self) -> f64 {
        self.forward.max(self.backward)
    }
}

/// Compute both directional averages. Both sequences must be non-empty.
pub fn directional_scores<A, B>(
    left: &[A],
    right: &[B],
    thesaurus: &Thesaurus,
) -> Result<DirectionalScores, ScoringError>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if left.is_empty() {
        return Err(ScoringError::EmptyAdmissibleSequence { side: Side::Left });
    }
    if right.is_empty() {
        return Err(ScoringError::EmptyAdmissibleSequence { side: Side::Right });
    }

    Ok(DirectionalScores {
        forward: directional_average(left, right, thesaurus),
        backward: directional_average(right, left, thesaurus),
    })
}

/// Similarity of two admissible word sequences, in [0, 1].
pub fn text_similarity<A, B>(left: &[A], right: &[B], thesaurus: &Thesaurus) -> Result<f64, ScoringError>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    directional_scores(left, right, thesaurus).map(|scores| scores.combined())
}

fn directional_average<F, T>(from: &[F], to: &[T], thesaurus: &Thesaurus) -> f64
where
    F: AsRef<str>,
    T: AsRef<str>,
{
    let total: f64 = from
        .iter()
        .map(|word| best_partner(word.as_ref(), to, thesaurus))
        .sum();
    total / from.len() as f64
}

fn best_partner<T: AsRef<str>>(word: &str, candidates: &[T], thesaurus: &Thesaurus) -> f64 {
    candidates
        .iter()
        .map(|c| word_similarity(word, c.as_ref(), thesaurus))
        .fold(0.0, f64::max)
}
