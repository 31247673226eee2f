use cilin_core::SemanticCode;
use cilin_thesaurus::Thesaurus;
use serde::Serialize;

use crate::comparator::compare_codes;

/// The sense pair that produced a word similarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensePair {
    pub left: SemanticCode,
    pub right: SemanticCode,
    pub score: f64,
}

/// Best-scoring pair over the cross product of both words' senses.
///
/// `None` when either word is unknown. Ties keep the first pair in sense order.
pub fn best_sense_pair(a: &str, b: &str, thesaurus: &Thesaurus) -> Option<SensePair> {
    let right_codes = thesaurus.codes(b);
    let mut best: Option<SensePair> = None;

    for left in thesaurus.codes(a) {
        for right in right_codes {
            let score = compare_codes(left, right);
            if best.map_or(true, |current| score > current.score) {
                best = Some(SensePair {
                    left: *left,
                    right: *right,
                    score,
                });
            }
        }
    }
    best
}

/// Similarity of two words under their most favourable readings.
///
/// Unknown words score 0 against everything.
pub fn word_similarity(a: &str, b: &str, thesaurus: &Thesaurus) -> f64 {
    best_sense_pair(a, b, thesaurus).map_or(0.0, |pair| pair.score)
}
