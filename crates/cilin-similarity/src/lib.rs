//! # cilin-similarity
//!
//! Semantic similarity over a Cilin-style thesaurus.
//!
//! - [`comparator`]: weighted level-by-level agreement of two semantic codes.
//! - [`word`]: best sense-pair similarity of two words.
//! - [`aggregator`]: directional best-match averages of two word sequences,
//!   combined by taking the larger one.
//! - [`filter`] / [`tagger`]: turning raw text into admissible words.
//! - [`engine`]: the whole pipeline behind one type.

pub mod aggregator;
pub mod comparator;
pub mod engine;
pub mod filter;
pub mod tagger;
pub mod word;

pub use aggregator::{directional_scores, text_similarity, DirectionalScores};
pub use comparator::{code_agreement, compare_codes};
pub use engine::{RankedCandidate, SimilarityEngine};
pub use filter::AdmissibleFilter;
pub use tagger::SlashTagger;
pub use word::{best_sense_pair, word_similarity, SensePair};

#[cfg(feature = "jieba")]
pub use tagger::JiebaTagger;
