//! SimilarityEngine — the main entry point for cilin-similarity.
//!
//! Owns the thesaurus, the admissible-word filter and a tagger, and runs the
//! whole pipeline: tag → filter → aggregate.

use std::sync::Arc;

use cilin_core::config::{CilinConfig, ScoringConfig};
use cilin_core::constants::spans;
use cilin_core::errors::{CilinError, CilinResult, ScoringError, Side};
use cilin_core::traits::IPosTagger;
use cilin_core::DegradationEvent;
use cilin_thesaurus::{load_or_empty, LoadReport, Thesaurus, ThesaurusLoader, ThesaurusStatus};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::aggregator::{directional_scores, DirectionalScores};
use crate::filter::AdmissibleFilter;
use crate::word::word_similarity;

/// One ranked candidate text.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// Position of the candidate in the input.
    pub index: usize,
    pub text: String,
    /// `None` when the candidate could not be scored; see `error`.
    pub score: Option<f64>,
    pub error: Option<String>,
}

/// Text similarity over one immutable thesaurus.
///
/// The thesaurus sits behind an `Arc`, so several engines (say, with different
/// taggers) can share one loaded dictionary.
pub struct SimilarityEngine {
    thesaurus: Arc<Thesaurus>,
    status: ThesaurusStatus,
    filter: AdmissibleFilter,
    tagger: Box<dyn IPosTagger>,
}

impl SimilarityEngine {
    /// Load the configured thesaurus and build an engine around it.
    ///
    /// With `thesaurus.fail_open` (the default) an unreadable source yields an
    /// engine over an empty thesaurus, flagged by [`is_degraded`](Self::is_degraded).
    /// Otherwise the load error is returned.
    pub fn new(config: &CilinConfig, tagger: Box<dyn IPosTagger>) -> CilinResult<Self> {
        let (thesaurus, status) = if config.thesaurus.fail_open {
            load_or_empty(&config.thesaurus.path)
        } else {
            let outcome = ThesaurusLoader::load_path(&config.thesaurus.path)?;
            (outcome.thesaurus, ThesaurusStatus::Loaded(outcome.report))
        };

        info!(
            tagger = tagger.name(),
            words = thesaurus.len(),
            degraded = status.is_degraded(),
            "SimilarityEngine initialized"
        );

        Ok(Self {
            thesaurus: Arc::new(thesaurus),
            status,
            filter: AdmissibleFilter::from_config(&config.scoring),
            tagger,
        })
    }

    /// Build an engine around an already loaded thesaurus.
    pub fn with_thesaurus(
        thesaurus: Arc<Thesaurus>,
        scoring: &ScoringConfig,
        tagger: Box<dyn IPosTagger>,
    ) -> Self {
        let report = LoadReport {
            words: thesaurus.len(),
            code_assignments: thesaurus.code_assignments(),
            ..LoadReport::default()
        };
        Self {
            thesaurus,
            status: ThesaurusStatus::Loaded(report),
            filter: AdmissibleFilter::from_config(scoring),
            tagger,
        }
    }

    pub fn thesaurus(&self) -> &Arc<Thesaurus> {
        &self.thesaurus
    }

    pub fn status(&self) -> &ThesaurusStatus {
        &self.status
    }

    /// Whether the engine is running on an empty fallback thesaurus.
    pub fn is_degraded(&self) -> bool {
        self.status.is_degraded()
    }

    pub fn degradation(&self) -> Option<&DegradationEvent> {
        match &self.status {
            ThesaurusStatus::Degraded(event) => Some(event),
            ThesaurusStatus::Loaded(_) => None,
        }
    }

    /// Fail with `DegradedMode` if the engine fell back to an empty thesaurus.
    ///
    /// For callers that prefer an error over scores that are all 0.
    pub fn ensure_available(&self) -> CilinResult<()> {
        match self.degradation() {
            Some(event) => Err(CilinError::DegradedMode {
                component: event.component.clone(),
                fallback: event.fallback_used.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn tagger_name(&self) -> &str {
        self.tagger.name()
    }

    /// Tag `text` and keep only its admissible words.
    pub fn admissible_words(&self, text: &str) -> CilinResult<Vec<String>> {
        let tokens = self.tagger.tag(text)?;
        Ok(self.filter.filter(&tokens))
    }

    pub fn word_similarity(&self, a: &str, b: &str) -> f64 {
        word_similarity(a, b, &self.thesaurus)
    }

    /// Directional scores of two raw texts.
    pub fn directional(&self, text1: &str, text2: &str) -> CilinResult<DirectionalScores> {
        let _span = info_span!(spans::TEXT_SIMILARITY).entered();
        let left = self.admissible_words(text1)?;
        let right = self.admissible_words(text2)?;
        let scores = directional_scores(&left, &right, &self.thesaurus)?;
        debug!(
            left_words = left.len(),
            right_words = right.len(),
            forward = scores.forward,
            backward = scores.backward,
            "text similarity"
        );
        Ok(scores)
    }

    /// Similarity of two raw texts in [0, 1].
    ///
    /// Fails if either text has no admissible words.
    pub fn text_similarity(&self, text1: &str, text2: &str) -> CilinResult<f64> {
        self.directional(text1, text2).map(|s| s.combined())
    }

    /// Score every candidate against `query`, best first.
    ///
    /// Equal scores keep input order. A candidate that cannot be scored is
    /// reported in its own entry and sorted last; only an unusable query fails
    /// the whole call.
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> CilinResult<Vec<RankedCandidate>>
    where
        S: AsRef<str> + Sync,
    {
        let _span = info_span!(spans::RANK, candidates = candidates.len()).entered();
        let query_words = self.admissible_words(query)?;
        if query_words.is_empty() {
            return Err(ScoringError::EmptyAdmissibleSequence { side: Side::Left }.into());
        }

        let mut ranked: Vec<RankedCandidate> = candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| {
                let text = candidate.as_ref();
                let outcome = self
                    .admissible_words(text)
                    .and_then(|words| {
                        directional_scores(&query_words, &words, &self.thesaurus)
                            .map_err(Into::into)
                    })
                    .map(|scores| scores.combined());
                match outcome {
                    Ok(score) => RankedCandidate {
                        index,
                        text: text.to_string(),
                        score: Some(score),
                        error: None,
                    },
                    Err(e) => RankedCandidate {
                        index,
                        text: text.to_string(),
                        score: None,
                        error: Some(e.to_string()),
                    },
                }
            })
            .collect();

        // Stable: ties keep input order.
        ranked.sort_by(|a, b| match (a.score, b.score) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(ranked)
    }
}
