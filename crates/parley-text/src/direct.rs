//! Direct matching: character ratio between the lightly normalized query and
//! each raw corpus entry, no vectorization. Catches short utterances whose
//! bag-of-words vectors are too sparse to compare.
use parley_core::thresholds::DIRECT_MATCH_THRESHOLD;
use parley_core::types::Scored;
use tracing::debug;

use crate::analyzer::word_normalize;
use crate::ratio::ratio;

/// First stage of a two-stage matcher.
pub trait DirectStage {
    /// Best candidate above the stage threshold, or `None` for "no match".
    fn best_match(&self, query: &str, candidates: &[&str]) -> Option<Scored>;
}

#[derive(Debug, Clone, Copy)]
pub struct DirectMatcher {
    threshold: f64,
}

impl DirectMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ratio of the query against every candidate, in candidate order.
    pub fn scores(&self, query: &str, candidates: &[&str]) -> Vec<Scored> {
        let query = word_normalize(query);
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| Scored::new(index, ratio(&query, &word_normalize(candidate))))
            .collect()
    }
}

impl Default for DirectMatcher {
    fn default() -> Self {
        Self::new(DIRECT_MATCH_THRESHOLD)
    }
}

impl DirectStage for DirectMatcher {
    fn best_match(&self, query: &str, candidates: &[&str]) -> Option<Scored> {
        let mut best: Option<Scored> = None;
        for scored in self.scores(query, candidates) {
            if best.map_or(true, |b| scored.score > b.score) {
                best = Some(scored);
            }
        }
        let best = best?;
        debug!(index = best.index, score = best.score, threshold = self.threshold, "direct stage best candidate");
        (best.score > self.threshold).then_some(best)
    }
}
