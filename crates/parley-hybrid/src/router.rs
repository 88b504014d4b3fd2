use parley_core::error::{Error, Result};
use parley_core::thresholds::Thresholds;
use parley_core::traits::{Classifier, CorpusSource};
use parley_core::types::{Stage, OTHER_LABEL};
use parley_text::{DirectMatcher, DirectStage};
use parley_vector::{VectorMatcher, VectorStage};
use serde::Serialize;
use tracing::debug;

/// A routing decision and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOutcome {
    pub label: String,
    pub stage: Stage,
    /// Best score seen by `stage`, even when it fell short and the label is
    /// `other`.
    pub score: f64,
    /// Corpus text of the accepted entry, if any.
    pub matched: Option<String>,
}

/// Maps an utterance to an intent label.
///
/// The corpus is read again on every call and scanned newest row first, so
/// later rows win ties.
pub struct IntentRouter<C, D = DirectMatcher, V = VectorMatcher> {
    corpus: C,
    direct: D,
    vector: V,
    threshold: f64,
}

impl<C: CorpusSource> IntentRouter<C> {
    pub fn new(corpus: C) -> Self {
        let thresholds = Thresholds::default();
        Self::with_stages(corpus, DirectMatcher::new(thresholds.direct_match), VectorMatcher::raw())
            .with_threshold(thresholds.intent_vector)
    }
}

impl<C, D, V> IntentRouter<C, D, V>
where
    C: CorpusSource,
    D: DirectStage,
    V: VectorStage,
{
    pub fn with_stages(corpus: C, direct: D, vector: V) -> Self {
        Self { corpus, direct, vector, threshold: Thresholds::default().intent_vector }
    }

    /// Override the vector-stage threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Label for `utterance`, or `"other"` when neither stage is confident.
    ///
    /// The intent corpus must be non-empty; an empty one is reported as
    /// [`Error::EmptyCorpus`].
    pub fn matching(&self, utterance: &str) -> Result<String> {
        Ok(self.route(utterance)?.label)
    }

    pub fn route(&self, utterance: &str) -> Result<RouteOutcome> {
        let mut corpus = self.corpus.load()?;
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus("intent corpus has no rows".to_string()));
        }
        corpus.reverse();
        let texts: Vec<&str> = corpus.iter().map(|row| row.text.as_str()).collect();

        if let Some(hit) = self.direct.best_match(utterance, &texts) {
            let row = &corpus[hit.index];
            debug!(label = %row.label, score = hit.score, "routed by direct stage");
            return Ok(RouteOutcome {
                label: row.label.clone(),
                stage: Stage::Direct,
                score: hit.score,
                matched: Some(row.text.clone()),
            });
        }

        let ranked = self.vector.rank(utterance, &texts);
        let best = ranked.first().copied();
        let outcome = match best {
            Some(best) if best.score > self.threshold => {
                let row = &corpus[best.index];
                RouteOutcome {
                    label: row.label.clone(),
                    stage: Stage::Vector,
                    score: best.score,
                    matched: Some(row.text.clone()),
                }
            }
            _ => RouteOutcome {
                label: OTHER_LABEL.to_string(),
                stage: Stage::Vector,
                score: best.map_or(0.0, |b| b.score),
                matched: None,
            },
        };
        debug!(label = %outcome.label, score = outcome.score, "routed by vector stage");
        Ok(outcome)
    }
}

impl<C, D, V> Classifier for IntentRouter<C, D, V>
where
    C: CorpusSource,
    D: DirectStage,
    V: VectorStage,
{
    fn classify(&self, text: &str) -> Result<String> {
        self.matching(text)
    }
}
