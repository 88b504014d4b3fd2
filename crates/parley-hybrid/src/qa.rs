//! Question answering over the append-only QA corpus.
use parley_core::corpus::{next_index, QaStore};
use parley_core::error::Result;
use parley_core::thresholds::Thresholds;
use parley_core::types::QaPair;
use parley_text::{ratio, word_normalize, DirectMatcher, DirectStage};
use parley_vector::{VectorMatcher, VectorStage};
use serde::Serialize;
use tracing::{debug, info};

/// Finds stored answers for a question.
///
/// The direct stage accepts only near-identical questions. Otherwise questions are
/// ranked by log-tf weighted cosine and every answer tied with the best score
/// above the retrieval threshold is returned, best first, then corpus order.
pub struct QaRetriever<D = DirectMatcher, V = VectorMatcher> {
    store: QaStore,
    direct: D,
    vector: V,
    threshold: f64,
}

impl QaRetriever {
    pub fn new(store: QaStore) -> Self {
        let thresholds = Thresholds::default();
        Self::with_stages(store, DirectMatcher::new(thresholds.qa_direct_match), VectorMatcher::log_tf())
            .with_threshold(thresholds.qa_retrieve)
    }
}

impl<D: DirectStage, V: VectorStage> QaRetriever<D, V> {
    pub fn with_stages(store: QaStore, direct: D, vector: V) -> Self {
        Self { store, direct, vector, threshold: Thresholds::default().qa_retrieve }
    }

    /// Override the vector-stage threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Answers for `question`; empty when nothing is known.
    pub fn retrieve(&self, question: &str) -> Result<Vec<String>> {
        let rows = self.store.load()?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let questions: Vec<&str> = rows.iter().map(|r| r.question.as_str()).collect();

        if let Some(hit) = self.direct.best_match(question, &questions) {
            let matched = word_normalize(&rows[hit.index].question);
            let answers = same_question_answers(&rows, &matched);
            debug!(score = hit.score, answers = answers.len(), "qa answered by direct stage");
            return Ok(answers);
        }

        let ranked = self.vector.rank(question, &questions);
        let Some(top) = ranked.first().copied() else { return Ok(Vec::new()) };
        if top.score <= self.threshold {
            debug!(score = top.score, threshold = self.threshold, "no known answer");
            return Ok(Vec::new());
        }
        #[allow(clippy::float_cmp)]
        let answers: Vec<String> =
            ranked.iter().take_while(|s| s.score == top.score).map(|s| rows[s.index].answer.clone()).collect();
        debug!(score = top.score, answers = answers.len(), "qa answered by vector stage");
        Ok(answers)
    }
}

fn same_question_answers(rows: &[QaPair], normalized: &str) -> Vec<String> {
    rows.iter().filter(|r| word_normalize(&r.question) == normalized).map(|r| r.answer.clone()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpdateOutcome {
    Inserted { index: u64 },
    Duplicate,
}

/// Appends confirmed question/answer pairs to the QA corpus.
///
/// A pair is skipped only when some stored question is a near-duplicate of
/// the query *and* some stored answer is a near-duplicate of the answer; the
/// two need not come from the same row.
pub struct QaUpdater {
    store: QaStore,
    question_threshold: f64,
    answer_threshold: f64,
}

impl QaUpdater {
    pub fn new(store: QaStore) -> Self {
        let thresholds = Thresholds::default();
        Self::with_thresholds(store, thresholds.qa_duplicate_question, thresholds.qa_duplicate_answer)
    }

    pub fn with_thresholds(store: QaStore, question_threshold: f64, answer_threshold: f64) -> Self {
        Self { store, question_threshold, answer_threshold }
    }

    pub fn update(&self, query: &str, answer: &str) -> Result<UpdateOutcome> {
        let rows = self.store.load()?;
        let query = query.to_lowercase();
        let answer = answer.to_lowercase();

        let known_question = rows.iter().any(|r| ratio(&query, &r.question) > self.question_threshold);
        let known_answer = rows.iter().any(|r| ratio(&answer, &r.answer) > self.answer_threshold);
        if known_question && known_answer {
            debug!(%query, "qa pair already stored");
            return Ok(UpdateOutcome::Duplicate);
        }

        let index = next_index(&rows);
        self.store.append_row(index, &query, &answer)?;
        info!(index, %query, "learned qa pair");
        Ok(UpdateOutcome::Inserted { index })
    }
}
