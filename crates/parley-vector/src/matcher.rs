//! Vector stage: tokenize the candidates and the query, build a vocabulary
//! and vectors from scratch, and rank candidates by cosine similarity.
//! Nothing survives between calls, so a changed corpus is always seen.
use parley_core::types::Scored;
use parley_text::Analyzer;
use tracing::debug;

use crate::similarity::{cosine, rank};
use crate::vectorize::{bag_of_words, count_vector, Idf, Weighting};
use crate::vocabulary::Vocabulary;

/// Second stage of a two-stage matcher.
pub trait VectorStage {
    /// All candidates ranked against `query`, best first, ties in input order.
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<Scored>;
}

/// How count vectors are weighted before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Raw,
    /// Log-frequency with unit idf.
    LogTf,
    /// Log-frequency with document-frequency idf computed over the candidates.
    TfIdf,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VectorMatcher {
    analyzer: Analyzer,
    scheme: Scheme,
}

impl VectorMatcher {
    pub fn new(analyzer: Analyzer, scheme: Scheme) -> Self {
        Self { analyzer, scheme }
    }

    /// Raw counts, intent-matching character filter.
    pub fn raw() -> Self {
        Self::default()
    }

    /// Log-tf weighting, intent-matching character filter.
    pub fn log_tf() -> Self {
        Self::new(Analyzer::default(), Scheme::LogTf)
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Cosine of the query against each candidate, in candidate order.
    pub fn scores(&self, query: &str, candidates: &[&str]) -> Vec<f64> {
        let tokenized = self.analyzer.analyze_all(candidates);
        let vocab = Vocabulary::build(&tokenized);
        let weighting = match self.scheme {
            Scheme::Raw => Weighting::Raw,
            Scheme::LogTf => Weighting::LogTf(Idf::Unit),
            Scheme::TfIdf => Weighting::LogTf(Idf::document_frequency(&vocab, &tokenized)),
        };
        let query_tokens = self.analyzer.analyze(query);
        let query_counts = count_vector(&vocab, &query_tokens);
        debug!(?query_tokens, vocabulary = vocab.len(), scheme = ?self.scheme, "vectorized query");
        // Smoothing would otherwise turn an all-unknown query into a uniform
        // vector that resembles every candidate.
        if query_counts.iter().all(|&c| c == 0.0) {
            return vec![0.0; candidates.len()];
        }
        let query_vec = weighting.apply(&query_counts);
        bag_of_words(&vocab, &tokenized).iter().map(|doc| cosine(&query_vec, &weighting.apply(doc))).collect()
    }
}

impl VectorStage for VectorMatcher {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<Scored> {
        rank(self.scores(query, candidates))
    }
}
