//! Count vectors over a [`Vocabulary`] and the optional log-frequency
//! weighting applied on top of them.
use ahash::AHashSet;

use crate::vocabulary::Vocabulary;

/// Added to every weighted component, zeros included.
pub const SMOOTHING: f64 = 0.01;

/// Inverse document frequency used by [`Weighting::LogTf`].
///
/// Retrieval runs with [`Idf::Unit`]: the per-term document scan is kept out
/// of the per-call path, leaving plain log-frequency weighting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Idf {
    #[default]
    Unit,
    /// `ln(N / df)` per vocabulary position.
    DocumentFrequency(Vec<f64>),
}

impl Idf {
    pub fn document_frequency(vocab: &Vocabulary, tokenized: &[Vec<String>]) -> Self {
        let mut df = vec![0usize; vocab.len()];
        for doc in tokenized {
            let unique: AHashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                if let Some(pos) = vocab.position(term) {
                    df[pos] += 1;
                }
            }
        }
        let n = tokenized.len() as f64;
        Idf::DocumentFrequency(df.into_iter().map(|d| if d == 0 { 0.0 } else { (n / d as f64).ln() }).collect())
    }

    fn at(&self, pos: usize) -> f64 {
        match self {
            Idf::Unit => 1.0,
            Idf::DocumentFrequency(weights) => weights.get(pos).copied().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Weighting {
    #[default]
    Raw,
    /// `ln(1 + f) * idf + SMOOTHING`
    LogTf(Idf),
}

impl Weighting {
    pub fn log_tf() -> Self {
        Weighting::LogTf(Idf::Unit)
    }

    pub fn apply(&self, counts: &[f64]) -> Vec<f64> {
        match self {
            Weighting::Raw => counts.to_vec(),
            Weighting::LogTf(idf) => {
                counts.iter().enumerate().map(|(pos, f)| f.ln_1p() * idf.at(pos) + SMOOTHING).collect()
            }
        }
    }
}

/// Raw term frequencies of `tokens`; terms outside the vocabulary are ignored.
pub fn count_vector(vocab: &Vocabulary, tokens: &[String]) -> Vec<f64> {
    let mut vector = vec![0.0; vocab.len()];
    for pos in tokens.iter().filter_map(|t| vocab.position(t)) {
        vector[pos] += 1.0;
    }
    vector
}

pub fn bag_of_words(vocab: &Vocabulary, tokenized: &[Vec<String>]) -> Vec<Vec<f64>> {
    tokenized.iter().map(|doc| count_vector(vocab, doc)).collect()
}
