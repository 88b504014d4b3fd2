//! Domain types shared by the text and vector engines.

use serde::{Deserialize, Serialize};

/// Label returned by the router when no stage clears its threshold.
pub const OTHER_LABEL: &str = "other";

/// One row of an intent or classifier corpus: `[query_text, label]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub label: String,
}

impl LabeledText {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self { text: text.into(), label: label.into() }
    }
}

/// One row of the question-answering corpus: `[index, question, answer]`.
///
/// `index` is the row identity allocated at append time. Rows written by
/// hand may carry a non-numeric index, which is kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub index: Option<u64>,
    pub question: String,
    pub answer: String,
}

/// Indicates which matching stage produced a decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Direct,
    Vector,
}

/// A similarity score paired with the position of the corpus entry it was
/// computed against. Higher is always better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub index: usize,
    pub score: f64,
}

impl Scored {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}
