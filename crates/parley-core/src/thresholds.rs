//! Fixed decision thresholds. Every comparison against them is strict (`>`).

use serde::{Deserialize, Serialize};

/// Minimum string ratio for the direct stage to accept a corpus entry.
pub const DIRECT_MATCH_THRESHOLD: f64 = 0.7;
/// Minimum raw bag-of-words cosine for the router's vector stage.
pub const INTENT_VECTOR_THRESHOLD: f64 = 0.7;
/// Minimum string ratio for QA retrieval to answer from a stored question
/// without vectorizing.
pub const QA_DIRECT_MATCH_THRESHOLD: f64 = 0.9;
/// Minimum log-tf weighted cosine for QA retrieval.
pub const QA_RETRIEVE_THRESHOLD: f64 = 0.8;
/// String ratio above which a stored question counts as a duplicate.
pub const QA_DUPLICATE_QUESTION_THRESHOLD: f64 = 0.9;
/// String ratio above which a stored answer counts as a duplicate.
pub const QA_DUPLICATE_ANSWER_THRESHOLD: f64 = 0.9;
/// Ratio a bigram must exceed to count as a name cue ("my name is", ...).
pub const NAME_CUE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub direct_match: f64,
    pub intent_vector: f64,
    pub qa_direct_match: f64,
    pub qa_retrieve: f64,
    pub qa_duplicate_question: f64,
    pub qa_duplicate_answer: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            direct_match: DIRECT_MATCH_THRESHOLD,
            intent_vector: INTENT_VECTOR_THRESHOLD,
            qa_direct_match: QA_DIRECT_MATCH_THRESHOLD,
            qa_retrieve: QA_RETRIEVE_THRESHOLD,
            qa_duplicate_question: QA_DUPLICATE_QUESTION_THRESHOLD,
            qa_duplicate_answer: QA_DUPLICATE_ANSWER_THRESHOLD,
        }
    }
}
