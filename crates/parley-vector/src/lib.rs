//! parley-vector
//!
//! Bag-of-words vector space: vocabulary construction, count vectors with
//! optional log-frequency weighting, cosine similarity, stable ranking, and
//! the vector stage of the two-stage matcher.
pub mod matcher;
pub mod similarity;
pub mod vectorize;
pub mod vocabulary;

pub use matcher::{Scheme, VectorMatcher, VectorStage};
pub use similarity::{cosine, rank};
pub use vectorize::{bag_of_words, count_vector, Idf, Weighting, SMOOTHING};
pub use vocabulary::Vocabulary;
