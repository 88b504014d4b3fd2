//! parley-text
//!
//! Text-side matching: the normalizing/stemming analyzer, the character-level
//! similarity ratio, and the direct matcher that compares raw utterances
//! without vectorizing them.
pub mod analyzer;
pub mod direct;
pub mod ratio;

pub use analyzer::{normalize, word_normalize, Analyzer, CharFilter, Lexicon};
pub use direct::{DirectMatcher, DirectStage};
pub use ratio::ratio;
