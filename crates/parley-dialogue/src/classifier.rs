//! Nearest-neighbour text classifier for small-talk style sub-intents.
use parley_core::error::{Error, Result};
use parley_core::traits::{Classifier, CorpusSource};
use parley_core::types::OTHER_LABEL;
use parley_text::{Analyzer, CharFilter, Lexicon};
use parley_vector::{Scheme, VectorMatcher, VectorStage};
use tracing::debug;

/// Labels a sentence with the label of its most similar corpus row.
///
/// Similarity is raw bag-of-words cosine over stemmed letters-only tokens.
/// Stopwords are kept since short chit-chat is mostly made of them. Ties go to
/// the earliest row, and a sentence sharing no term with the corpus is
/// `"other"`.
pub struct NearestNeighbour<C> {
    corpus: C,
    matcher: VectorMatcher,
}

impl<C: CorpusSource> NearestNeighbour<C> {
    pub fn new(corpus: C) -> Self {
        let analyzer = Analyzer::with_lexicon(Lexicon::shared_stem_only(), CharFilter::Alphabetic);
        Self { corpus, matcher: VectorMatcher::new(analyzer, Scheme::Raw) }
    }
}

impl<C: CorpusSource> Classifier for NearestNeighbour<C> {
    fn classify(&self, text: &str) -> Result<String> {
        let rows = self.corpus.load()?;
        if rows.is_empty() {
            return Err(Error::EmptyCorpus("classifier corpus has no rows".into()));
        }
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        let label = match self.matcher.rank(text, &texts).first() {
            Some(best) if best.score > 0.0 => rows[best.index].label.clone(),
            _ => OTHER_LABEL.to_string(),
        };
        debug!(%text, %label, "classified");
        Ok(label)
    }
}
