//! Tokenizer / normalizer.
//!
//! Fixed pipeline: lowercase, drop characters outside the call site's allowed
//! set, split into alphanumeric runs, remove English stopwords, stem. The
//! stopword table and the stemming chain live in a process-wide [`Lexicon`]
//! built once and shared by every [`Analyzer`].
use std::sync::LazyLock;

use regex::Regex;
use tantivy::tokenizer::{Language, LowerCaser, SimpleTokenizer, Stemmer, StopWordFilter, TextAnalyzer, TokenStream};

/// NLTK's English stopword list.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've", "you'll", "you'd", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it",
    "it's", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y",
    "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
    "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static ENGLISH: LazyLock<Lexicon> = LazyLock::new(Lexicon::english);
static STEM_ONLY: LazyLock<Lexicon> = LazyLock::new(Lexicon::stem_only);

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex pattern"));

/// Which characters survive step 2 of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharFilter {
    /// `a-z`, `0-9` and space. Used for intent and QA matching.
    #[default]
    AlphaNumeric,
    /// `a-z` and space. Used by the small-talk and transaction classifiers.
    Alphabetic,
    /// Everything except ASCII punctuation. Used for identity extraction.
    Punctuation,
}

impl CharFilter {
    /// Whether `c` survives. Expects already-lowercased input.
    pub fn keeps(self, c: char) -> bool {
        match self {
            CharFilter::AlphaNumeric => c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit(),
            CharFilter::Alphabetic => c == ' ' || c.is_ascii_lowercase(),
            CharFilter::Punctuation => !c.is_ascii_punctuation(),
        }
    }
}

/// Read-only language resources: the stopword set and the stemmer, packaged
/// as a tantivy analysis chain.
pub struct Lexicon {
    chain: TextAnalyzer,
}

impl Lexicon {
    pub fn english() -> Self {
        let chain = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(LowerCaser)
            .filter(StopWordFilter::remove(STOP_WORDS.iter().map(|s| s.to_string())))
            .filter(Stemmer::new(Language::English))
            .build();
        Self { chain }
    }

    /// Stemming without stopword removal.
    pub fn stem_only() -> Self {
        let chain = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(LowerCaser)
            .filter(Stemmer::new(Language::English))
            .build();
        Self { chain }
    }

    /// The process-wide English lexicon.
    pub fn shared() -> &'static Lexicon {
        &ENGLISH
    }

    /// The process-wide stem-only lexicon.
    pub fn shared_stem_only() -> &'static Lexicon {
        &STEM_ONLY
    }

    fn run(&self, text: &str) -> Vec<String> {
        let mut chain = self.chain.clone();
        let mut stream = chain.token_stream(text);
        let mut tokens = Vec::new();
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }
        tokens
    }
}

#[derive(Clone, Copy)]
pub struct Analyzer {
    lexicon: &'static Lexicon,
    filter: CharFilter,
}

impl Analyzer {
    pub fn new(filter: CharFilter) -> Self {
        Self::with_lexicon(Lexicon::shared(), filter)
    }

    pub fn with_lexicon(lexicon: &'static Lexicon, filter: CharFilter) -> Self {
        Self { lexicon, filter }
    }

    pub fn filter(&self) -> CharFilter {
        self.filter
    }

    /// Stemmed, stopword-free tokens of `text`.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text, self.filter);
        if normalized.is_empty() {
            return Vec::new();
        }
        self.lexicon.run(&normalized)
    }

    pub fn analyze_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(CharFilter::default())
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").field("filter", &self.filter).finish_non_exhaustive()
    }
}

/// Lowercase, keep what `filter` allows, and rejoin the alphanumeric runs
/// with single spaces.
pub fn normalize(text: &str, filter: CharFilter) -> String {
    let kept: String = text.to_lowercase().chars().filter(|c| filter.keeps(*c)).collect();
    kept.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Light normalization for direct matching: lowercase and rejoin `\w+` runs.
pub fn word_normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered).map(|m| m.as_str()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_and_drops_stopwords() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.analyze("What is your name?"), vec!["name"]);
        assert_eq!(analyzer.analyze("Booking a table for 4!"), vec!["book", "tabl", "4"]);
    }

    #[test]
    fn empty_and_stopword_only_input_yield_nothing() {
        let analyzer = Analyzer::default();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("who are you").is_empty());
    }

    #[test]
    fn stem_only_lexicon_keeps_stopwords() {
        let analyzer = Analyzer::with_lexicon(Lexicon::shared_stem_only(), CharFilter::Alphabetic);
        assert_eq!(analyzer.analyze("How are you going?"), vec!["how", "are", "you", "go"]);
    }

    #[test]
    fn filters_differ_on_digits_and_punctuation() {
        assert_eq!(normalize("Table for 4, please!", CharFilter::AlphaNumeric), "table for 4 please");
        assert_eq!(normalize("Table for 4, please!", CharFilter::Alphabetic), "table for please");
        assert_eq!(normalize("I'm Ada-Lovelace 2", CharFilter::Punctuation), "im adalovelace 2");
    }

    #[test]
    fn word_normalize_keeps_underscores_and_unicode_letters() {
        assert_eq!(word_normalize("  Hi,   THERE! snake_case café "), "hi there snake_case café");
    }
}
