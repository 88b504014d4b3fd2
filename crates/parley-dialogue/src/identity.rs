//! Pulls a user's name out of a self-introduction.
use parley_core::thresholds::NAME_CUE_THRESHOLD;
use parley_text::{ratio, CharFilter};

/// Phrases that usually precede a name, tried in this order.
pub const NAME_CUES: [&str; 3] = ["name is", "i am", "call me"];

/// Best guess at the name in `sentence`.
///
/// A single word is taken as the name. Otherwise the first word bigram that
/// resembles a cue splits the sentence and whatever follows its last
/// occurrence is the name; with no cue the last word is used.
pub fn extract_name(sentence: &str) -> String {
    let trimmed = sentence.trim();
    if !trimmed.contains(' ') {
        return trimmed.to_string();
    }

    let stripped: String = trimmed.chars().filter(|c| CharFilter::Punctuation.keeps(*c)).collect();
    let words: Vec<&str> = stripped.split_whitespace().collect();
    let bigrams: Vec<String> = words.windows(2).map(|pair| pair.join(" ")).collect();

    for cue in NAME_CUES {
        if let Some(bigram) = bigrams.iter().find(|b| ratio(cue, &b.to_lowercase()) > NAME_CUE_THRESHOLD) {
            return stripped.rsplit(bigram.as_str()).next().unwrap_or_default().trim().to_string();
        }
    }
    words.last().map(|w| (*w).to_string()).unwrap_or_default()
}
