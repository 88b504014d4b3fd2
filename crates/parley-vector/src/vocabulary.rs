use ahash::AHashMap;

/// Ordered, de-duplicated term list. A term's position is its vector
/// dimension, fixed by first occurrence while scanning the corpus.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Scan documents in order, and tokens within each document in order.
    pub fn build(tokenized: &[Vec<String>]) -> Self {
        let mut vocab = Self::default();
        for token in tokenized.iter().flatten() {
            vocab.insert(token);
        }
        vocab
    }

    fn insert(&mut self, term: &str) {
        if !self.positions.contains_key(term) {
            self.positions.insert(term.to_string(), self.terms.len());
            self.terms.push(term.to_string());
        }
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter().map(|d| d.iter().map(|t| t.to_string()).collect()).collect()
    }

    #[test]
    fn first_occurrence_fixes_position() {
        let vocab = Vocabulary::build(&docs(&[&["book", "tabl", "book"], &["tabl", "time"], &[]]));
        assert_eq!(vocab.terms(), ["book", "tabl", "time"]);
        assert_eq!(vocab.position("time"), Some(2));
        assert_eq!(vocab.position("joke"), None);
    }
}
