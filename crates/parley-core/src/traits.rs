use crate::error::Result;
use crate::types::LabeledText;

/// Anything that can hand back an intent-labeled corpus, freshly read on
/// every call.
pub trait CorpusSource {
    fn load(&self) -> Result<Vec<LabeledText>>;
}

impl CorpusSource for Vec<LabeledText> {
    fn load(&self) -> Result<Vec<LabeledText>> {
        Ok(self.clone())
    }
}

impl<T: CorpusSource + ?Sized> CorpusSource for &T {
    fn load(&self) -> Result<Vec<LabeledText>> {
        (**self).load()
    }
}

/// Opaque `classify(text) -> label` collaborator (small talk, transactions).
pub trait Classifier {
    fn classify(&self, text: &str) -> Result<String>;
}
