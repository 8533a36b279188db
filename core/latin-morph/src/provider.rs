use latin_protocol::{AnalysisGroup, Word};

use crate::AnalysisError;

/// Word-level analysis capability. Returns every candidate lemma for a
/// surface form in the provider's own order; an empty result means the word
/// is unknown.
pub trait AnalysisProvider {
    fn analyze(&self, word: &str) -> Result<Vec<AnalysisGroup>, AnalysisError>;
}

/// Sentence-level analysis capability for providers that choose lemmas
/// themselves. Must return exactly one `Word` per surface word, in order.
pub trait SentenceAnalyzer {
    fn analyze_sentence(&self, words: &[&str]) -> Result<Vec<Word>, AnalysisError>;
}

impl<F> AnalysisProvider for F
where
    F: Fn(&str) -> Result<Vec<AnalysisGroup>, AnalysisError>,
{
    fn analyze(&self, word: &str) -> Result<Vec<AnalysisGroup>, AnalysisError> {
        self(word)
    }
}
