pub mod decode;
pub mod lexicon;
pub mod provider;
pub mod select;

pub use decode::decode_analysis;
pub use lexicon::{normalize_surface, LexiconError, MemoryProvider};
pub use provider::{AnalysisProvider, SentenceAnalyzer};
pub use select::select_lemma;

use thiserror::Error;

/// Failures at the analysis boundary. Either one aborts the whole sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no analysis found for '{word}'")]
    UnresolvedWord { word: String },
    #[error("analysis provider broke its contract for '{word}': {reason}")]
    ProviderContract { word: String, reason: String },
}

impl AnalysisError {
    pub fn word(&self) -> &str {
        match self {
            AnalysisError::UnresolvedWord { word } | AnalysisError::ProviderContract { word, .. } => word,
        }
    }
}
