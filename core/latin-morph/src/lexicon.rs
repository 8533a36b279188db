use std::collections::HashMap;

use latin_protocol::{AnalysisGroup, Lexicon, Word};
use rkyv::AlignedVec;
use thiserror::Error;
use tracing::debug;

use crate::provider::{AnalysisProvider, SentenceAnalyzer};
use crate::select::select_lemma;
use crate::AnalysisError;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid lexicon archive: {0}")]
    Archive(String),
}

/// Lookup key for a surface form: lowercase, without vowel-length marks.
pub fn normalize_surface(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            // Combining macron / breve
            '\u{0304}' | '\u{0306}' => None,
            'ā' | 'ă' => Some('a'),
            'ē' | 'ĕ' => Some('e'),
            'ī' | 'ĭ' => Some('i'),
            'ō' | 'ŏ' => Some('o'),
            'ū' | 'ŭ' => Some('u'),
            'ȳ' => Some('y'),
            _ => Some(c),
        })
        .collect()
}

/// Analysis provider backed by an in-memory lexicon.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    version: u32,
    entries: HashMap<String, Vec<AnalysisGroup>>,
}

impl MemoryProvider {
    pub fn new(lexicon: Lexicon) -> Self {
        let mut entries: HashMap<String, Vec<AnalysisGroup>> = HashMap::new();
        for entry in lexicon.entries {
            // Duplicate surfaces merge in document order
            entries
                .entry(normalize_surface(&entry.surface))
                .or_default()
                .extend(entry.groups);
        }
        debug!(version = lexicon.version, surfaces = entries.len(), "loaded lexicon");

        Self {
            version: lexicon.version,
            entries,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        Ok(Self::new(lexicon))
    }

    /// Loads an rkyv archive. The bytes are validated before use.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives read from disk or fetched in the browser carry no alignment guarantee
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let lexicon: Lexicon =
            rkyv::from_bytes(&aligned).map_err(|e| LexiconError::Archive(format!("{e:?}")))?;
        Ok(Self::new(lexicon))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of distinct normalized surface forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnalysisProvider for MemoryProvider {
    fn analyze(&self, word: &str) -> Result<Vec<AnalysisGroup>, AnalysisError> {
        Ok(self
            .entries
            .get(&normalize_surface(word))
            .cloned()
            .unwrap_or_default())
    }
}

impl SentenceAnalyzer for MemoryProvider {
    fn analyze_sentence(&self, words: &[&str]) -> Result<Vec<Word>, AnalysisError> {
        words
            .iter()
            .map(|word| select_lemma(word, self.analyze(word)?))
            .collect()
    }
}
