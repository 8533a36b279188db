use latin_ecs::SentenceWorld;
use latin_morph::{select_lemma, AnalysisError, AnalysisProvider, SentenceAnalyzer};
use latin_parser::surface_words;
use latin_protocol::{RoleAssignment, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::compose::compose;
use crate::roles::extract_roles;

/// Which provider capability resolves the words of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
    /// One `analyze` call per surface word; lemma selection runs here.
    #[default]
    Word,
    /// One `analyze_sentence` call; the provider selects lemmas itself.
    Sentence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub entry_point: EntryPoint,
    /// Run preposition agreement before role extraction.
    pub prune_variants: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            entry_point: EntryPoint::Word,
            prune_variants: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("word {position} ('{word}'): {source}")]
    Word {
        position: usize,
        word: String,
        #[source]
        source: AnalysisError,
    },
    #[error("sentence analysis failed: {0}")]
    Sentence(#[source] AnalysisError),
}

impl TranslateError {
    /// Position of the offending word, when the failure is tied to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            TranslateError::Word { position, .. } => Some(*position),
            TranslateError::Sentence(_) => None,
        }
    }
}

/// Result of one sentence: the rendering plus what produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    pub roles: Vec<RoleAssignment>,
    /// Words as they stood after pruning, before extraction.
    pub words: Vec<Word>,
}

#[derive(Clone, Copy)]
pub enum Source<'p> {
    Words(&'p dyn AnalysisProvider),
    Sentence(&'p dyn SentenceAnalyzer),
}

impl<'p> Source<'p> {
    pub fn configured<P>(provider: &'p P, entry_point: EntryPoint) -> Self
    where
        P: AnalysisProvider + SentenceAnalyzer,
    {
        match entry_point {
            EntryPoint::Word => Source::Words(provider),
            EntryPoint::Sentence => Source::Sentence(provider),
        }
    }

    fn entry_point(&self) -> EntryPoint {
        match self {
            Source::Words(_) => EntryPoint::Word,
            Source::Sentence(_) => EntryPoint::Sentence,
        }
    }
}

/// Runs one sentence at a time through selection, pruning, extraction and
/// composition. Any failure aborts the sentence; there is no partial output.
pub struct Translator<'p> {
    source: Source<'p>,
    config: TranslatorConfig,
}

impl<'p> Translator<'p> {
    pub fn new<P>(provider: &'p P, config: TranslatorConfig) -> Self
    where
        P: AnalysisProvider + SentenceAnalyzer,
    {
        Self {
            source: Source::configured(provider, config.entry_point),
            config,
        }
    }

    /// Build from an explicit source; the config's entry point follows it.
    pub fn with_source(source: Source<'p>, config: TranslatorConfig) -> Self {
        Self {
            config: TranslatorConfig {
                entry_point: source.entry_point(),
                ..config
            },
            source,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn translate(&self, input: &str) -> Result<Translation, TranslateError> {
        let words = surface_words(input);
        self.translate_words(&words)
    }

    pub fn translate_words(&self, words: &[&str]) -> Result<Translation, TranslateError> {
        let mut sentence = self.resolve(words)?;

        if self.config.prune_variants {
            sentence.prune();
        }
        let snapshot = sentence.words();

        let roles = extract_roles(&mut sentence);
        let text = compose(&roles);
        debug!(words = words.len(), roles = roles.len(), %text, "translated sentence");

        Ok(Translation {
            text,
            roles,
            words: snapshot,
        })
    }

    fn resolve(&self, words: &[&str]) -> Result<SentenceWorld, TranslateError> {
        match self.source {
            Source::Words(provider) => {
                let mut sentence = SentenceWorld::new();
                for (position, &word) in words.iter().enumerate() {
                    let lemma = provider
                        .analyze(word)
                        .and_then(|groups| select_lemma(word, groups))
                        .map_err(|source| TranslateError::Word {
                            position,
                            word: word.to_string(),
                            source,
                        })?;
                    sentence.add_word(lemma);
                }
                Ok(sentence)
            }
            Source::Sentence(analyzer) => {
                let resolved = analyzer
                    .analyze_sentence(words)
                    .map_err(|source| locate(words, source))?;

                if resolved.len() != words.len() {
                    return Err(TranslateError::Sentence(AnalysisError::ProviderContract {
                        word: words.join(" "),
                        reason: format!("expected {} words, got {}", words.len(), resolved.len()),
                    }));
                }

                if let Some(position) = resolved.iter().position(|w| w.variants.is_empty()) {
                    let word = words[position].to_string();
                    return Err(TranslateError::Word {
                        position,
                        source: AnalysisError::UnresolvedWord { word: word.clone() },
                        word,
                    });
                }

                Ok(SentenceWorld::from_words(resolved))
            }
        }
    }
}

/// Ties a sentence-level failure back to a position when the provider names
/// a word that occurs in the input.
fn locate(words: &[&str], source: AnalysisError) -> TranslateError {
    match words.iter().position(|w| *w == source.word()) {
        Some(position) => TranslateError::Word {
            position,
            word: words[position].to_string(),
            source,
        },
        None => TranslateError::Sentence(source),
    }
}
