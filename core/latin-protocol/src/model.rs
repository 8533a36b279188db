use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::{Case, PartOfSpeech};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One grammatical reading of a surface word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Variant {
    pub part_of_speech: PartOfSpeech,
    #[cfg_attr(feature = "serde", serde(rename = "casus", default, skip_serializing_if = "Option::is_none"))]
    pub case: Option<Case>,
    pub english_equivalent: String,
}

impl Variant {
    pub fn new(part_of_speech: PartOfSpeech, case: Option<Case>, english: impl Into<String>) -> Self {
        Self {
            part_of_speech,
            case,
            english_equivalent: english.into(),
        }
    }

    pub fn noun(case: Case, english: impl Into<String>) -> Self {
        Self::new(PartOfSpeech::Noun, Some(case), english)
    }

    pub fn adjective(case: Case, english: impl Into<String>) -> Self {
        Self::new(PartOfSpeech::Adjective, Some(case), english)
    }

    pub fn verb(english: impl Into<String>) -> Self {
        Self::new(PartOfSpeech::Verb, None, english)
    }

    pub fn preposition(case: Case, english: impl Into<String>) -> Self {
        Self::new(PartOfSpeech::Preposition, Some(case), english)
    }

    pub fn is_nominal(&self) -> bool {
        self.part_of_speech.is_nominal()
    }

    /// Nominal reading in exactly `case`.
    pub fn is_nominal_in(&self, case: Case) -> bool {
        self.is_nominal() && self.case == Some(case)
    }

    pub fn is_adjective(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Adjective
    }

    pub fn is_verb(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Verb
    }

    pub fn is_preposition(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Preposition
    }
}

/// A candidate lemma for a surface word together with all of its readings.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AnalysisGroup {
    pub english_base: String,
    pub variants: Vec<Variant>,
}

/// The analysis chosen for one position of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Word {
    pub surface: String,
    pub variants: Vec<Variant>,
}

impl Word {
    pub fn new(surface: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            surface: surface.into(),
            variants,
        }
    }

    pub fn from_group(surface: impl Into<String>, group: AnalysisGroup) -> Self {
        Self::new(surface, group.variants)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Subject,
    Verb,
    Object,
}

/// One extracted constituent: a head and the adjectives attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RoleAssignment {
    pub role: Role,
    pub adjectives: Vec<String>,
    pub head: String,
    pub head_position: usize,
    pub modifier_positions: Vec<usize>,
}

impl RoleAssignment {
    /// English equivalents in rendering order (adjectives, then head).
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjectives
            .iter()
            .map(String::as_str)
            .chain(core::iter::once(self.head.as_str()))
    }

    /// Every sentence position this constituent consumed.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        core::iter::once(self.head_position).chain(self.modifier_positions.iter().copied())
    }
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconEntry {
    pub surface: String,
    pub groups: Vec<AnalysisGroup>,
}

/// Offline analysis table: surface form to candidate analysis groups.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexiconEntry>,
}
