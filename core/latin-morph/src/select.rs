use latin_protocol::{AnalysisGroup, Word};
use tracing::debug;

use crate::AnalysisError;

/// Picks the lemma for one surface word.
///
/// Homographs are resolved towards the group with the shortest English base
/// (counted in characters); ties keep the provider's order.
pub fn select_lemma(surface: &str, groups: Vec<AnalysisGroup>) -> Result<Word, AnalysisError> {
    let candidates = groups.len();

    let group = groups
        .into_iter()
        .min_by_key(|group| group.english_base.chars().count())
        .ok_or_else(|| AnalysisError::UnresolvedWord {
            word: surface.to_string(),
        })?;

    if group.variants.is_empty() {
        return Err(AnalysisError::ProviderContract {
            word: surface.to_string(),
            reason: format!("analysis group '{}' has no variants", group.english_base),
        });
    }

    debug!(surface, base = %group.english_base, candidates, "selected lemma");
    Ok(Word::from_group(surface, group))
}
