use latin_protocol::{Case, Variant};
use tracing::{debug, trace};

use crate::components::Readings;
use crate::SentenceWorld;

/// Preposition-object agreement.
///
/// A word following a preposition keeps only its nominal readings in the
/// case the preposition governs. If it has no such reading it is left
/// untouched. One forward pass: a narrowed word is seen in its narrowed
/// state when it is itself the left neighbour.
///
/// Returns the number of words whose readings shrank.
pub fn prune_prepositions(sentence: &mut SentenceWorld) -> usize {
    let mut narrowed = 0;

    for position in 1..sentence.len() {
        let governed = governed_cases(sentence, position - 1);
        if governed.is_empty() {
            continue;
        }

        let entity = sentence.order[position];
        let Ok(mut readings) = sentence.world.get::<&mut Readings>(entity) else {
            continue;
        };

        let matching: Vec<Variant> = readings
            .variants
            .iter()
            .filter(|v| v.is_nominal() && v.case.map_or(false, |case| governed.contains(&case)))
            .cloned()
            .collect();

        if matching.is_empty() {
            trace!(position, ?governed, "no governed nominal reading, left unchanged");
            continue;
        }

        if matching.len() < readings.variants.len() {
            debug!(
                position,
                ?governed,
                before = readings.variants.len(),
                after = matching.len(),
                "narrowed readings after preposition"
            );
            readings.variants = matching;
            narrowed += 1;
        }
    }

    narrowed
}

/// Cases governed by the preposition readings at `position`, if any.
fn governed_cases(sentence: &SentenceWorld, position: usize) -> Vec<Case> {
    // Collected up front: the neighbour's readings live in the same column
    let mut cases = Vec::new();
    if let Ok(readings) = sentence.world.get::<&Readings>(sentence.order[position]) {
        for variant in readings.variants.iter().filter(|v| v.is_preposition()) {
            if let Some(case) = variant.case {
                if !cases.contains(&case) {
                    cases.push(case);
                }
            }
        }
    }
    cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use latin_protocol::{PartOfSpeech, Word};
    use proptest::prelude::*;

    #[test]
    fn test_preposition_selects_governed_case() {
        // "cum puella": with the girl
        let mut sentence = SentenceWorld::from_words([
            Word::new("cum", vec![Variant::preposition(Case::Ablative, "with")]),
            Word::new(
                "puella",
                vec![
                    Variant::noun(Case::Nominative, "girl"),
                    Variant::noun(Case::Ablative, "girl"),
                    Variant::noun(Case::Vocative, "girl"),
                ],
            ),
        ]);

        assert_eq!(sentence.prune(), 1);
        assert_eq!(sentence.variants(1), vec![Variant::noun(Case::Ablative, "girl")]);
        // The preposition itself is untouched
        assert_eq!(sentence.variants(0).len(), 1);
    }

    #[test]
    fn test_no_matching_reading_leaves_set_unchanged() {
        let before = vec![
            Variant::noun(Case::Nominative, "girl"),
            Variant::adjective(Case::Ablative, "good"),
        ];
        let mut sentence = SentenceWorld::from_words([
            Word::new("cum", vec![Variant::preposition(Case::Ablative, "with")]),
            Word::new("x", before.clone()),
        ]);

        assert_eq!(sentence.prune(), 0);
        assert_eq!(sentence.variants(1), before);
    }

    #[test]
    fn test_influence_does_not_cascade() {
        let ambiguous = vec![
            Variant::noun(Case::Nominative, "house"),
            Variant::noun(Case::Ablative, "house"),
        ];
        let mut sentence = SentenceWorld::from_words([
            Word::new("in", vec![Variant::preposition(Case::Ablative, "in")]),
            Word::new("domo", ambiguous.clone()),
            Word::new("domus", ambiguous.clone()),
        ]);

        sentence.prune();
        assert_eq!(sentence.variants(1), vec![Variant::noun(Case::Ablative, "house")]);
        assert_eq!(sentence.variants(2), ambiguous);
    }

    #[test]
    fn test_multiple_preposition_readings_union_cases() {
        // "in" governs both accusative (into) and ablative (in)
        let mut sentence = SentenceWorld::from_words([
            Word::new(
                "in",
                vec![
                    Variant::preposition(Case::Accusative, "into"),
                    Variant::preposition(Case::Ablative, "in"),
                ],
            ),
            Word::new(
                "urbem",
                vec![
                    Variant::noun(Case::Nominative, "city"),
                    Variant::noun(Case::Accusative, "city"),
                    Variant::new(PartOfSpeech::ProperNoun, Some(Case::Ablative), "Urbs"),
                ],
            ),
        ]);

        sentence.prune();
        assert_eq!(
            sentence.variants(1),
            vec![
                Variant::noun(Case::Accusative, "city"),
                Variant::new(PartOfSpeech::ProperNoun, Some(Case::Ablative), "Urbs"),
            ]
        );
    }

    #[test]
    fn test_narrowed_neighbour_loses_its_preposition_reading() {
        // Position 1 reads as a preposition or an accusative noun; after
        // narrowing by position 0 it no longer governs position 2.
        let mut sentence = SentenceWorld::from_words([
            Word::new("ad", vec![Variant::preposition(Case::Accusative, "to")]),
            Word::new(
                "x",
                vec![
                    Variant::preposition(Case::Ablative, "by"),
                    Variant::noun(Case::Accusative, "thing"),
                ],
            ),
            Word::new(
                "y",
                vec![
                    Variant::noun(Case::Nominative, "other"),
                    Variant::noun(Case::Ablative, "other"),
                ],
            ),
        ]);

        assert_eq!(sentence.prune(), 1);
        assert_eq!(sentence.variants(2).len(), 2);
    }

    fn variant() -> impl Strategy<Value = Variant> {
        (0usize..4, 0usize..3).prop_map(|(kind, case)| {
            let case = [Case::Nominative, Case::Accusative, Case::Ablative][case];
            match kind {
                0 => Variant::noun(case, "n"),
                1 => Variant::adjective(case, "a"),
                2 => Variant::verb("v"),
                _ => Variant::preposition(case, "p"),
            }
        })
    }

    fn words(max_len: usize) -> impl Strategy<Value = Vec<Vec<Variant>>> {
        proptest::collection::vec(proptest::collection::vec(variant(), 1..4), 0..max_len)
    }

    fn build(readings: &[Vec<Variant>]) -> SentenceWorld {
        SentenceWorld::from_words(readings.iter().map(|v| Word::new("w", v.clone())))
    }

    proptest! {
        #[test]
        fn test_only_ever_narrows(readings in words(8)) {
            let mut sentence = build(&readings);
            sentence.prune();

            for (position, before) in readings.iter().enumerate() {
                let after = sentence.variants(position);
                prop_assert!(!after.is_empty());
                prop_assert!(after.len() <= before.len());
                prop_assert!(after.iter().all(|v| before.contains(v)));
            }
        }

        #[test]
        fn test_noop_without_prepositions(readings in words(8)) {
            let readings: Vec<Vec<Variant>> = readings
                .into_iter()
                .map(|mut v| {
                    v.retain(|variant| !variant.is_preposition());
                    if v.is_empty() { v.push(Variant::verb("v")); }
                    v
                })
                .collect();

            let mut sentence = build(&readings);
            prop_assert_eq!(sentence.prune(), 0);

            for (position, before) in readings.iter().enumerate() {
                prop_assert_eq!(&sentence.variants(position), before);
            }
        }
    }
}
