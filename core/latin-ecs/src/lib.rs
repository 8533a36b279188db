pub mod components;
pub mod systems;

use hecs::{Entity, World};
use components::{Readings, Syntax, TokenData};
use latin_protocol::{Variant, Word};
use systems::pruning::prune_prepositions;

/// One sentence under resolution. Every word is an entity; its position in
/// the sentence is its only identity. Words are never removed: consuming a
/// word attaches a `Syntax` component to it.
pub struct SentenceWorld {
    world: World,
    order: Vec<Entity>,
}

impl SentenceWorld {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            order: Vec::new(),
        }
    }

    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut sentence = Self::new();
        for word in words {
            sentence.add_word(word);
        }
        sentence
    }

    /// Expose the inner hecs World for external systems
    pub fn inner(&self) -> &World {
        &self.world
    }

    /// Append a word at the next position
    pub fn add_word(&mut self, word: Word) -> Entity {
        let position = self.order.len();
        let entity = self.world.spawn((
            TokenData { text: word.surface, position },
            Readings { variants: word.variants },
        ));
        self.order.push(entity);
        entity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn entity(&self, position: usize) -> Option<Entity> {
        self.order.get(position).copied()
    }

    /// True if the position exists and no constituent has consumed it yet.
    pub fn is_available(&self, position: usize) -> bool {
        self.entity(position)
            .map_or(false, |entity| self.world.get::<&Syntax>(entity).is_err())
    }

    /// Unconsumed positions in sentence order.
    pub fn available(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&position| self.is_available(position))
    }

    /// First reading at `position` matching `predicate`, in provider order.
    pub fn find_variant<P>(&self, position: usize, predicate: P) -> Option<Variant>
    where
        P: Fn(&Variant) -> bool,
    {
        let entity = self.entity(position)?;
        let readings = self.world.get::<&Readings>(entity).ok()?;
        let found = readings.variants.iter().find(|v| predicate(v)).cloned();
        found
    }

    /// Snapshot of the readings still held at `position`.
    pub fn variants(&self, position: usize) -> Vec<Variant> {
        self.entity(position)
            .and_then(|entity| {
                let readings = self.world.get::<&Readings>(entity).ok()?;
                let variants = readings.variants.clone();
                Some(variants)
            })
            .unwrap_or_default()
    }

    /// Mark `position` as consumed. Returns false if it was already taken
    /// or does not exist.
    pub fn consume(&mut self, position: usize, syntax: Syntax) -> bool {
        match self.entity(position) {
            Some(entity) if self.is_available(position) => {
                self.world.insert_one(entity, syntax).is_ok()
            }
            _ => false,
        }
    }

    pub fn syntax(&self, position: usize) -> Option<Syntax> {
        let entity = self.entity(position)?;
        let syntax = self.world.get::<&Syntax>(entity).ok().map(|s| *s);
        syntax
    }

    /// Current state of every word, in order.
    pub fn words(&self) -> Vec<Word> {
        self.order
            .iter()
            .filter_map(|&entity| {
                let token = self.world.get::<&TokenData>(entity).ok()?;
                let readings = self.world.get::<&Readings>(entity).ok()?;
                let word = Word::new(token.text.clone(), readings.variants.clone());
                Some(word)
            })
            .collect()
    }

    /// Run the agreement systems over the whole sentence
    pub fn prune(&mut self) -> usize {
        prune_prepositions(self)
    }
}

impl Default for SentenceWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latin_protocol::{Case, Role};

    fn sentence() -> SentenceWorld {
        SentenceWorld::from_words([
            Word::new("milites", vec![Variant::noun(Case::Nominative, "soldiers")]),
            Word::new("sunt", vec![Variant::verb("are")]),
            Word::new("fortes", vec![Variant::adjective(Case::Nominative, "brave")]),
        ])
    }

    #[test]
    fn test_positions_follow_insertion_order() {
        let sentence = sentence();
        assert_eq!(sentence.len(), 3);

        let entity = sentence.entity(2).unwrap();
        let token = sentence.inner().get::<&TokenData>(entity).unwrap();
        assert_eq!(token.text, "fortes");
        assert_eq!(token.position, 2);
    }

    #[test]
    fn test_consumption_is_permanent() {
        let mut sentence = sentence();
        let subject = Syntax { role: Role::Subject, head: None };

        assert!(sentence.consume(1, subject));
        assert!(!sentence.is_available(1));
        assert_eq!(sentence.available().collect::<Vec<_>>(), [0, 2]);

        // A second role cannot take the same word
        assert!(!sentence.consume(1, Syntax { role: Role::Object, head: None }));
        assert_eq!(sentence.syntax(1), Some(subject));

        // Consumed words keep their readings for diagnostics
        assert_eq!(sentence.words()[1].variants, vec![Variant::verb("are")]);
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut sentence = sentence();
        assert!(!sentence.is_available(3));
        assert!(sentence.find_variant(3, |_| true).is_none());
        assert!(sentence.variants(3).is_empty());
        assert!(!sentence.consume(3, Syntax { role: Role::Verb, head: None }));
    }

    #[test]
    fn test_find_variant_returns_first_match() {
        let sentence = SentenceWorld::from_words([Word::new(
            "rosa",
            vec![
                Variant::noun(Case::Ablative, "rose"),
                Variant::noun(Case::Nominative, "rose (subject)"),
                Variant::noun(Case::Nominative, "rose (again)"),
            ],
        )]);

        let found = sentence.find_variant(0, |v| v.is_nominal_in(Case::Nominative)).unwrap();
        assert_eq!(found.english_equivalent, "rose (subject)");
    }
}
