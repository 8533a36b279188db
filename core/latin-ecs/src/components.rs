use hecs::Entity;
use latin_protocol::{Role, Variant};

/// Basic data about the word (Source of Truth)
#[derive(Debug, Clone)]
pub struct TokenData {
    pub text: String,
    pub position: usize,
}

/// The word's remaining candidate readings. Pruning narrows this in place.
#[derive(Debug, Clone)]
pub struct Readings {
    pub variants: Vec<Variant>,
}

/// Marks a word as consumed by a constituent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub role: Role,
    /// The constituent head this word modifies; `None` on the head itself.
    pub head: Option<Entity>,
}
