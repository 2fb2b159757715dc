//! Card values.
//!
//! Combat cards carry nothing but a face value: higher beats lower, and in
//! the recursive variant the value doubles as the number of cards copied
//! into a sub-game.

use serde::{Deserialize, Serialize};

/// A single card, identified by its face value.
///
/// The engine assumes values are positive and distinct across both decks of
/// a game (the standard deal is 1..N, but any distinct positive values
/// work). Neither property is enforced here; behavior is defined only for
/// values >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u32);

impl Card {
    /// Create a card with the given face value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Card {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
