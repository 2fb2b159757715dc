//! Decks: ordered card sequences played from the front.
//!
//! A deck is the only mutable structure in a Combat game. Exactly two
//! operations touch it during play:
//! - `draw` removes the front card (the next card to play), and
//! - `capture` appends a won pair at the back, winner's card first.
//!
//! ## Why `im::Vector`
//!
//! The recursive variant snapshots both decks at the start of every round
//! for cycle detection, and copies deck prefixes into sub-games. A
//! persistent vector makes those clones structural-sharing cheap instead of
//! O(n) memcpys, while still giving O(log n) front-pop and back-push.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// An ordered sequence of cards.
///
/// Front = next card to play, back = where won cards arrive.
///
/// ## Example
///
/// ```
/// use combat_engine::core::{Card, Deck};
///
/// let mut deck = Deck::from_values([9, 2, 6]);
///
/// let drawn = deck.draw();
/// assert_eq!(drawn, Some(Card::new(9)));
///
/// // The round winner keeps both cards, their own on top of the pair.
/// deck.capture(Card::new(9), Card::new(5));
/// assert_eq!(deck.values(), vec![2, 6, 9, 5]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from face values, front first.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        values.into_iter().map(Card::new).collect()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the front card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append a won pair at the back: the round winner's card, then the
    /// loser's card. The winner's card may be the lower-valued of the two
    /// when the round was decided by a sub-game.
    pub fn capture(&mut self, winning: Card, losing: Card) {
        self.cards.push_back(winning);
        self.cards.push_back(losing);
    }

    /// Copy the top `count` cards into a new deck, leaving this one
    /// untouched. Sub-games are dealt this way.
    ///
    /// Panics if fewer than `count` cards are held.
    #[must_use]
    pub fn copy_top(&self, count: usize) -> Self {
        assert!(
            count <= self.cards.len(),
            "Cannot copy {} cards from a deck of {}",
            count,
            self.cards.len()
        );
        Self {
            cards: self.cards.take(count),
        }
    }

    /// Iterate over the cards, front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Face values front to back, for inspection.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.cards.iter().map(|card| card.value()).collect()
    }

    /// Positionally-weighted score of the deck.
    ///
    /// The bottom card is worth its value times 1, the next one up times 2,
    /// and so on; the top card's weight equals the deck length. An empty
    /// deck scores 0.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.cards
            .iter()
            .rev()
            .enumerate()
            .map(|(index, card)| (index as u64 + 1) * u64::from(card.value()))
            .sum()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}
