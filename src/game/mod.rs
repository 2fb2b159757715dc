//! Game variants and results.
//!
//! Two variants share the same deck mechanics and differ only in how a
//! round's winner is decided:
//! - `simple::play`: higher drawn card wins, always.
//! - `recursive::recursive_combat`: a sub-game decides the round when both
//!   players hold enough cards, with a repeat-configuration rule guarding
//!   against infinite play.

pub mod recursive;
pub mod simple;

pub use recursive::recursive_combat;
pub use simple::play;

use serde::{Deserialize, Serialize};

use crate::core::{Card, Deck, Player};

/// Result of a completed game.
///
/// Both final decks are part of the result. After a normal win the loser's
/// deck is empty; after a repeat-configuration win (recursive variant only)
/// the loser may still hold cards; the decks are returned exactly as they
/// stood when the repeat was detected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Who won.
    pub winner: Player,
    /// Player 1's final deck.
    pub first: Deck,
    /// Player 2's final deck.
    pub second: Deck,
    /// Number of rounds settled. A repeat-detected round does not count.
    pub rounds: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    /// The winning player's final deck.
    #[must_use]
    pub fn winning_deck(&self) -> &Deck {
        match self.winner {
            Player::One => &self.first,
            Player::Two => &self.second,
        }
    }

    /// Score of the winning deck.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.winning_deck().score()
    }
}

/// Draw the top card of each deck, or `None` when either deck is empty
/// (in which case neither deck is touched).
pub(crate) fn draw_pair(first: &mut Deck, second: &mut Deck) -> Option<(Card, Card)> {
    if first.is_empty() || second.is_empty() {
        return None;
    }
    let first_card = first.draw()?;
    let second_card = second.draw()?;
    Some((first_card, second_card))
}

/// Winner of a direct card comparison. Equal values award the round to
/// Player 1; decks honoring the distinct-values assumption never get here
/// with equal cards.
pub(crate) fn higher_card(first: Card, second: Card) -> Player {
    if second.value() > first.value() {
        Player::Two
    } else {
        Player::One
    }
}

/// Winner of a finished game: whoever still holds cards. With both decks
/// empty (a degenerate zero-round game) this resolves to Player 2.
pub(crate) fn standing_player(first: &Deck) -> Player {
    if first.is_empty() {
        Player::Two
    } else {
        Player::One
    }
}
