//! Core types: cards, decks, players.
//!
//! These are game-variant agnostic; both the simple and the recursive game
//! drive the same `Deck` operations.

pub mod card;
pub mod deck;
pub mod player;

pub use card::Card;
pub use deck::Deck;
pub use player::Player;
