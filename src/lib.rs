//! # combat-engine
//!
//! A two-player card game engine for Combat and Recursive Combat.
//!
//! ## Design Principles
//!
//! 1. **Pure computation**: games are functions from two starting decks to
//!    a [`GameResult`]. No I/O, no clocks, no randomness: a deal fully
//!    determines its game.
//!
//! 2. **Cards are conserved**: rounds only move cards between the two
//!    decks. This holds even when the recursive variant's repeat rule ends
//!    a game early; the decks come back exactly as they stood.
//!
//! 3. **Persistent decks**: decks are backed by `im::Vector`, so the
//!    per-round configuration snapshots and sub-game deals the recursive
//!    variant makes are cheap structural-sharing clones.
//!
//! ## Modules
//!
//! - `core`: cards, decks, players
//! - `game`: the two game variants and their shared result type
//! - `parse`: the `Player N:` text-block input format
//!
//! ## Example
//!
//! ```
//! use combat_engine::{recursive_combat, Deck, Player};
//!
//! let first = Deck::from_values([9, 2, 6, 3, 1]);
//! let second = Deck::from_values([5, 8, 4, 7, 10]);
//!
//! let result = recursive_combat(first, second);
//! assert_eq!(result.winner, Player::Two);
//! assert_eq!(result.score(), 291);
//! ```

pub mod core;
pub mod game;
pub mod parse;

// Re-export commonly used types
pub use crate::core::{Card, Deck, Player};
pub use crate::game::{play, recursive_combat, GameResult};
pub use crate::parse::ParseError;
