//! Recursive Combat.
//!
//! Rounds work like simple Combat with two changes:
//! - If both players hold at least as many cards as the value they just
//!   drew, the round is decided by a fresh sub-game played on copies of
//!   those card prefixes.
//! - Before each draw the full deck-pair configuration is checked against
//!   everything seen earlier in the same game; a repeat ends the game
//!   instantly in Player 1's favor.
//!
//! Every game - top-level or sub-game - owns its own configuration set.
//! Sub-games also cannot collide with their parents in the first place: a
//! sub-game is dealt at most the parent's total minus the two drawn cards,
//! and configurations compare full deck contents.

use rustc_hash::FxHashSet;

use crate::core::{Deck, Player};

use super::{draw_pair, higher_card, standing_player, GameResult};

/// A deck-pair configuration, recorded at the start of each round.
type Snapshot = (Deck, Deck);

/// Play a game of Recursive Combat to completion.
///
/// Always terminates: the repeat rule bounds any single game to the number
/// of distinct deck-pair configurations, and recursion depth is bounded by
/// the total card count because each sub-game is dealt strictly fewer
/// cards than its parent.
///
/// On a repeat-triggered win both decks are returned exactly as they stood
/// at the start of the detected round, so the losing deck may be non-empty;
/// cards are conserved either way.
pub fn recursive_combat(first: Deck, second: Deck) -> GameResult {
    play_game(first, second, 1)
}

fn play_game(mut first: Deck, mut second: Deck, depth: u32) -> GameResult {
    // Owned by this invocation alone. Sub-games build their own set, and
    // nothing carries over between invocations.
    let mut seen: FxHashSet<Snapshot> = FxHashSet::default();
    let mut rounds = 0u32;

    while !first.is_empty() && !second.is_empty() {
        if !seen.insert((first.clone(), second.clone())) {
            log::debug!(
                "[combat] game at depth {}: configuration repeated after {} rounds, {} wins",
                depth,
                rounds,
                Player::One,
            );
            return GameResult {
                winner: Player::One,
                first,
                second,
                rounds,
            };
        }

        let Some((first_card, second_card)) = draw_pair(&mut first, &mut second) else {
            break;
        };

        let round_winner = if first.len() >= first_card.value() as usize
            && second.len() >= second_card.value() as usize
        {
            let sub = play_game(
                first.copy_top(first_card.value() as usize),
                second.copy_top(second_card.value() as usize),
                depth + 1,
            );
            sub.winner
        } else {
            higher_card(first_card, second_card)
        };

        log::trace!(
            "[combat] game at depth {}, round {}: {} plays {}, {} plays {} - {} takes the round",
            depth,
            rounds + 1,
            Player::One,
            first_card,
            Player::Two,
            second_card,
            round_winner,
        );

        match round_winner {
            Player::One => first.capture(first_card, second_card),
            Player::Two => second.capture(second_card, first_card),
        }
        rounds += 1;
    }

    let winner = standing_player(&first);
    log::debug!(
        "[combat] game at depth {}: over after {} rounds, {} wins",
        depth,
        rounds,
        winner,
    );

    GameResult {
        winner,
        first,
        second,
        rounds,
    }
}
