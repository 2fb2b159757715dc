//! Simple Combat: the non-recursive variant.

use crate::core::{Deck, Player};

use super::{draw_pair, higher_card, standing_player, GameResult};

/// Play a game of Combat to completion.
///
/// Each round both players draw their top card; the higher value wins, and
/// the winner's deck receives the winner's card then the loser's card at
/// the back. The game ends when a deck empties.
///
/// Unlike the recursive variant, nothing guards against repeated
/// configurations: there are deals (even with distinct values) that cycle
/// forever under these rules, and this function will not return for them.
/// Standard deals terminate.
pub fn play(mut first: Deck, mut second: Deck) -> GameResult {
    let mut rounds = 0u32;

    while let Some((first_card, second_card)) = draw_pair(&mut first, &mut second) {
        let round_winner = higher_card(first_card, second_card);
        log::trace!(
            "[combat] round {}: {} plays {}, {} plays {} - {} takes the round",
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
    log::debug!("[combat] game over after {} rounds: {} wins", rounds, winner);

    GameResult {
        winner,
        first,
        second,
        rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let result = play(
            Deck::from_values([9, 2, 6, 3, 1]),
            Deck::from_values([5, 8, 4, 7, 10]),
        );

        assert_eq!(result.winner, Player::Two);
        assert_eq!(result.rounds, 29);
        assert!(result.first.is_empty());
        assert_eq!(result.second.values(), vec![3, 2, 10, 6, 8, 5, 9, 4, 7, 1]);
        assert_eq!(result.score(), 306);
    }

    #[test]
    fn test_empty_first_deck_is_a_zero_round_loss() {
        let result = play(Deck::new(), Deck::from_values([1, 2, 3]));

        assert_eq!(result.winner, Player::Two);
        assert_eq!(result.rounds, 0);
        assert_eq!(result.second.len(), 3);
    }

    #[test]
    fn test_empty_second_deck_is_a_zero_round_loss() {
        let result = play(Deck::from_values([1, 2, 3]), Deck::new());

        assert_eq!(result.winner, Player::One);
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_both_decks_empty() {
        let result = play(Deck::new(), Deck::new());

        assert_eq!(result.winner, Player::Two);
        assert_eq!(result.rounds, 0);
        assert!(result.winning_deck().is_empty());
        assert_eq!(result.score(), 0);
    }

    #[test]
    fn test_single_round_game() {
        let result = play(Deck::from_values([5]), Deck::from_values([3]));

        assert_eq!(result.winner, Player::One);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.first.values(), vec![5, 3]);
        assert!(result.second.is_empty());
    }
}
