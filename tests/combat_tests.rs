//! End-to-end games over the full public surface: parse a starting deal,
//! play both variants, score the winner.

use combat_engine::{parse, play, recursive_combat, Deck, Player};

const EXAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

/// Full pipeline for the simple variant: text in, score out.
#[test]
fn test_simple_combat_pipeline() {
    let (first, second) = parse::decks(EXAMPLE).unwrap();
    let result = play(first, second);

    assert_eq!(result.winner, Player::Two);
    assert_eq!(result.rounds, 29);
    assert!(result.first.is_empty());
    assert_eq!(result.second.values(), vec![3, 2, 10, 6, 8, 5, 9, 4, 7, 1]);
    assert_eq!(result.score(), 306);
}

/// Full pipeline for the recursive variant on the same deal.
#[test]
fn test_recursive_combat_pipeline() {
    let (first, second) = parse::decks(EXAMPLE).unwrap();
    let result = recursive_combat(first, second);

    assert_eq!(result.winner, Player::Two);
    assert!(result.is_winner(Player::Two));
    assert_eq!(result.score(), 291);
}

/// Cards are conserved by both variants on the example deal.
#[test]
fn test_card_conservation() {
    let (first, second) = parse::decks(EXAMPLE).unwrap();
    let total = first.len() + second.len();

    let simple = play(first.clone(), second.clone());
    assert_eq!(simple.first.len() + simple.second.len(), total);

    let recursive = recursive_combat(first, second);
    assert_eq!(recursive.first.len() + recursive.second.len(), total);
}

/// After a terminating simple game, exactly one deck is empty.
#[test]
fn test_simple_combat_leaves_one_deck_empty() {
    let (first, second) = parse::decks(EXAMPLE).unwrap();
    let result = play(first, second);

    assert_ne!(result.first.is_empty(), result.second.is_empty());
}

/// The repeat rule ends a game that would loop forever, in Player 1's
/// favor, with both decks exactly as they stood at detection.
#[test]
fn test_repeat_rule_game() {
    let first = Deck::from_values([43, 19]);
    let second = Deck::from_values([2, 29, 14]);

    let result = recursive_combat(first, second);

    assert_eq!(result.winner, Player::One);
    assert_eq!(result.first.values(), vec![43, 19]);
    assert_eq!(result.second.values(), vec![2, 29, 14]);
    // The loser keeps cards here; conservation still holds.
    assert_eq!(result.first.len() + result.second.len(), 5);
    assert_eq!(result.score(), 43 * 2 + 19);
}

/// A repeat-rule game followed by an ordinary game: no seen state leaks
/// between invocations.
#[test]
fn test_games_do_not_share_state() {
    let looping = recursive_combat(
        Deck::from_values([43, 19]),
        Deck::from_values([2, 29, 14]),
    );
    assert_eq!(looping.winner, Player::One);

    let (first, second) = parse::decks(EXAMPLE).unwrap();
    let ordinary = recursive_combat(first, second);
    assert_eq!(ordinary.winner, Player::Two);
    assert_eq!(ordinary.score(), 291);
}

/// Engine works for arbitrary distinct positive values, not just 1..N.
#[test]
fn test_non_contiguous_card_values() {
    let result = play(
        Deck::from_values([1000, 7]),
        Deck::from_values([999, 500]),
    );

    assert_eq!(result.winner, Player::One);
    assert_eq!(result.rounds, 4);
    assert_eq!(result.first.values(), vec![1000, 500, 999, 7]);
    assert!(result.second.is_empty());
}
