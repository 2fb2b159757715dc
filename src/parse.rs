//! Parsing the two-deck starting input.
//!
//! The expected format is two blank-line-separated sections, each a
//! `Player N:` header followed by one card value per line, top of the deck
//! first:
//!
//! ```text
//! Player 1:
//! 9
//! 2
//!
//! Player 2:
//! 5
//! 8
//! ```
//!
//! The parser validates what the engine assumes: every card value must be a
//! positive integer. Distinctness is not checked here.

use thiserror::Error;

use crate::core::{Card, Deck};

/// Errors for malformed deck input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not split into exactly two sections.
    #[error("expected 2 deck sections, found {0}")]
    SectionCount(usize),

    /// A section did not open with the expected `Player N:` header.
    #[error("expected header \"{expected}\", found \"{found}\"")]
    Header {
        /// The header that should open this section.
        expected: String,
        /// What the section actually opened with.
        found: String,
    },

    /// A card line was not an integer.
    #[error("invalid card value \"{0}\"")]
    InvalidCard(String),

    /// Card values must be at least 1.
    #[error("card value 0 is not allowed")]
    ZeroCard,
}

/// Parse a two-deck input block into Player 1's and Player 2's decks.
///
/// Either deck may be empty (a header with no card lines).
pub fn decks(input: &str) -> Result<(Deck, Deck), ParseError> {
    let mut sections: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }

    if sections.len() != 2 {
        return Err(ParseError::SectionCount(sections.len()));
    }

    let first = section(&sections[0], 1)?;
    let second = section(&sections[1], 2)?;
    Ok((first, second))
}

fn section(lines: &[&str], player: u8) -> Result<Deck, ParseError> {
    let expected = format!("Player {}:", player);
    let Some((header, cards)) = lines.split_first() else {
        return Err(ParseError::Header {
            expected,
            found: String::new(),
        });
    };
    if *header != expected {
        return Err(ParseError::Header {
            expected,
            found: (*header).to_string(),
        });
    }

    cards
        .iter()
        .map(|line| {
            let value: u32 = line
                .parse()
                .map_err(|_| ParseError::InvalidCard((*line).to_string()))?;
            if value == 0 {
                return Err(ParseError::ZeroCard);
            }
            Ok(Card::new(value))
        })
        .collect()
}
