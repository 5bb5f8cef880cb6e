// SPDX-License-Identifier: Apache-2.0

//! Card strings parsing.
use thiserror::Error;

use headsup_sim::{Card, Rank, Suit};

/// Card parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    /// The string is too short to name a card.
    #[error("card {0:?} must have a rank and a suit, e.g. AS or TH")]
    Malformed(String),
    /// The rank character is not recognized.
    #[error("invalid card rank {0:?}")]
    InvalidRank(char),
    /// The suit character is not recognized.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
}

/// Parses a card string like `"AS"` or `"th"`.
///
/// The rank is the first character, `2..9`, `T` (or `1` as in `"10H"`), `J`,
/// `Q`, `K`, `A`; the suit is the last character, one of `CDHS`. Both are
/// case-insensitive.
pub fn parse_card(s: &str) -> Result<Card, ParseCardError> {
    let (rank_char, suit_char) = match (s.chars().next(), s.chars().next_back()) {
        (Some(r), Some(u)) if s.chars().count() >= 2 => (r, u),
        _ => return Err(ParseCardError::Malformed(s.to_string())),
    };

    let rank = match rank_char.to_ascii_uppercase() {
        'A' => Rank::Ace,
        'K' => Rank::King,
        'Q' => Rank::Queen,
        'J' => Rank::Jack,
        'T' | '1' => Rank::Ten,
        '2' => Rank::Deuce,
        '3' => Rank::Trey,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        c => return Err(ParseCardError::InvalidRank(c)),
    };

    let suit = match suit_char.to_ascii_uppercase() {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        c => return Err(ParseCardError::InvalidSuit(c)),
    };

    Ok(Card::new(rank, suit))
}

/// Parses a whitespace separated list of exactly `count` cards.
pub fn parse_cards(s: &str, count: usize) -> Result<Vec<Card>, ParseCardError> {
    let cards = s
        .split_whitespace()
        .map(parse_card)
        .collect::<Result<Vec<_>, _>>()?;

    if cards.len() != count {
        return Err(ParseCardError::Malformed(s.trim().to_string()));
    }

    Ok(cards)
}
