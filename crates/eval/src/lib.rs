// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker hand evaluator.
//!
//! The evaluator maps a 7 cards hand to a [HandValue], a totally ordered
//! value made of a [HandRank] category and a tiebreaker sequence, so that
//! comparing two values decides a showdown.
//!
//! ```
//! # use headsup_eval::*;
//! let quads = [
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Nine, Suit::Diamonds),
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Deuce, Suit::Spades),
//! ];
//! let value = HandValue::eval(&quads);
//! assert_eq!(value.rank(), HandRank::FourOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use headsup_cards::{Card, Deck, DeckError, Rank, Suit};
