// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use headsup_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use headsup_cards::{Card, Deck, Rank, Suit};
//! use rand::prelude::*;
//!
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Hearts));
//! deck.shuffle(&mut SmallRng::seed_from_u64(42));
//!
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.count(), 50);
//! ```
//!
//! All randomness goes through an explicit [rand::Rng] handle so that seeded
//! runs are reproducible.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};
