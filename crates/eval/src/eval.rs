// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator works on aggregate rank and suit counts over the whole 7
//! cards hand rather than enumerating the 21 possible 5 cards subsets, the
//! two approaches pick the same best hand.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use headsup_cards::{Card, Deck, Rank, Suit};

/// Hand categories from the weakest to the strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No other category, ranked by the five highest cards.
    HighCard = 0,
    /// Two cards of one rank.
    Pair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Ten to ace of one suit.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of an evaluated hand.
///
/// A value is a [HandRank] category plus a sequence of tiebreaker rank
/// values, most significant first. Values order by category first, then by
/// the first differing tiebreaker; equal sequences compare as a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreakers: [u8; 5],
    count: u8,
}

impl HandValue {
    fn new(rank: HandRank, ranks: &[u8]) -> Self {
        let mut tiebreakers = [0u8; 5];
        tiebreakers[..ranks.len()].copy_from_slice(ranks);

        Self {
            rank,
            tiebreakers,
            count: ranks.len() as u8,
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreaker rank values, most significant first.
    pub fn tiebreakers(&self) -> &[u8] {
        &self.tiebreakers[..self.count as usize]
    }

    /// Evaluates a complete 7 cards hand.
    ///
    /// The result is deterministic, calling this twice on the same cards
    /// yields identical values.
    ///
    /// Panics if the hand doesn't have exactly 7 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert_eq!(cards.len(), 7, "evaluation requires a 7 cards hand");

        // Rank counts indexed by rank value 2..=14, suit counts by suit.
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for card in cards {
            rank_counts[card.rank().value() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let flush_suit = Suit::suits().find(|&s| suit_counts[s as usize] >= 5);

        // Ranks of the flush suit, descending, distinct by construction.
        let flush_ranks = flush_suit
            .map(|suit| {
                let mut ranks = cards
                    .iter()
                    .filter(|c| c.suit() == suit)
                    .map(|c| c.rank().value())
                    .collect::<Vec<_>>();
                ranks.sort_unstable_by(|a, b| b.cmp(a));
                ranks
            })
            .unwrap_or_default();

        let straight = straight_high(|r| rank_counts[r as usize] > 0);
        let sf_high = straight_high_in(&flush_ranks);

        // Group ranks by count, descending within each group.
        let mut quads = Vec::new();
        let mut trips = Vec::new();
        let mut pairs = Vec::new();
        let mut singles = Vec::new();
        for r in (2..=14u8).rev() {
            match rank_counts[r as usize] {
                4 => quads.push(r),
                3 => trips.push(r),
                2 => pairs.push(r),
                1 => singles.push(r),
                _ => {}
            }
        }

        if sf_high == Some(14) {
            HandValue::new(HandRank::RoyalFlush, &[14])
        } else if let Some(high) = sf_high {
            HandValue::new(HandRank::StraightFlush, &[high])
        } else if let Some(&quad) = quads.first() {
            // The kicker may come from a paired rank, three non-quad cards
            // always remain in a 7 cards hand.
            let kicker = (2..=14u8)
                .rev()
                .find(|&r| rank_counts[r as usize] > 0 && r != quad)
                .expect("a 7 cards hand has a non-quad rank");
            HandValue::new(HandRank::FourOfAKind, &[quad, kicker])
        } else if !trips.is_empty() && (!pairs.is_empty() || trips.len() > 1) {
            // A second trip fills the house only when there is no pair.
            let pair = pairs.first().copied().unwrap_or_else(|| trips[1]);
            HandValue::new(HandRank::FullHouse, &[trips[0], pair])
        } else if !flush_ranks.is_empty() {
            HandValue::new(HandRank::Flush, &flush_ranks[..5])
        } else if let Some(high) = straight {
            HandValue::new(HandRank::Straight, &[high])
        } else if let Some(&trip) = trips.first() {
            HandValue::new(
                HandRank::ThreeOfAKind,
                &[trip, singles[0], singles[1]],
            )
        } else if pairs.len() >= 2 {
            HandValue::new(HandRank::TwoPair, &[pairs[0], pairs[1], singles[0]])
        } else if let Some(&pair) = pairs.first() {
            HandValue::new(
                HandRank::Pair,
                &[pair, singles[0], singles[1], singles[2]],
            )
        } else {
            HandValue::new(HandRank::HighCard, &singles[..5])
        }
    }

    /// Evaluates a partial hand of up to 7 cards.
    ///
    /// The hand is completed to 7 cards by dealing from the remaining deck
    /// shuffled with the given generator, so the result is random for
    /// anything short of a full hand.
    pub fn eval_partial<R: Rng>(cards: &[Card], rng: &mut R) -> HandValue {
        assert!(cards.len() <= 7, "a hand has at most 7 cards");

        if cards.len() == 7 {
            return Self::eval(cards);
        }

        let mut deck = Deck::default();
        for &card in cards {
            deck.remove(card);
        }
        deck.shuffle(rng);

        let mut hand = cards.to_vec();
        while hand.len() < 7 {
            // The deck holds at least 45 cards at this point.
            hand.push(deck.deal().expect("deck holds enough cards"));
        }

        Self::eval(&hand)
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreakers().cmp(other.tiebreakers()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the high card of the best straight over the given rank presence,
/// scanning the highest window first so the wheel A-2-3-4-5, reported with
/// high card 5, only wins when no higher straight exists.
fn straight_high(present: impl Fn(u8) -> bool) -> Option<u8> {
    for high in (6..=14u8).rev() {
        if (high - 4..=high).all(&present) {
            return Some(high);
        }
    }

    if present(14) && (2..=5u8).all(&present) {
        return Some(5);
    }

    None
}

/// Straight detection restricted to the flush suit ranks.
fn straight_high_in(flush_ranks: &[u8]) -> Option<u8> {
    if flush_ranks.len() < 5 {
        return None;
    }

    straight_high(|r| flush_ranks.contains(&r))
}
