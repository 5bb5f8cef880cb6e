// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker equity simulation engine.
//!
//! Given a player's two hole cards and the community cards revealed so far,
//! the engine estimates the probability of winning a heads-up showdown
//! against one opponent holding random cards, by repeatedly completing the
//! unknown cards at random and evaluating both hands:
//!
//! ```
//! # use headsup_sim::*;
//! # fn main() -> Result<(), SimError> {
//! let hand = KnownHand::new(
//!     [
//!         Card::new(Rank::Ace, Suit::Spades),
//!         Card::new(Rank::Ace, Suit::Hearts),
//!     ],
//!     &[],
//! )?;
//!
//! let config = SimConfig {
//!     time_budget: std::time::Duration::from_millis(200),
//!     ..SimConfig::default()
//! };
//! let estimate = estimate(&hand, &config)?;
//! assert!(estimate.win_probability > 0.8);
//! # Ok(())
//! # }
//! ```
//!
//! Trials are independent and run on a pool of worker threads until a
//! wall-clock budget expires; the estimate is turned into a stay or fold
//! decision against a configured probability threshold.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod decision;
mod engine;

pub use decision::{Decision, decide, decide_stats};
pub use engine::{Estimate, KnownHand, SimConfig, SimError, SimStats, Simulator, estimate};

// Reexport cards and evaluator types.
pub use headsup_eval::{Card, Deck, DeckError, HandRank, HandValue, Rank, Suit};
