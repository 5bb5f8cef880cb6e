// SPDX-License-Identifier: Apache-2.0

//! Stay or fold decision.
use std::fmt;

use crate::engine::SimStats;

/// The verdict for the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Stay in the hand.
    Stay,
    /// Fold the hand.
    Fold,
    /// No trial completed within the budget, the estimate carries no
    /// information.
    Undecided,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decision = match self {
            Decision::Stay => "STAY",
            Decision::Fold => "FOLD",
            Decision::Undecided => "UNDECIDED",
        };

        write!(f, "{decision}")
    }
}

/// Decides between staying and folding, the threshold is inclusive.
pub fn decide(win_probability: f64, threshold: f64) -> Decision {
    if win_probability >= threshold {
        Decision::Stay
    } else {
        Decision::Fold
    }
}

/// Decides from accumulated counts, undecided when no trial completed.
pub fn decide_stats(stats: &SimStats, threshold: f64) -> Decision {
    if stats.trials() == 0 {
        Decision::Undecided
    } else {
        decide(stats.win_probability(), threshold)
    }
}
