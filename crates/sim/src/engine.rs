// SPDX-License-Identifier: Apache-2.0

//! Monte-Carlo equity estimation.
use log::debug;
use rand::prelude::*;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

use headsup_cards::{Card, Deck, DeckError, Rank, Suit};
use headsup_eval::HandValue;

use crate::decision::{Decision, decide_stats};

/// The number of community cards on a full board.
const BOARD_SIZE: usize = 5;

/// Simulation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// The known hand has an invalid number of community cards.
    #[error("{0} community cards, a hand has 0, 3, 4, or 5")]
    InvalidCommunityCount(usize),
    /// The same card appears twice in the known hand.
    #[error("duplicate card {0} in known hand")]
    DuplicateCard(Card),
    /// A deck invariant was violated, aborts the estimation call.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// The cards known to the player: two hole cards plus the community cards
/// revealed so far.
#[derive(Debug, Clone)]
pub struct KnownHand {
    hole: [Card; 2],
    community: Vec<Card>,
}

impl KnownHand {
    /// Creates a known hand, checking that the community cards count matches
    /// a street (0, 3, 4, or 5) and that no card appears twice.
    pub fn new(hole: [Card; 2], community: &[Card]) -> Result<Self, SimError> {
        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(SimError::InvalidCommunityCount(community.len()));
        }

        let cards = hole.iter().chain(community).collect::<Vec<_>>();
        for (pos, &card) in cards.iter().enumerate() {
            if cards[pos + 1..].contains(&card) {
                return Err(SimError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            hole,
            community: community.to_vec(),
        })
    }

    /// The player's hole cards.
    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    /// The known community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hole.iter().chain(&self.community).copied()
    }
}

/// Win and trial counters for one estimation call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimStats {
    trials: u64,
    wins: u64,
}

impl SimStats {
    fn record(&mut self, won: bool) {
        self.trials += 1;
        if won {
            self.wins += 1;
        }
    }

    fn merge(self, other: SimStats) -> SimStats {
        SimStats {
            trials: self.trials + other.trials,
            wins: self.wins + other.wins,
        }
    }

    /// Trials run.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Winning trials.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// The estimated win probability, 0 when no trial completed.
    pub fn win_probability(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Wall-clock budget for one estimation call.
    pub time_budget: Duration,
    /// Win probability required to stay in the hand.
    pub threshold: f64,
    /// Number of simulation worker threads.
    pub num_tasks: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(10),
            threshold: 0.5,
            num_tasks: 4,
        }
    }
}

/// The result of one estimation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// The estimated win probability in `[0, 1]`.
    pub win_probability: f64,
    /// Stay or fold, undecided when no trial completed within the budget.
    pub decision: Decision,
    /// The number of trials run.
    pub trials: u64,
}

/// Runs trials for a known hand until the configured time budget expires and
/// derives a decision from the accumulated counts.
pub fn estimate(known: &KnownHand, config: &SimConfig) -> Result<Estimate, SimError> {
    let sim = Simulator::new(known.clone());
    let stats = sim.run_for(config.time_budget, config.num_tasks)?;

    Ok(Estimate {
        win_probability: stats.win_probability(),
        decision: decide_stats(&stats, config.threshold),
        trials: stats.trials(),
    })
}

/// Heads-up equity simulator.
///
/// Each trial builds a fresh deck with the known cards removed, deals a
/// random opponent hand, completes the board, and evaluates both 7 cards
/// hands. A trial counts as a win only when the player's hand strictly beats
/// the opponent's, ties count as non-wins.
#[derive(Debug, Clone)]
pub struct Simulator {
    known: KnownHand,
}

impl Simulator {
    /// Creates a simulator for a known hand.
    pub fn new(known: KnownHand) -> Self {
        Self { known }
    }

    /// Runs trials on `num_tasks` worker threads until the budget expires.
    ///
    /// Each worker keeps local counters and its own generator, the counters
    /// are reduced once after all workers stop. Workers stop launching
    /// trials when the deadline passes, an in-flight trial runs to
    /// completion.
    pub fn run_for(&self, budget: Duration, num_tasks: usize) -> Result<SimStats, SimError> {
        assert!(num_tasks > 0);

        let deadline = Instant::now() + budget;

        let stats = thread::scope(|s| {
            let handles = (0..num_tasks)
                .map(|_| {
                    s.spawn(move || {
                        let mut rng = SmallRng::from_os_rng();
                        let mut stats = SimStats::default();

                        while Instant::now() < deadline {
                            stats.record(self.run_trial(&mut rng)?);
                        }

                        Ok::<_, DeckError>(stats)
                    })
                })
                .collect::<Vec<_>>();

            let mut total = SimStats::default();
            for handle in handles {
                match handle.join() {
                    Ok(stats) => total = total.merge(stats?),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }

            Ok::<_, DeckError>(total)
        })?;

        debug!(
            "simulated {} trials, {} wins, p={:.4}",
            stats.trials(),
            stats.wins(),
            stats.win_probability()
        );

        Ok(stats)
    }

    /// Runs a fixed number of trials on the given generator.
    ///
    /// A single sequential stream, so a seeded generator makes the run
    /// reproducible.
    pub fn run_trials<R: Rng>(&self, trials: u64, rng: &mut R) -> Result<SimStats, SimError> {
        let mut stats = SimStats::default();
        for _ in 0..trials {
            stats.record(self.run_trial(rng)?);
        }

        Ok(stats)
    }

    /// Runs one trial, true when the player wins the showdown.
    fn run_trial<R: Rng>(&self, rng: &mut R) -> Result<bool, DeckError> {
        let mut deck = Deck::default();
        for card in self.known.cards() {
            deck.remove(card);
        }
        deck.shuffle(rng);

        let opponent_hole = [deck.deal()?, deck.deal()?];

        let community = self.known.community();
        let mut board = [Card::new(Rank::Ace, Suit::Spades); BOARD_SIZE];
        board[..community.len()].copy_from_slice(community);
        for slot in board.iter_mut().skip(community.len()) {
            *slot = deck.deal()?;
        }

        let mut hand = [Card::new(Rank::Ace, Suit::Spades); 7];
        hand[2..].copy_from_slice(&board);

        hand[..2].copy_from_slice(self.known.hole());
        let player = HandValue::eval(&hand);

        hand[..2].copy_from_slice(&opponent_hole);
        let opponent = HandValue::eval(&hand);

        Ok(player > opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Decision;

    use Rank::*;
    use Suit::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn known_hand_validation() {
        let hole = [card(Ace, Spades), card(Ace, Hearts)];

        assert!(KnownHand::new(hole, &[]).is_ok());
        assert!(
            KnownHand::new(hole, &[card(Deuce, Clubs), card(Trey, Clubs), card(Four, Clubs)])
                .is_ok()
        );

        let err = KnownHand::new(hole, &[card(Deuce, Clubs)]).unwrap_err();
        assert_eq!(err, SimError::InvalidCommunityCount(1));

        let err = KnownHand::new(
            hole,
            &[card(Ace, Spades), card(Trey, Clubs), card(Four, Clubs)],
        )
        .unwrap_err();
        assert_eq!(err, SimError::DuplicateCard(card(Ace, Spades)));

        let err = KnownHand::new([card(Ace, Spades), card(Ace, Spades)], &[]).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard(card(Ace, Spades)));
    }

    #[test]
    fn pocket_aces_preflop_equity() {
        let known = KnownHand::new([card(Ace, Spades), card(Ace, Hearts)], &[]).unwrap();
        let sim = Simulator::new(known);

        let mut rng = SmallRng::seed_from_u64(1234);
        let stats = sim.run_trials(50_000, &mut rng).unwrap();

        // Pocket aces against a random hand win about 85% of heads-up
        // showdowns; ties count as non-wins.
        let p = stats.win_probability();
        assert!((0.83..0.87).contains(&p), "p={p}");
    }

    #[test]
    fn locked_board_always_wins() {
        // The player holds a royal flush, no opponent hand can tie it.
        let known = KnownHand::new(
            [card(Ace, Spades), card(King, Spades)],
            &[card(Queen, Spades), card(Jack, Spades), card(Ten, Spades)],
        )
        .unwrap();
        let sim = Simulator::new(known);

        let mut rng = SmallRng::seed_from_u64(42);
        let stats = sim.run_trials(2_000, &mut rng).unwrap();
        assert_eq!(stats.wins(), stats.trials());
        assert_eq!(stats.win_probability(), 1.0);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let known = KnownHand::new([card(Ten, Clubs), card(Nine, Clubs)], &[]).unwrap();
        let sim = Simulator::new(known);

        let a = sim
            .run_trials(1_000, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        let b = sim
            .run_trials(1_000, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_budget_returns_promptly() {
        let known = KnownHand::new([card(Ace, Spades), card(Ace, Hearts)], &[]).unwrap();

        let config = SimConfig {
            time_budget: Duration::ZERO,
            ..SimConfig::default()
        };

        let started = Instant::now();
        let estimate = estimate(&known, &config).unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));

        assert_eq!(estimate.trials, 0);
        assert_eq!(estimate.win_probability, 0.0);
        assert_eq!(estimate.decision, Decision::Undecided);
    }

    #[test]
    fn budget_runs_trials() {
        let known = KnownHand::new([card(Ace, Spades), card(Ace, Hearts)], &[]).unwrap();
        let sim = Simulator::new(known);

        let stats = sim.run_for(Duration::from_millis(50), 2).unwrap();
        assert!(stats.trials() > 0);
        assert!(stats.wins() <= stats.trials());
    }

    #[test]
    fn full_board_estimation() {
        // All five community cards known, only the opponent hand varies.
        let known = KnownHand::new(
            [card(Ace, Spades), card(Ace, Hearts)],
            &[
                card(Ace, Clubs),
                card(Ace, Diamonds),
                card(King, Spades),
                card(Seven, Hearts),
                card(Deuce, Clubs),
            ],
        )
        .unwrap();
        let sim = Simulator::new(known);

        // Quad aces with a king kicker on the board, unbeatable.
        let mut rng = SmallRng::seed_from_u64(9);
        let stats = sim.run_trials(500, &mut rng).unwrap();
        assert_eq!(stats.wins(), stats.trials());
    }
}
