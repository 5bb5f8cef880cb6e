// SPDX-License-Identifier: Apache-2.0
//
// Prints a 13x13 pre-flop win probability chart for every starting hand
// against one random opponent.
//
// ```bash
// $ cargo r --release --example chart
// ```
use clap::Parser;
use std::time::{Duration, Instant};

use headsup_sim::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Simulation budget per starting hand in milliseconds.
    #[clap(long, short, default_value_t = 100)]
    budget_ms: u64,
    /// Number of simulation worker threads.
    #[clap(long, short = 'j', default_value_t = 4)]
    tasks: usize,
}

fn run_sim(c1: Card, c2: Card, budget: Duration, tasks: usize) -> f64 {
    let known = KnownHand::new([c1, c2], &[]).expect("distinct cards");
    let sim = Simulator::new(known);
    let stats = sim.run_for(budget, tasks).expect("valid deck");
    stats.win_probability() * 100.0
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

fn main() {
    let cli = Cli::parse();
    let budget = Duration::from_millis(cli.budget_ms);

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            probs.push(run_sim(c1, c2, budget, cli.tasks));
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
