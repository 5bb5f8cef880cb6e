// SPDX-License-Identifier: Apache-2.0

//! Headsup equity bot CLI.
//!
//! Interactive loop over the streets of one hand: reads the bot's hole
//! cards and the community cards as they are revealed, estimates the win
//! probability for each street, and prints a stay or fold decision.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use headsup_sim::{Card, KnownHand, SimConfig, estimate};

mod parse;

/// The streets of a hand with their community cards count.
const STREETS: &[(&str, usize)] = &[("Pre-Flop", 0), ("Flop", 3), ("Turn", 4), ("River", 5)];

#[derive(Debug, Parser)]
struct Cli {
    /// Time budget for each estimation in milliseconds.
    #[clap(long, short, default_value_t = 10_000)]
    budget_ms: u64,
    /// Win probability required to stay in the hand.
    #[clap(long, short, default_value_t = 0.5)]
    threshold: f64,
    /// Number of simulation worker threads.
    #[clap(long, short = 'j', default_value_t = 4)]
    tasks: usize,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if cli.budget_ms == 0 {
        bail!("time budget must be greater than zero");
    }
    if !(0.0..=1.0).contains(&cli.threshold) {
        bail!("threshold must be in [0, 1]");
    }
    if cli.tasks == 0 {
        bail!("at least one worker task is required");
    }

    let config = SimConfig {
        time_budget: Duration::from_millis(cli.budget_ms),
        threshold: cli.threshold,
        num_tasks: cli.tasks,
    };

    println!("Headsup Poker Bot");
    println!("-----------------");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let cards = prompt_cards(
        &mut input,
        "Enter your two hole cards (e.g. AS KH): ",
        2,
        &[],
    )?;
    let hole = [cards[0], cards[1]];
    let mut community: Vec<Card> = Vec::with_capacity(5);

    for &(street, count) in STREETS {
        if community.len() < count {
            let prompt = match count {
                3 => "Enter the three flop cards (e.g. 2C 7H QS): ",
                4 => "Enter the turn card (e.g. 5D): ",
                _ => "Enter the river card (e.g. 9C): ",
            };

            let mut used = hole.to_vec();
            used.extend_from_slice(&community);
            let cards = prompt_cards(&mut input, prompt, count - community.len(), &used)?;
            community.extend(cards);
        }

        println!();
        println!("{street}");
        print!("Hole cards: {} {}", hole[0], hole[1]);
        if !community.is_empty() {
            print!("  Community:");
            for card in &community {
                print!(" {card}");
            }
        }
        println!();

        println!(
            "Running simulations ({:.1} seconds)...",
            config.time_budget.as_secs_f64()
        );

        let known = KnownHand::new(hole, &community)?;
        let result = estimate(&known, &config)?;

        println!("Simulations run: {}", result.trials);
        println!("Win probability: {:.2}%", result.win_probability * 100.0);
        println!("Decision: {}", result.decision);

        if count < 5 && !prompt_continue(&mut input)? {
            break;
        }
    }

    println!("Game complete.");
    Ok(())
}

/// Prompts for a list of cards until the input parses and names cards not
/// already in play.
fn prompt_cards<R: BufRead>(
    input: &mut R,
    prompt: &str,
    count: usize,
    used: &[Card],
) -> Result<Vec<Card>> {
    'prompt: loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }

        match parse::parse_cards(&line, count) {
            Ok(cards) => {
                let mut seen = used.to_vec();
                for &card in &cards {
                    if seen.contains(&card) {
                        eprintln!("Error: card {card} is already in play");
                        continue 'prompt;
                    }
                    seen.push(card);
                }

                return Ok(cards);
            }
            Err(err) => eprintln!("Error: {err}"),
        }
    }
}

/// Asks whether to continue to the next street.
fn prompt_continue<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("Continue to next street? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    Ok(matches!(line.trim(), "y" | "Y"))
}
