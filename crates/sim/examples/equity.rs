// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line equity calculator.
//!
//! ```bash
//! $ cargo r --release --example equity -- --hero AS,KS --players 6
//! $ cargo r --release --example equity -- --hero 9D,7C --board KS,7D,AH,8C,8D
//! $ cargo r --release --example equity -- --game omaha8 --hero AS,2S,KC,QD
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::prelude::*;

use oddsmith_cards::Card;
use oddsmith_eval::HandClass;
use oddsmith_sim::{Simulator, holdem, omaha8};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Game {
    Holdem,
    Omaha8,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The game to simulate.
    #[clap(long, short, value_enum, default_value_t = Game::Holdem)]
    game: Game,
    /// The hero's hole cards (eg. AS,KS).
    #[clap(long)]
    hero: String,
    /// Known board cards (eg. 2H,7D,JC).
    #[clap(long, default_value = "")]
    board: String,
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=11))]
    players: u8,
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 100_000)]
    hands: usize,
    /// RNG seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the full simulator state as JSON.
    #[clap(long)]
    json: bool,
}

fn parse_cards(text: &str) -> Result<Vec<Card>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',').map(|s| s.parse()).collect()
}

fn print_simulator(sim: &Simulator) {
    let hands = sim.hand_count as f64;
    let pct = |count: usize| 100.0 * count as f64 / hands;

    println!("Played {} hands with {} players", sim.hand_count, sim.players);
    println!(
        "Hero won {} ({:.1}%) taking {:.1} pots ({:.1}%)",
        sim.win_count,
        pct(sim.win_count),
        sim.pots_won,
        100.0 * sim.pots_won / hands,
    );
    println!(
        "Best opponent won {} ({:.1}%), random opponent won {} ({:.1}%)",
        sim.best_opponent_win_count,
        pct(sim.best_opponent_win_count),
        sim.random_opponent_win_count,
        pct(sim.random_opponent_win_count),
    );
    println!("Best hero hand {}", sim.best_hand);
    println!("Best opponent hand {}", sim.best_opp_hand);
    println!("Pot odds break even at {:.2} times the pot", sim.pot_odds_break_even());

    println!();
    println!("{:<16} {:>8} {:>8} {:>8}", "Class", "Made", "Won", "Opp made");
    for class in HandClass::classes().rev() {
        let idx = class as usize;
        println!(
            "{:<16} {:>8} {:>8} {:>8}",
            class.to_string(),
            sim.our_class_counts[idx],
            sim.class_win_counts[idx],
            sim.best_opponent_class_counts[idx],
        );
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let board = parse_cards(&cli.board)?;
    let hero = parse_cards(&cli.hero)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let players = cli.players as usize;
    match cli.game {
        Game::Holdem => {
            let sim = holdem::simulate(&board, &hero, players, cli.hands, &mut rng)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sim)?);
            } else {
                print_simulator(&sim);
            }
        }
        Game::Omaha8 => {
            let sim = omaha8::simulate(&board, &hero, players, cli.hands, &mut rng)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sim)?);
            } else {
                print_simulator(&sim.high);
                println!();
                println!(
                    "Low side won {} ({:.1}%) taking {:.1} pots",
                    sim.low.win_count,
                    100.0 * sim.low.win_count as f64 / sim.high.hand_count as f64,
                    sim.low.pots_won,
                );
                println!(
                    "Combined pot odds break even at {:.2} times the pot",
                    sim.pot_odds_break_even()
                );
            }
        }
    }

    Ok(())
}
