// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity simulation for Texas Hold'em and Omaha/8.
//!
//! Runs Monte Carlo batches with any mix of fixed board and hero cards,
//! switching to exact enumeration of opponent holdings where that is
//! cheaper:
//!
//! ```
//! use oddsmith_cards::Card;
//! use oddsmith_sim::holdem;
//! use rand::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let board: Vec<Card> = ["KS", "7D", "AH", "8C", "8D"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, _>>()?;
//! let hero: Vec<Card> = ["9D", "7C"].iter().map(|s| s.parse()).collect::<Result<_, _>>()?;
//!
//! // Heads up on a full board every opponent holding is enumerated.
//! let mut rng = StdRng::seed_from_u64(42);
//! let sim = holdem::simulate(&board, &hero, 2, 10_000, &mut rng)?;
//! assert_eq!(sim.hand_count, 990);
//! # Ok(())
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod holdem;
pub mod omaha8;

mod stats;

pub use stats::{HandOutcome, Simulator, pot_odds_break_even};
