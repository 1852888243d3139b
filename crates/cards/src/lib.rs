// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use oddsmith_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! cards parse from the standard short notation, with `10` spelled out:
//!
//! ```
//! # use oddsmith_cards::{Card, Rank, Suit};
//! let ts = "10S".parse::<Card>().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! assert!("XS".parse::<Card>().is_err());
//! ```
//!
//! a [Pack] holds all 52 cards and supports plain and fixed shuffles, the
//! latter pins a board and a hero hand in place while randomizing the rest:
//!
//! ```
//! # use oddsmith_cards::{Card, Pack};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let board = ["2H", "QS", "6D"].map(|s| s.parse::<Card>().unwrap());
//! let hero = ["10S", "JS"].map(|s| s.parse::<Card>().unwrap());
//!
//! let mut pack = Pack::default();
//! pack.shuffle_fixing(&board, &hero, &mut rng).unwrap();
//! assert_eq!(&pack.cards()[..3], &board);
//! assert_eq!(&pack.cards()[5..7], &hero);
//! ```
//!
//! and [combinations] enumerates every k-cards subset in a stable
//! colexicographic order:
//!
//! ```
//! # use oddsmith_cards::{Pack, combinations};
//! let cards = Pack::default().cards().to_vec();
//! assert_eq!(combinations(&cards, 2).len(), 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod combos;
mod pack;

pub use cards::{Card, Rank, Suit, sort_cards};
pub use combos::{choose, combinations};
pub use pack::Pack;
