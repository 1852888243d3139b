// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker hand classifier.
//!
//! This crate classifies five cards hands into a [HandLevel], a hand class
//! plus the tiebreak ranks that decide between hands of the same class:
//!
//! ```
//! # use oddsmith_eval::*;
//! # use oddsmith_cards::{Card, Rank};
//! let cards = ["10S", "JS", "QS", "KS", "AS"].map(|s| s.parse::<Card>().unwrap());
//! let level = classify(&cards).unwrap();
//! assert_eq!(level.class, HandClass::StraightFlush);
//! assert_eq!(level.tiebreaks, [Rank::Ace]);
//! ```
//!
//! [best_hand] picks the strongest five cards hand out of a larger set, and
//! the game specific selectors [holdem_level] and [omaha8_level] apply the
//! Hold'em and Omaha composition rules. The ace-to-five low system used for
//! the low half of Omaha/8 pots is covered by [classify_ace_to_five_low] and
//! [beats_ace_to_five_low].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best;
mod classify;
mod level;

pub use best::{Omaha8Level, best_hand, holdem_level, omaha8_level};
pub use classify::{classify, classify_ace_to_five_low};
pub use level::{HandClass, HandLevel, beats, beats_ace_to_five_low};
