// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classes and hand levels.
use serde::{Deserialize, Serialize};
use std::fmt;

use oddsmith_cards::Rank;

/// The class of a five cards hand.
///
/// The derived [Ord] follows the standard high hand ranking, from
/// [HandClass::HighCard] up to [HandClass::StraightFlush].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandClass {
    /// No pair, hand ranked by its cards alone.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandClass {
    /// The number of hand classes.
    pub const COUNT: usize = 9;

    /// Returns all classes in ascending strength order.
    pub fn classes() -> impl DoubleEndedIterator<Item = HandClass> {
        use HandClass::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self {
            HandClass::HighCard => "High Card",
            HandClass::OnePair => "One Pair",
            HandClass::TwoPair => "Two Pair",
            HandClass::ThreeOfAKind => "Three of a Kind",
            HandClass::Straight => "Straight",
            HandClass::Flush => "Flush",
            HandClass::FullHouse => "Full House",
            HandClass::FourOfAKind => "Four of a Kind",
            HandClass::StraightFlush => "Straight Flush",
        };

        write!(f, "{class}")
    }
}

/// The strength of a classified hand.
///
/// A level is a [HandClass] plus the tiebreak ranks that decide between
/// hands of the same class, most significant first. Each class has its own
/// tiebreak convention, a full house carries `[trips, pair]` while a flush
/// carries all five ranks in descending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandLevel {
    /// The hand class.
    pub class: HandClass,
    /// Ranks deciding ties within the class, most significant first.
    pub tiebreaks: Vec<Rank>,
}

impl HandLevel {
    /// Creates a level from a class and its tiebreaks.
    pub fn new(class: HandClass, tiebreaks: Vec<Rank>) -> Self {
        Self { class, tiebreaks }
    }

    /// The weakest possible level, beaten by every real hand.
    pub fn floor() -> Self {
        Self::new(HandClass::HighCard, vec![Rank::Deuce; 5])
    }
}

impl fmt::Display for HandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.class)?;
        for (i, rank) in self.tiebreaks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}

/// Returns true if `level` beats `other` as a high hand.
///
/// Classes compare first, then the tiebreaks lexicographically with the
/// ace high. Two levels where neither beats the other are a tie and split
/// the pot.
pub fn beats(level: &HandLevel, other: &HandLevel) -> bool {
    if level.class != other.class {
        return level.class > other.class;
    }

    for (a, b) in level.tiebreaks.iter().zip(&other.tiebreaks) {
        if a != b {
            return b.less_than(*a, false);
        }
    }

    false
}

/// Returns true if `level` beats `other` as an ace-to-five low hand.
///
/// The class comparison is inverted, a weaker high class is a better low,
/// and tiebreak ranks compare with the ace low so the lower run of ranks
/// wins.
pub fn beats_ace_to_five_low(level: &HandLevel, other: &HandLevel) -> bool {
    if level.class != other.class {
        return level.class < other.class;
    }

    for (a, b) in level.tiebreaks.iter().zip(&other.tiebreaks) {
        if a != b {
            return a.less_than(*b, true);
        }
    }

    false
}
