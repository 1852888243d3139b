// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection for Hold'em and Omaha/8.
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use oddsmith_cards::{Card, Rank, combinations};

use crate::classify::{classify, classify_ace_to_five_low};
use crate::level::{HandClass, HandLevel, beats, beats_ace_to_five_low};

/// Picks the strongest five cards hand from the given cards.
///
/// Every mandatory card is used, the rest of the hand comes from the
/// optional cards. Returns the winning level with the five cards that
/// realise it, ties keep the first candidate in enumeration order.
pub fn best_hand(mandatory: &[Card], optional: &[Card]) -> Result<(HandLevel, Vec<Card>)> {
    if mandatory.len() > 5 {
        bail!("Too many mandatory cards, found {}", mandatory.len());
    }

    let need = 5 - mandatory.len();
    if optional.len() < need {
        bail!(
            "Not enough cards for a five cards hand, found {}",
            mandatory.len() + optional.len()
        );
    }

    let mut best: Option<(HandLevel, Vec<Card>)> = None;
    for combo in combinations(optional, need) {
        let hand = mandatory.iter().chain(&combo).copied().collect::<Vec<_>>();
        let level = classify(&hand)?;
        if best.as_ref().is_none_or(|(top, _)| beats(&level, top)) {
            best = Some((level, hand));
        }
    }

    // The length checks guarantee at least one candidate.
    best.ok_or_else(|| anyhow!("No candidate hands"))
}

/// Picks the best Hold'em hand, any five out of the board and hole cards.
pub fn holdem_level(board: &[Card], hole: &[Card]) -> Result<(HandLevel, Vec<Card>)> {
    let cards = hole.iter().chain(board).copied().collect::<Vec<_>>();
    best_hand(&[], &cards)
}

/// The two-way strength of an Omaha/8 hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Omaha8Level {
    /// The best high hand level.
    pub high_level: HandLevel,
    /// The five cards realising the best high hand.
    pub high_cards: Vec<Card>,
    /// The best ace-to-five low level.
    pub low_level: HandLevel,
    /// The five cards realising the best low hand.
    pub low_cards: Vec<Card>,
    /// True when the low hand is an eight-or-better and can win the low
    /// half of the pot.
    pub low_qualifies: bool,
}

/// Picks the best Omaha/8 high and low hands.
///
/// Every candidate hand takes exactly three cards from the board and two
/// from the four hole cards. The high and low sides are selected
/// independently, possibly from different candidates. The low side only
/// qualifies for half the pot when it is an unpaired eight-high or better.
pub fn omaha8_level(board: &[Card], hole: &[Card]) -> Result<Omaha8Level> {
    if board.len() != 5 || hole.len() != 4 {
        bail!(
            "Omaha/8 takes 5 board cards and 4 hole cards, found {} and {}",
            board.len(),
            hole.len()
        );
    }

    let mut best: Option<(HandLevel, Vec<Card>, HandLevel, Vec<Card>)> = None;
    for from_board in combinations(board, 3) {
        for from_hole in combinations(hole, 2) {
            let hand = from_board.iter().chain(&from_hole).copied().collect::<Vec<_>>();
            let high = classify(&hand)?;
            let low = classify_ace_to_five_low(&hand)?;

            match &mut best {
                None => best = Some((high, hand.clone(), low, hand)),
                Some((best_high, high_cards, best_low, low_cards)) => {
                    if beats(&high, best_high) {
                        *best_high = high;
                        *high_cards = hand.clone();
                    }
                    if beats_ace_to_five_low(&low, best_low) {
                        *best_low = low;
                        *low_cards = hand;
                    }
                }
            }
        }
    }

    let (high_level, high_cards, low_level, low_cards) =
        best.ok_or_else(|| anyhow!("No candidate hands"))?;
    let low_qualifies = low_level.class == HandClass::HighCard
        && low_level
            .tiebreaks
            .first()
            .is_some_and(|r| r.less_than(Rank::Nine, true));

    Ok(Omaha8Level {
        high_level,
        high_cards,
        low_level,
        low_cards,
        low_qualifies,
    })
}
