// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use anyhow::{Result, anyhow};

use oddsmith_cards::{Card, Rank, sort_cards};

use crate::level::{HandClass, HandLevel};

/// Every run of ranks that makes a straight, highest first.
///
/// The ace-low wheel comes last so a scan picks the strongest straight a
/// hand realises.
const STRAIGHTS: [[Rank; 5]; 10] = {
    use Rank::*;
    [
        [Ace, King, Queen, Jack, Ten],
        [King, Queen, Jack, Ten, Nine],
        [Queen, Jack, Ten, Nine, Eight],
        [Jack, Ten, Nine, Eight, Seven],
        [Ten, Nine, Eight, Seven, Six],
        [Nine, Eight, Seven, Six, Five],
        [Eight, Seven, Six, Five, Four],
        [Seven, Six, Five, Four, Trey],
        [Six, Five, Four, Trey, Deuce],
        [Five, Four, Trey, Deuce, Ace],
    ]
};

/// Classifies a five cards hand as a high hand.
///
/// Returns an error if the slice does not hold exactly five cards.
pub fn classify(cards: &[Card]) -> Result<HandLevel> {
    let mut cards = five(cards)?;
    sort_cards(&mut cards, false);
    let counts = rank_counts(&cards);

    let level = straight_flush(&cards, &counts)
        .or_else(|| four_oak(&cards, &counts))
        .or_else(|| full_house(&counts))
        .or_else(|| flush(&cards))
        .or_else(|| straight(&counts))
        .or_else(|| three_oak(&cards, &counts, false))
        .or_else(|| two_pair(&counts, false))
        .or_else(|| one_pair(&cards, &counts, false))
        .unwrap_or_else(|| high_card(&cards));

    Ok(level)
}

/// Classifies a five cards hand under the ace-to-five low system.
///
/// Straights and flushes are ignored and the ace plays low, so the best
/// possible low is the wheel `5 4 3 2 A`. The resulting levels compare
/// through [beats_ace_to_five_low](crate::beats_ace_to_five_low).
pub fn classify_ace_to_five_low(cards: &[Card]) -> Result<HandLevel> {
    let mut cards = five(cards)?;
    sort_cards(&mut cards, true);
    let counts = rank_counts(&cards);

    let level = four_oak(&cards, &counts)
        .or_else(|| full_house(&counts))
        .or_else(|| three_oak(&cards, &counts, true))
        .or_else(|| two_pair(&counts, true))
        .or_else(|| one_pair(&cards, &counts, true))
        .unwrap_or_else(|| high_card(&cards));

    Ok(level)
}

fn five(cards: &[Card]) -> Result<[Card; 5]> {
    cards
        .try_into()
        .map_err(|_| anyhow!("Expected exactly five cards, found {}", cards.len()))
}

fn rank_counts(cards: &[Card]) -> [u8; Rank::COUNT] {
    let mut counts = [0u8; Rank::COUNT];
    for card in cards {
        counts[card.rank() as usize] += 1;
    }

    counts
}

// Ranks in descending strength for the chosen ordering, the ace moves from
// the front to the back when it plays low.
fn ranks_desc(ace_low: bool) -> impl Iterator<Item = Rank> {
    let mut ranks = Rank::ranks().rev().collect::<Vec<_>>();
    if ace_low {
        ranks.rotate_left(1);
    }

    ranks.into_iter()
}

fn straight_flush(cards: &[Card; 5], counts: &[u8; Rank::COUNT]) -> Option<HandLevel> {
    let suit = cards[0].suit();
    if cards.iter().any(|c| c.suit() != suit) {
        return None;
    }

    STRAIGHTS
        .iter()
        .find(|run| run.iter().all(|r| counts[*r as usize] > 0))
        .map(|run| HandLevel::new(HandClass::StraightFlush, vec![run[0]]))
}

fn four_oak(cards: &[Card; 5], counts: &[u8; Rank::COUNT]) -> Option<HandLevel> {
    let quads = Rank::ranks().find(|r| counts[*r as usize] >= 4)?;

    // The cards are sorted, the odd card is at one end or the other.
    let kicker = if cards[0].rank() == quads {
        cards[4].rank()
    } else {
        cards[0].rank()
    };

    Some(HandLevel::new(HandClass::FourOfAKind, vec![quads, kicker]))
}

fn full_house(counts: &[u8; Rank::COUNT]) -> Option<HandLevel> {
    let mut trips = None;
    let mut pair = None;
    for rank in Rank::ranks() {
        match counts[rank as usize] {
            0 => {}
            2 => pair = Some(rank),
            3 => trips = Some(rank),
            _ => return None,
        }
    }

    Some(HandLevel::new(HandClass::FullHouse, vec![trips?, pair?]))
}

fn flush(cards: &[Card; 5]) -> Option<HandLevel> {
    let suit = cards[0].suit();
    if cards.iter().any(|c| c.suit() != suit) {
        return None;
    }

    let ranks = cards.iter().map(|c| c.rank()).collect();
    Some(HandLevel::new(HandClass::Flush, ranks))
}

fn straight(counts: &[u8; Rank::COUNT]) -> Option<HandLevel> {
    STRAIGHTS
        .iter()
        .find(|run| run.iter().all(|r| counts[*r as usize] == 1))
        .map(|run| HandLevel::new(HandClass::Straight, vec![run[0]]))
}

fn three_oak(cards: &[Card; 5], counts: &[u8; Rank::COUNT], ace_low: bool) -> Option<HandLevel> {
    let trips = ranks_desc(ace_low).find(|r| counts[*r as usize] >= 3)?;

    let mut tiebreaks = vec![trips];
    tiebreaks.extend(cards.iter().map(|c| c.rank()).filter(|r| *r != trips));
    Some(HandLevel::new(HandClass::ThreeOfAKind, tiebreaks))
}

fn two_pair(counts: &[u8; Rank::COUNT], ace_low: bool) -> Option<HandLevel> {
    let mut pairs = Vec::new();
    let mut kicker = None;
    for rank in ranks_desc(ace_low) {
        match counts[rank as usize] {
            0 => {}
            1 if kicker.is_none() => kicker = Some(rank),
            2 => pairs.push(rank),
            _ => return None,
        }
    }

    match pairs.as_slice() {
        [hi, lo] => Some(HandLevel::new(HandClass::TwoPair, vec![*hi, *lo, kicker?])),
        _ => None,
    }
}

fn one_pair(cards: &[Card; 5], counts: &[u8; Rank::COUNT], ace_low: bool) -> Option<HandLevel> {
    let pair = ranks_desc(ace_low).find(|r| counts[*r as usize] == 2)?;

    let mut tiebreaks = vec![pair];
    tiebreaks.extend(cards.iter().map(|c| c.rank()).filter(|r| *r != pair));
    Some(HandLevel::new(HandClass::OnePair, tiebreaks))
}

fn high_card(cards: &[Card; 5]) -> HandLevel {
    HandLevel::new(HandClass::HighCard, cards.iter().map(|c| c.rank()).collect())
}
