// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em dealing and equity simulation.
use anyhow::{Result, anyhow, bail};
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use oddsmith_cards::{Card, Pack, Rank, Suit, combinations};
use oddsmith_eval::{HandLevel, beats, holdem_level};

use crate::stats::{HandOutcome, Simulator};

const BOARD_CARDS: usize = 5;
const HOLE_CARDS: usize = 2;

/// Opponent holdings from 45 unseen cards, the point where exhaustive
/// enumeration gets cheaper than sampling.
const ENUMERATION_THRESHOLD: usize = 990;

/// One player's showdown result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    /// Player number, the hero is player 1.
    pub player: usize,
    /// The player's best hand level.
    pub level: HandLevel,
    /// The five cards realising that level.
    pub cards: Vec<Card>,
    /// True if this player won or split the pot.
    pub winner: bool,
    /// This player's share of the pot, winners split it equally.
    pub pot_fraction: f64,
}

/// Deals a board and two hole cards per player from the top of the pack.
///
/// The board takes positions `0..5` and player `i` (zero based) the two
/// positions starting at `5 + 2i`, matching the layout produced by
/// [Pack::shuffle_fixing].
pub fn deal(pack: &Pack, players: usize) -> Result<(Vec<Card>, Vec<Vec<Card>>)> {
    if players < 1 {
        bail!("At least one player required, found {players}");
    }
    if BOARD_CARDS + players * HOLE_CARDS > Pack::SIZE {
        bail!("Too many players for one pack, found {players}");
    }

    let cards = pack.cards();
    let board = cards[..BOARD_CARDS].to_vec();
    let hands = (0..players)
        .map(|i| {
            let start = BOARD_CARDS + i * HOLE_CARDS;
            cards[start..start + HOLE_CARDS].to_vec()
        })
        .collect();

    Ok((board, hands))
}

/// Evaluates every player's best hand and settles the pot.
///
/// The returned outcomes are sorted by hand strength descending, ties by
/// player number ascending. Every outcome not beaten by the strongest hand
/// is a winner, and the winners split the pot equally.
pub fn deal_outcomes(board: &[Card], hands: &[Vec<Card>]) -> Result<Vec<PlayerOutcome>> {
    let mut outcomes = Vec::with_capacity(hands.len());
    for (idx, hole) in hands.iter().enumerate() {
        let (level, cards) = holdem_level(board, hole)?;
        outcomes.push(PlayerOutcome {
            player: idx + 1,
            level,
            cards,
            winner: false,
            pot_fraction: 0.0,
        });
    }

    settle_pot(&mut outcomes);
    Ok(outcomes)
}

/// Sorts outcomes by strength then player, marks winners, splits the pot.
fn settle_pot(outcomes: &mut [PlayerOutcome]) {
    outcomes.sort_by(|a, b| {
        if beats(&a.level, &b.level) {
            Ordering::Less
        } else if beats(&b.level, &a.level) {
            Ordering::Greater
        } else {
            a.player.cmp(&b.player)
        }
    });

    let Some(top) = outcomes.first().map(|o| o.level.clone()) else {
        return;
    };

    let winners = outcomes.iter().filter(|o| !beats(&top, &o.level)).count();
    for outcome in outcomes.iter_mut() {
        outcome.winner = !beats(&top, &outcome.level);
        outcome.pot_fraction = if outcome.winner {
            1.0 / winners as f64
        } else {
            0.0
        };
    }
}

/// Builds the hero's view of one settled hand.
///
/// Expects outcomes sorted as returned by [deal_outcomes], so the first
/// opponent in sort order is the strongest. Draws the random opponent with
/// a single uniform sample, one RNG state transition per hand.
pub fn hand_outcome<R: Rng>(outcomes: &[PlayerOutcome], rng: &mut R) -> Result<HandOutcome> {
    if outcomes.len() < 2 {
        bail!("At least two players required, found {}", outcomes.len());
    }

    let hero = outcomes
        .iter()
        .find(|o| o.player == 1)
        .ok_or_else(|| anyhow!("Missing outcome for player 1"))?;
    let opponents = outcomes.iter().filter(|o| o.player != 1).collect::<Vec<_>>();
    let best = opponents[0];
    let random = opponents[rng.random_range(0..opponents.len())];

    Ok(HandOutcome {
        won: hero.winner,
        best_opponent_won: best.winner,
        random_opponent_won: random.winner,
        pot_fraction: hero.pot_fraction,
        best_opponent_pot_fraction: best.pot_fraction,
        random_opponent_pot_fraction: random.pot_fraction,
        our_level: hero.level.clone(),
        best_opponent_level: best.level.clone(),
        random_opponent_level: random.level.clone(),
    })
}

/// Estimates the hero's Hold'em equity holding the given cards fixed.
///
/// The board may hold up to five known cards and the hero up to two, all
/// other cards are redealt every hand. Runs a Monte Carlo simulation of
/// `hands_to_play` hands, except in the heads up case with a full board
/// and hero hand where enumerating all 990 opponent holdings is cheaper
/// and exact.
pub fn simulate<R: Rng>(
    board: &[Card],
    hero: &[Card],
    players: usize,
    hands_to_play: usize,
    rng: &mut R,
) -> Result<Simulator> {
    if players < 2 {
        bail!("At least two players required, found {players}");
    }

    if board.len() == BOARD_CARDS
        && hero.len() == HOLE_CARDS
        && players == 2
        && hands_to_play > ENUMERATION_THRESHOLD
    {
        return enumerate(board, hero, rng);
    }

    debug!("Simulating {hands_to_play} Hold'em hands with {players} players");
    let mut sim = Simulator::new(players, hands_to_play);
    let mut pack = Pack::default();
    for _ in 0..hands_to_play {
        pack.shuffle_fixing(board, hero, rng)?;
        let (board, hands) = deal(&pack, players)?;
        let outcomes = deal_outcomes(&board, &hands)?;
        sim.process_hand(&hand_outcome(&outcomes, rng)?);
    }

    Ok(sim)
}

/// Plays the hero's hand against every possible opponent holding.
fn enumerate<R: Rng>(board: &[Card], hero: &[Card], rng: &mut R) -> Result<Simulator> {
    let unseen = Pack::default()
        .cards()
        .iter()
        .copied()
        .filter(|c| !board.contains(c) && !hero.contains(c))
        .collect::<Vec<_>>();

    debug!("Enumerating opponent holdings from {} unseen cards", unseen.len());
    let mut sim = Simulator::new(2, 0);
    for opponent in combinations(&unseen, HOLE_CARDS) {
        let hands = vec![hero.to_vec(), opponent];
        let outcomes = deal_outcomes(board, &hands)?;
        sim.process_hand(&hand_outcome(&outcomes, rng)?);
        sim.hand_count += 1;
    }

    Ok(sim)
}

/// A pre-flop starting hand given by ranks and suitedness.
///
/// Pre-flop equity only depends on the two ranks and whether the cards
/// share a suit, so concrete suits are picked arbitrarily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingPair {
    /// First card rank.
    pub rank1: Rank,
    /// Second card rank.
    pub rank2: Rank,
    /// True when both cards share a suit.
    pub suited: bool,
}

impl StartingPair {
    /// Checks the pair can exist in one pack.
    pub fn validate(&self) -> Result<()> {
        if self.rank1 == self.rank2 && self.suited {
            bail!("A pair of {}s cannot be suited", self.rank1);
        }

        Ok(())
    }

    /// Picks concrete cards for this starting pair.
    pub fn sample_cards(&self) -> Result<(Card, Card)> {
        self.validate()?;

        let suit2 = if self.suited { Suit::Clubs } else { Suit::Hearts };
        Ok((
            Card::new(self.rank1, Suit::Clubs),
            Card::new(self.rank2, suit2),
        ))
    }

    /// Runs a pre-flop Hold'em simulation for this starting pair.
    pub fn simulate<R: Rng>(
        &self,
        players: usize,
        hands_to_play: usize,
        rng: &mut R,
    ) -> Result<Simulator> {
        let (card1, card2) = self.sample_cards()?;
        simulate(&[], &[card1, card2], players, hands_to_play, rng)
    }
}
