// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A full pack of cards with plain and fixed shuffles.
use anyhow::{Result, bail};
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// Number of board cards dealt to the table.
pub(crate) const BOARD_CARDS: usize = 5;

/// A pack of all 52 cards.
///
/// A pack is always a permutation of the full deck, shuffling reorders the
/// cards but never adds or removes any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    cards: [Card; Pack::SIZE],
}

impl Pack {
    /// The number of cards in the pack.
    pub const SIZE: usize = 52;

    /// The cards in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffles the pack.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffles the pack but pins the given cards in place.
    ///
    /// The board cards land at positions `0..board.len()` and the hero cards
    /// at `5..5 + hero.len()`, all other positions are uniformly random.
    /// Used by simulations that hold a known board and hero hand constant
    /// while varying the opponents.
    pub fn shuffle_fixing<R: Rng>(
        &mut self,
        board: &[Card],
        hero: &[Card],
        rng: &mut R,
    ) -> Result<()> {
        if board.len() > BOARD_CARDS || hero.len() > 2 {
            bail!(
                "Maximum of 5 board cards and 2 hero cards supported, found {} and {}",
                board.len(),
                hero.len()
            );
        }

        let fixed = board.iter().chain(hero).copied().collect::<Vec<_>>();
        for (i, card) in fixed.iter().enumerate() {
            if fixed[i + 1..].contains(card) {
                bail!("Duplicate fixed card {card}");
            }
        }

        // Shuffle and swap the fixed cards into place from wherever they
        // ended up.
        self.shuffle(rng);
        for (i, card) in board.iter().enumerate() {
            self.place(*card, i);
        }
        for (i, card) in hero.iter().enumerate() {
            self.place(*card, BOARD_CARDS + i);
        }

        Ok(())
    }

    /// Swaps the given card into the given position.
    pub fn place(&mut self, card: Card, index: usize) {
        let from = self.position_of(card);
        self.cards.swap(from, index);
    }

    /// The current position of a card in the pack.
    fn position_of(&self, card: Card) -> usize {
        // The pack invariant guarantees every card is present.
        self.cards.iter().position(|c| *c == card).unwrap()
    }
}

impl Default for Pack {
    fn default() -> Self {
        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); Pack::SIZE];
        let fresh = Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)));
        for (slot, card) in cards.iter_mut().zip(fresh) {
            *slot = card;
        }
        Self { cards }
    }
}
