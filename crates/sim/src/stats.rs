// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per hand outcomes and simulation statistics.
use serde::{Deserialize, Serialize};

use oddsmith_eval::{HandClass, HandLevel, beats};

/// The outcome of one simulated hand from the hero's side of the table.
///
/// Tracks three points of view, the hero, the strongest opponent, and one
/// opponent picked uniformly at random each hand. Comparing the hero
/// against a random opponent estimates heads up equity within a larger
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// True if the hero won or split the pot.
    pub won: bool,
    /// True if the strongest opponent won or split the pot.
    pub best_opponent_won: bool,
    /// True if the randomly picked opponent won or split the pot.
    pub random_opponent_won: bool,
    /// The hero's share of the pot.
    pub pot_fraction: f64,
    /// The strongest opponent's share of the pot.
    pub best_opponent_pot_fraction: f64,
    /// The random opponent's share of the pot.
    pub random_opponent_pot_fraction: f64,
    /// The hero's hand level.
    pub our_level: HandLevel,
    /// The strongest opponent's hand level.
    pub best_opponent_level: HandLevel,
    /// The random opponent's hand level.
    pub random_opponent_level: HandLevel,
}

/// Accumulated statistics over a batch of simulated hands.
///
/// All counters index hand classes by their discriminant, the per class
/// vectors have [HandClass::COUNT] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulator {
    /// The number of players at the table.
    pub players: usize,
    /// The number of hands played.
    pub hand_count: usize,
    /// Hands where the hero won or split the pot.
    pub win_count: usize,
    /// Hands where the hero split the pot with the best opponent.
    pub joint_win_count: usize,
    /// Hands where the best opponent won or split the pot.
    pub best_opponent_win_count: usize,
    /// Hands where the random opponent won or split the pot.
    pub random_opponent_win_count: usize,
    /// Total pot fractions won by the hero.
    pub pots_won: f64,
    /// Total pot fractions won by the best opponent.
    pub best_opponent_pots_won: f64,
    /// Total pot fractions won by the random opponent.
    pub random_opponent_pots_won: f64,
    /// How often the hero made each hand class.
    pub our_class_counts: Vec<usize>,
    /// How often the best opponent made each hand class.
    pub best_opponent_class_counts: Vec<usize>,
    /// How often the random opponent made each hand class.
    pub random_opponent_class_counts: Vec<usize>,
    /// Hero wins by hand class.
    pub class_win_counts: Vec<usize>,
    /// Hero pot splits with the best opponent by hand class.
    pub class_joint_win_counts: Vec<usize>,
    /// Best opponent wins by hand class.
    pub class_best_opp_win_counts: Vec<usize>,
    /// Random opponent wins by hand class.
    pub class_rand_opp_win_counts: Vec<usize>,
    /// The best hand the hero made.
    pub best_hand: HandLevel,
    /// The best hand any opponent made.
    pub best_opp_hand: HandLevel,
    /// The best hero hand of each class.
    pub class_best_hands: Vec<HandLevel>,
    /// The best opponent hand of each class.
    pub class_best_opp_hands: Vec<HandLevel>,
}

impl Simulator {
    /// Creates an empty simulator for the given table size and batch.
    pub fn new(players: usize, hands_to_play: usize) -> Self {
        Self {
            players,
            hand_count: hands_to_play,
            win_count: 0,
            joint_win_count: 0,
            best_opponent_win_count: 0,
            random_opponent_win_count: 0,
            pots_won: 0.0,
            best_opponent_pots_won: 0.0,
            random_opponent_pots_won: 0.0,
            our_class_counts: vec![0; HandClass::COUNT],
            best_opponent_class_counts: vec![0; HandClass::COUNT],
            random_opponent_class_counts: vec![0; HandClass::COUNT],
            class_win_counts: vec![0; HandClass::COUNT],
            class_joint_win_counts: vec![0; HandClass::COUNT],
            class_best_opp_win_counts: vec![0; HandClass::COUNT],
            class_rand_opp_win_counts: vec![0; HandClass::COUNT],
            best_hand: HandLevel::floor(),
            best_opp_hand: HandLevel::floor(),
            class_best_hands: vec![HandLevel::floor(); HandClass::COUNT],
            class_best_opp_hands: vec![HandLevel::floor(); HandClass::COUNT],
        }
    }

    /// Clears all counters for a new batch.
    pub fn reset(&mut self, players: usize, hands_to_play: usize) {
        *self = Self::new(players, hands_to_play);
    }

    /// Folds one hand outcome into the counters.
    pub fn process_hand(&mut self, outcome: &HandOutcome) {
        let our_class = outcome.our_level.class as usize;
        let best_opp_class = outcome.best_opponent_level.class as usize;
        let rand_opp_class = outcome.random_opponent_level.class as usize;

        if outcome.won {
            self.win_count += 1;
            self.class_win_counts[our_class] += 1;
        }
        if outcome.best_opponent_won {
            self.best_opponent_win_count += 1;
            self.class_best_opp_win_counts[best_opp_class] += 1;
        }
        if outcome.won && outcome.best_opponent_won {
            self.joint_win_count += 1;
            self.class_joint_win_counts[our_class] += 1;
        }
        if outcome.random_opponent_won {
            self.random_opponent_win_count += 1;
            self.class_rand_opp_win_counts[rand_opp_class] += 1;
        }

        self.pots_won += outcome.pot_fraction;
        self.best_opponent_pots_won += outcome.best_opponent_pot_fraction;
        self.random_opponent_pots_won += outcome.random_opponent_pot_fraction;

        self.our_class_counts[our_class] += 1;
        self.best_opponent_class_counts[best_opp_class] += 1;
        self.random_opponent_class_counts[rand_opp_class] += 1;

        if beats(&outcome.our_level, &self.best_hand) {
            self.best_hand = outcome.our_level.clone();
        }
        if beats(&outcome.best_opponent_level, &self.best_opp_hand) {
            self.best_opp_hand = outcome.best_opponent_level.clone();
        }
        if beats(&outcome.our_level, &self.class_best_hands[our_class]) {
            self.class_best_hands[our_class] = outcome.our_level.clone();
        }
        if beats(&outcome.best_opponent_level, &self.class_best_opp_hands[best_opp_class]) {
            self.class_best_opp_hands[best_opp_class] = outcome.best_opponent_level.clone();
        }
    }

    /// The largest bet with positive expected value relative to the pot.
    pub fn pot_odds_break_even(&self) -> f64 {
        pot_odds_break_even(self.pots_won, self.hand_count)
    }
}

/// The largest bet with positive expected value relative to the pot size.
///
/// If `w` is the mean pot fraction won per hand, the expected value of a
/// bet `b` into a pot `p` is `w * (p + b) - b`, positive iff
/// `b < p * w / (1 - w)`. Returns positive infinity when every pot was won
/// outright.
pub fn pot_odds_break_even(pots_won: f64, hand_count: usize) -> f64 {
    let mean = pots_won / hand_count as f64;
    if mean == 1.0 {
        f64::INFINITY
    } else {
        mean / (1.0 - mean)
    }
}
