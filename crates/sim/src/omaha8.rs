// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Omaha/8 dealing and hi/lo equity simulation.
use anyhow::{Result, bail};
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use oddsmith_cards::{Card, Pack};
use oddsmith_eval::{Omaha8Level, beats, beats_ace_to_five_low, omaha8_level};

use crate::stats::{HandOutcome, Simulator, pot_odds_break_even};

const BOARD_CARDS: usize = 5;
const HOLE_CARDS: usize = 4;

/// Deals a board and four hole cards per player from the top of the pack.
///
/// The board takes positions `0..5` and player `i` (zero based) the four
/// positions starting at `5 + 4i`.
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

/// Shuffles the pack pinning board and hero cards for an Omaha deal.
///
/// Like [Pack::shuffle_fixing] but the hero holds up to four cards, landing
/// at positions `5..9` where [deal] picks up the first player's hand.
pub fn shuffle_fixing<R: Rng>(
    pack: &mut Pack,
    board: &[Card],
    hero: &[Card],
    rng: &mut R,
) -> Result<()> {
    if board.len() > BOARD_CARDS || hero.len() > HOLE_CARDS {
        bail!(
            "Maximum of 5 board cards and 4 hero cards supported, found {} and {}",
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

    pack.shuffle(rng);
    for (i, card) in board.iter().enumerate() {
        pack.place(*card, i);
    }
    for (i, card) in hero.iter().enumerate() {
        pack.place(*card, BOARD_CARDS + i);
    }

    Ok(())
}

/// One player's Omaha/8 showdown result.
///
/// The high half of the pot always pays out; the low half only exists when
/// somebody holds a qualifying low, otherwise the high winners take the
/// whole pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Omaha8Outcome {
    /// Player number, the hero is player 1.
    pub player: usize,
    /// The player's best high and low hands.
    pub level: Omaha8Level,
    /// True if this player won or split the high side.
    pub is_high_winner: bool,
    /// True if this player won or split the low side.
    pub is_low_winner: bool,
    /// This player's share of the pot from the high side.
    pub high_pot_fraction: f64,
    /// This player's share of the pot from the low side.
    pub low_pot_fraction: f64,
}

impl Omaha8Outcome {
    /// The total share of the pot this player won.
    pub fn pot_fraction(&self) -> f64 {
        self.high_pot_fraction + self.low_pot_fraction
    }
}

/// Evaluates every player's hand and settles the hi/lo pot.
///
/// Outcomes are returned in player order. High winners are the players
/// whose high hand no other hand beats; low winners are the players with a
/// qualifying low no other qualifying low beats. When a qualifying low
/// exists each side is worth half the pot, split equally among that side's
/// winners.
pub fn player_outcomes(board: &[Card], hands: &[Vec<Card>]) -> Result<Vec<Omaha8Outcome>> {
    let mut outcomes = Vec::with_capacity(hands.len());
    for (idx, hole) in hands.iter().enumerate() {
        outcomes.push(Omaha8Outcome {
            player: idx + 1,
            level: omaha8_level(board, hole)?,
            is_high_winner: false,
            is_low_winner: false,
            high_pot_fraction: 0.0,
            low_pot_fraction: 0.0,
        });
    }

    settle_pot(&mut outcomes);
    Ok(outcomes)
}

fn settle_pot(outcomes: &mut [Omaha8Outcome]) {
    if outcomes.is_empty() {
        return;
    }

    let high_winners = outcomes
        .iter()
        .map(|o| {
            outcomes
                .iter()
                .all(|p| !beats(&p.level.high_level, &o.level.high_level))
        })
        .collect::<Vec<_>>();
    let low_winners = outcomes
        .iter()
        .map(|o| {
            o.level.low_qualifies
                && outcomes.iter().all(|p| {
                    !p.level.low_qualifies
                        || !beats_ace_to_five_low(&p.level.low_level, &o.level.low_level)
                })
        })
        .collect::<Vec<_>>();

    let high_count = high_winners.iter().filter(|w| **w).count();
    let low_count = low_winners.iter().filter(|w| **w).count();
    let (high_share, low_share) = if low_count > 0 { (0.5, 0.5) } else { (1.0, 0.0) };

    for ((outcome, high), low) in outcomes.iter_mut().zip(high_winners).zip(low_winners) {
        outcome.is_high_winner = high;
        outcome.is_low_winner = low;
        outcome.high_pot_fraction = if high { high_share / high_count as f64 } else { 0.0 };
        outcome.low_pot_fraction = if low { low_share / low_count as f64 } else { 0.0 };
    }
}

/// Low side statistics, a small companion to the high side [Simulator].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Omaha8LowSimulator {
    /// The number of hands played.
    pub hand_count: usize,
    /// Hands where the hero won or split the low side.
    pub win_count: usize,
    /// Total low side pot fractions won by the hero.
    pub pots_won: f64,
}

impl Omaha8LowSimulator {
    fn process_hand(&mut self, outcome: &HandOutcome) {
        if outcome.won {
            self.win_count += 1;
        }
        self.pots_won += outcome.pot_fraction;
    }
}

/// Accumulated Omaha/8 statistics, a full high side simulator plus low
/// side totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Omaha8Simulator {
    /// High side statistics.
    pub high: Simulator,
    /// Low side statistics.
    pub low: Omaha8LowSimulator,
}

impl Omaha8Simulator {
    /// Creates an empty simulator for the given table size and batch.
    pub fn new(players: usize, hands_to_play: usize) -> Self {
        Self {
            high: Simulator::new(players, hands_to_play),
            low: Omaha8LowSimulator {
                hand_count: hands_to_play,
                ..Default::default()
            },
        }
    }

    /// Folds one settled hand into both sides.
    ///
    /// The same randomly drawn opponent feeds the high and low counters,
    /// one RNG state transition per hand.
    pub fn process_hand<R: Rng>(&mut self, outcomes: &[Omaha8Outcome], rng: &mut R) -> Result<()> {
        if outcomes.len() < 2 {
            bail!("At least two players required, found {}", outcomes.len());
        }

        let random_idx = 1 + rng.random_range(0..outcomes.len() - 1);
        self.high.process_hand(&high_outcome(outcomes, random_idx));
        self.low.process_hand(&low_outcome(outcomes, random_idx));
        Ok(())
    }

    /// Total pot fractions won by the hero across both sides.
    pub fn pots_won(&self) -> f64 {
        self.high.pots_won + self.low.pots_won
    }

    /// The largest bet with positive expected value relative to the pot.
    pub fn pot_odds_break_even(&self) -> f64 {
        pot_odds_break_even(self.pots_won(), self.high.hand_count)
    }
}

// The outcomes are in player order, the hero is first.
fn high_outcome(outcomes: &[Omaha8Outcome], random_idx: usize) -> HandOutcome {
    let ours = &outcomes[0];
    let mut best = &outcomes[1];
    for outcome in &outcomes[2..] {
        if beats(&outcome.level.high_level, &best.level.high_level) {
            best = outcome;
        }
    }
    let random = &outcomes[random_idx];

    HandOutcome {
        won: ours.is_high_winner,
        best_opponent_won: best.is_high_winner,
        random_opponent_won: random.is_high_winner,
        pot_fraction: ours.high_pot_fraction,
        best_opponent_pot_fraction: best.high_pot_fraction,
        random_opponent_pot_fraction: random.high_pot_fraction,
        our_level: ours.level.high_level.clone(),
        best_opponent_level: best.level.high_level.clone(),
        random_opponent_level: random.level.high_level.clone(),
    }
}

fn low_outcome(outcomes: &[Omaha8Outcome], random_idx: usize) -> HandOutcome {
    let ours = &outcomes[0];
    let mut best = &outcomes[1];
    for outcome in &outcomes[2..] {
        if beats_ace_to_five_low(&outcome.level.low_level, &best.level.low_level) {
            best = outcome;
        }
    }
    let random = &outcomes[random_idx];

    HandOutcome {
        won: ours.is_low_winner,
        best_opponent_won: best.is_low_winner,
        random_opponent_won: random.is_low_winner,
        pot_fraction: ours.low_pot_fraction,
        best_opponent_pot_fraction: best.low_pot_fraction,
        random_opponent_pot_fraction: random.low_pot_fraction,
        our_level: ours.level.low_level.clone(),
        best_opponent_level: best.level.low_level.clone(),
        random_opponent_level: random.level.low_level.clone(),
    }
}

/// Estimates the hero's Omaha/8 equity holding the given cards fixed.
///
/// The board may hold up to five known cards and the hero up to four, all
/// other cards are redealt every hand.
pub fn simulate<R: Rng>(
    board: &[Card],
    hero: &[Card],
    players: usize,
    hands_to_play: usize,
    rng: &mut R,
) -> Result<Omaha8Simulator> {
    if players < 2 {
        bail!("At least two players required, found {players}");
    }

    debug!("Simulating {hands_to_play} Omaha/8 hands with {players} players");
    let mut sim = Omaha8Simulator::new(players, hands_to_play);
    let mut pack = Pack::default();
    for _ in 0..hands_to_play {
        shuffle_fixing(&mut pack, board, hero, rng)?;
        let (board, hands) = deal(&pack, players)?;
        let outcomes = player_outcomes(&board, &hands)?;
        sim.process_hand(&outcomes, rng)?;
    }

    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use oddsmith_eval::{HandClass, HandLevel};
    use HandClass::*;

    fn h(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn hl(class: HandClass, ranks: &[&str]) -> HandLevel {
        HandLevel::new(class, ranks.iter().map(|s| s.parse().unwrap()).collect())
    }

    // Checks the pack holds all 52 distinct cards.
    fn assert_permutation(pack: &Pack) {
        let cards = pack.cards().iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Pack::SIZE);
    }

    #[test]
    fn deal_layout() {
        let mut pack = Pack::default();
        pack.shuffle(&mut StdRng::seed_from_u64(13));

        let (board, hands) = deal(&pack, 6).unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(hands.len(), 6);

        let mut seen = HashSet::default();
        for card in board.iter().chain(hands.iter().flatten()) {
            assert!(seen.insert(*card));
        }
        for hand in &hands {
            assert_eq!(hand.len(), 4);
        }

        assert!(deal(&pack, 0).is_err());
        assert!(deal(&pack, 12).is_err());
    }

    #[test]
    fn fixed_shuffle_pins_cards() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut pack = Pack::default();
        let board = h(&["AD", "QC", "6S", "QH", "3H"]);
        let hero = h(&["3S", "4C", "5D", "6H"]);

        for board_len in 3..=5 {
            let fixed_board = &board[..board_len];
            let mut opponent_hands = HashSet::default();

            for _ in 0..50 {
                shuffle_fixing(&mut pack, fixed_board, &hero, &mut rng).unwrap();
                assert_permutation(&pack);

                let (dealt_board, hands) = deal(&pack, 3).unwrap();
                assert_eq!(&dealt_board[..board_len], fixed_board);
                assert_eq!(hands[0], hero);
                opponent_hands.insert(hands[1].clone());
            }

            // The unpinned cards should vary between shuffles.
            assert!(opponent_hands.len() > 1);
        }
    }

    #[test]
    fn fixed_shuffle_errors() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut pack = Pack::default();

        let hero = h(&["2C", "3C", "4C", "5C", "6C"]);
        assert!(shuffle_fixing(&mut pack, &[], &hero, &mut rng).is_err());

        let board = h(&["2C", "3C"]);
        let hero = h(&["3C", "4C"]);
        assert!(shuffle_fixing(&mut pack, &board, &hero, &mut rng).is_err());
    }

    struct OutcomeTest {
        board: Vec<Card>,
        hands: [Vec<Card>; 2],
        highs: [HandLevel; 2],
        lows: [HandLevel; 2],
        high_winners: [bool; 2],
        low_winners: [bool; 2],
        pot_split: [f64; 2],
    }

    #[test]
    fn hi_lo_pot_settlement() {
        let tests = [
            OutcomeTest {
                board: h(&["6S", "7S", "8C", "JD", "QH"]),
                hands: [h(&["AS", "3S", "KS", "KC"]), h(&["2S", "3C", "5D", "9H"])],
                highs: [hl(OnePair, &["K", "Q", "J", "8"]), hl(Straight, &["9"])],
                lows: [hl(HighCard, &["8", "7", "6", "3", "A"]), hl(HighCard, &["8", "7", "6", "3", "2"])],
                high_winners: [false, true],
                low_winners: [true, false],
                pot_split: [0.5, 0.5],
            },
            OutcomeTest {
                board: h(&["2S", "3C", "4D", "5H", "JS"]),
                hands: [h(&["AS", "6C", "KD", "KH"]), h(&["AC", "4S", "8D", "8H"])],
                highs: [hl(OnePair, &["K", "J", "5", "4"]), hl(Straight, &["5"])],
                lows: [hl(HighCard, &["6", "4", "3", "2", "A"]), hl(HighCard, &["5", "4", "3", "2", "A"])],
                high_winners: [false, true],
                low_winners: [false, true],
                pot_split: [0.0, 1.0],
            },
            OutcomeTest {
                board: h(&["AS", "2C", "3D", "4H", "5S"]),
                hands: [h(&["AC", "3S", "5D", "6S"]), h(&["3C", "4D", "JS", "JC"])],
                highs: [hl(Straight, &["6"]), hl(Straight, &["5"])],
                lows: [hl(HighCard, &["5", "4", "3", "2", "A"]), hl(HighCard, &["5", "4", "3", "2", "A"])],
                high_winners: [true, false],
                low_winners: [true, true],
                pot_split: [0.75, 0.25],
            },
            OutcomeTest {
                board: h(&["2S", "4C", "6D", "7H", "8S"]),
                hands: [h(&["AS", "AC", "4D", "7D"]), h(&["2C", "5S", "5C", "7S"])],
                highs: [hl(TwoPair, &["7", "4", "8"]), hl(Straight, &["8"])],
                lows: [hl(HighCard, &["7", "6", "4", "2", "A"]), hl(HighCard, &["7", "6", "5", "4", "2"])],
                high_winners: [false, true],
                low_winners: [true, false],
                pot_split: [0.5, 0.5],
            },
            OutcomeTest {
                board: h(&["2S", "4C", "7D", "8H", "9S"]),
                hands: [h(&["AS", "AC", "4D", "7H"]), h(&["2C", "5S", "6C", "KD"])],
                highs: [hl(TwoPair, &["7", "4", "9"]), hl(Straight, &["9"])],
                lows: [hl(HighCard, &["8", "7", "4", "2", "A"]), hl(HighCard, &["7", "6", "5", "4", "2"])],
                high_winners: [false, true],
                low_winners: [false, true],
                pot_split: [0.0, 1.0],
            },
            // No qualifying low, the high side takes the whole pot.
            OutcomeTest {
                board: h(&["3S", "9C", "10D", "JH", "QS"]),
                hands: [h(&["AS", "3C", "JC", "JD"]), h(&["4S", "4C", "8S", "QH"])],
                highs: [hl(ThreeOfAKind, &["J", "Q", "10"]), hl(Straight, &["Q"])],
                lows: [hl(HighCard, &["J", "10", "9", "3", "A"]), hl(HighCard, &["10", "9", "8", "4", "3"])],
                high_winners: [false, true],
                low_winners: [false, false],
                pot_split: [0.0, 1.0],
            },
            OutcomeTest {
                board: h(&["6H", "7H", "9H", "JH", "KD"]),
                hands: [h(&["AH", "2C", "8C", "10D"]), h(&["3S", "4C", "5H", "8D"])],
                highs: [hl(Straight, &["J"]), hl(Straight, &["9"])],
                lows: [hl(HighCard, &["9", "7", "6", "2", "A"]), hl(HighCard, &["9", "7", "6", "4", "3"])],
                high_winners: [true, false],
                low_winners: [false, false],
                pot_split: [1.0, 0.0],
            },
            OutcomeTest {
                board: h(&["3S", "3C", "7D", "JH", "JS"]),
                hands: [h(&["AS", "2C", "4D", "JD"]), h(&["4S", "5C", "7C", "7H"])],
                highs: [hl(ThreeOfAKind, &["J", "A", "7"]), hl(FullHouse, &["7", "J"])],
                lows: [hl(HighCard, &["J", "7", "3", "2", "A"]), hl(HighCard, &["J", "7", "5", "4", "3"])],
                high_winners: [false, true],
                low_winners: [false, false],
                pot_split: [0.0, 1.0],
            },
            OutcomeTest {
                board: h(&["3S", "3C", "7D", "JH", "JS"]),
                hands: [h(&["AS", "2C", "3D", "JD"]), h(&["4S", "5C", "7C", "7H"])],
                highs: [hl(FullHouse, &["J", "3"]), hl(FullHouse, &["7", "J"])],
                lows: [hl(HighCard, &["J", "7", "3", "2", "A"]), hl(HighCard, &["J", "7", "5", "4", "3"])],
                high_winners: [true, false],
                low_winners: [false, false],
                pot_split: [1.0, 0.0],
            },
            OutcomeTest {
                board: h(&["8S", "8C", "8D", "8H", "9S"]),
                hands: [h(&["2S", "3C", "3D", "QH"]), h(&["AS", "2C", "3H", "QC"])],
                highs: [hl(FullHouse, &["8", "3"]), hl(ThreeOfAKind, &["8", "A", "Q"])],
                lows: [hl(OnePair, &["8", "9", "3", "2"]), hl(OnePair, &["8", "9", "2", "A"])],
                high_winners: [true, false],
                low_winners: [false, false],
                pot_split: [1.0, 0.0],
            },
            OutcomeTest {
                board: h(&["AS", "4C", "5D", "8H", "9S"]),
                hands: [h(&["AC", "4S", "5H", "8D"]), h(&["AD", "4D", "5C", "KS"])],
                highs: [hl(TwoPair, &["A", "8", "9"]), hl(TwoPair, &["A", "5", "9"])],
                lows: [hl(HighCard, &["9", "8", "5", "4", "A"]), hl(HighCard, &["9", "8", "5", "4", "A"])],
                high_winners: [true, false],
                low_winners: [false, false],
                pot_split: [1.0, 0.0],
            },
            // Equal qualifying lows split the low half.
            OutcomeTest {
                board: h(&["AS", "4C", "5D", "8H", "2S"]),
                hands: [h(&["AC", "4S", "5H", "8D"]), h(&["AD", "4D", "5C", "KS"])],
                highs: [hl(TwoPair, &["A", "8", "5"]), hl(TwoPair, &["A", "5", "8"])],
                lows: [hl(HighCard, &["8", "5", "4", "2", "A"]), hl(HighCard, &["8", "5", "4", "2", "A"])],
                high_winners: [true, false],
                low_winners: [true, true],
                pot_split: [0.75, 0.25],
            },
        ];

        for test in &tests {
            let outcomes = player_outcomes(&test.board, &test.hands).unwrap();
            assert_eq!(outcomes.len(), 2);
            for (i, outcome) in outcomes.iter().enumerate() {
                assert_eq!(outcome.player, i + 1);
                assert_eq!(outcome.level.high_level, test.highs[i], "board {:?}", test.board);
                assert_eq!(outcome.level.low_level, test.lows[i], "board {:?}", test.board);
                assert_eq!(outcome.is_high_winner, test.high_winners[i], "board {:?}", test.board);
                assert_eq!(outcome.is_low_winner, test.low_winners[i], "board {:?}", test.board);
                assert!(
                    (outcome.pot_fraction() - test.pot_split[i]).abs() < 1e-6,
                    "board {:?} player {} won {}",
                    test.board,
                    i + 1,
                    outcome.pot_fraction()
                );
            }
        }
    }

    #[test]
    fn pot_fractions_sum_to_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pack = Pack::default();
        for _ in 0..100 {
            pack.shuffle(&mut rng);
            let (board, hands) = deal(&pack, 4).unwrap();
            let outcomes = player_outcomes(&board, &hands).unwrap();
            let total = outcomes.iter().map(|o| o.pot_fraction()).sum::<f64>();
            assert!((total - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn simulation_sanity() {
        let mut rng = StdRng::seed_from_u64(1234);
        let hands = 1000;
        let hero = h(&["AS", "QC", "3D", "4H"]);
        let sim = simulate(&[], &hero, 4, hands, &mut rng).unwrap();

        assert_eq!(sim.high.players, 4);
        assert_eq!(sim.high.hand_count, hands);
        assert_eq!(sim.low.hand_count, hands);
        assert!(sim.high.win_count <= hands);
        assert!(sim.low.win_count <= hands);
        assert_eq!(sim.high.our_class_counts.iter().sum::<usize>(), hands);
        assert_eq!(sim.high.best_opponent_class_counts.iter().sum::<usize>(), hands);

        // High and low shares never exceed one pot per hand.
        assert!(sim.pots_won() <= hands as f64 + 1e-6);
        let break_even = sim.pot_odds_break_even();
        assert!(break_even >= 0.0 && !break_even.is_nan());
    }

    #[test]
    fn simulation_is_seeded() {
        let hero = h(&["AS", "QC", "3D", "4H"]);
        let board = h(&["2S", "5C", "10H"]);
        let sim1 = simulate(&board, &hero, 3, 300, &mut StdRng::seed_from_u64(5)).unwrap();
        let sim2 = simulate(&board, &hero, 3, 300, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(sim1, sim2);
    }

    #[test]
    fn split_sides_break_even() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut sim = Omaha8Simulator::new(2, 2);

        let high_wins = Omaha8Level {
            high_level: hl(StraightFlush, &["A"]),
            high_cards: h(&["AS", "KS", "QS", "JS", "10S"]),
            low_level: hl(HighCard, &["8", "7", "6", "5", "4"]),
            low_cards: h(&["8C", "7D", "6S", "5H", "4C"]),
            low_qualifies: true,
        };
        let low_wins = Omaha8Level {
            high_level: hl(TwoPair, &["A", "K", "Q"]),
            high_cards: h(&["AS", "AC", "KS", "KC", "QH"]),
            low_level: hl(HighCard, &["6", "4", "3", "2", "A"]),
            low_cards: h(&["6D", "4D", "3D", "2C", "AD"]),
            low_qualifies: true,
        };

        let outcome1 = Omaha8Outcome {
            player: 1,
            level: high_wins,
            is_high_winner: true,
            is_low_winner: false,
            high_pot_fraction: 0.5,
            low_pot_fraction: 0.0,
        };
        let outcome2 = Omaha8Outcome {
            player: 2,
            level: low_wins,
            is_high_winner: false,
            is_low_winner: true,
            high_pot_fraction: 0.0,
            low_pot_fraction: 0.5,
        };

        // The hero takes the high half of one hand and the low half of the
        // other, half a pot per hand on average.
        sim.process_hand(&[outcome1.clone(), outcome2.clone()], &mut rng).unwrap();
        let mut outcome1 = outcome1;
        let mut outcome2 = outcome2;
        outcome1.player = 2;
        outcome2.player = 1;
        sim.process_hand(&[outcome2, outcome1], &mut rng).unwrap();

        assert!((sim.pot_odds_break_even() - 1.0).abs() < 1e-6);
    }
}
