// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies any set of at least five cards, in this game the
//! two hole cards plus three to five board cards, into a [HandCategory] and
//! builds the tie break key used to compare hands of the same category.
//!
//! The category is the first entry of [HandCategory::precedence] the cards
//! satisfy, so a flush ranks above a straight and a straight flush needs five
//! consecutive cards of the same suit. Straights can be ace high down to the
//! wheel (A-2-3-4-5) that has the five as its high card.
//!
//! The tie break key is a list of rank indices compared lexicographically,
//! highest first:
//!
//! - straight and straight flush: the high card of the best run.
//! - four and three of a kind, pair: the rank of the group.
//! - full house: the three of a kind rank and then the pair rank.
//! - two pair: the highest pair rank and then the second pair rank.
//! - flush: the ranks of all the flush suit cards.
//! - high card: the ranks of all the cards.
use holdem_cards::{Card, Suit};
use serde::{Deserialize, Serialize};

use crate::{EvalError, HandCategory};

/// The smallest hand the evaluator accepts.
pub const MIN_CARDS: usize = 5;

/// A classified hand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    key: Vec<u8>,
}

impl EvaluatedHand {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand category strength.
    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    /// The tie break key, rank indices from the most to the least significant.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

/// Evaluates a hand of five or more cards.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let analysis = Analysis::new(cards)?;

    let category = HandCategory::precedence()
        .find(|c| analysis.holds(*c))
        .unwrap_or(HandCategory::HighCard);

    Ok(EvaluatedHand {
        category,
        key: analysis.key(category),
    })
}

/// Evaluates a player hole cards together with the board.
///
/// The cards are combined in a temporary buffer, neither input is changed.
pub fn evaluate_hole_and_board(hole: &[Card], board: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate(&cards)
}

/// Rank and suit counts of a hand.
#[derive(Debug)]
struct Analysis {
    rank_counts: [u8; 13],
    /// All cards ranks, high to low.
    ranks: Vec<u8>,
    /// The flush suit cards ranks, high to low.
    flush_ranks: Vec<u8>,
    straight_high: Option<u8>,
    straight_flush_high: Option<u8>,
}

impl Analysis {
    fn new(cards: &[Card]) -> Result<Self, EvalError> {
        if cards.len() < MIN_CARDS {
            return Err(EvalError::TooFewCards(cards.len()));
        }

        let mut seen = 0u64;
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        for card in cards {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                return Err(EvalError::DuplicateCard(*card));
            }
            seen |= bit;

            rank_counts[card.rank().index() as usize] += 1;
            suit_counts[card.suit().index() as usize] += 1;
        }

        let mut ranks = cards.iter().map(|c| c.rank().index()).collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let flush_suit = Suit::suits().find(|s| suit_counts[s.index() as usize] >= 5);
        let mut flush_ranks = flush_suit
            .map(|suit| {
                cards
                    .iter()
                    .filter(|c| c.suit() == suit)
                    .map(|c| c.rank().index())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        flush_ranks.sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self {
            rank_counts,
            straight_high: straight_high(&ranks),
            straight_flush_high: straight_high(&flush_ranks),
            ranks,
            flush_ranks,
        })
    }

    /// Ranks with the given count, high to low.
    fn groups(&self, count: u8) -> impl Iterator<Item = u8> + '_ {
        (0..13u8)
            .rev()
            .filter(move |r| self.rank_counts[*r as usize] == count)
    }

    fn trips(&self) -> Option<u8> {
        self.groups(3).next()
    }

    /// The best pair for a full house, a second three of a kind counts.
    fn full_house_pair(&self, trips: u8) -> Option<u8> {
        (0..13u8)
            .rev()
            .find(|r| *r != trips && self.rank_counts[*r as usize] >= 2)
    }

    fn holds(&self, category: HandCategory) -> bool {
        match category {
            HandCategory::RoyalFlush => self.straight_flush_high == Some(12),
            HandCategory::StraightFlush => self.straight_flush_high.is_some(),
            HandCategory::FourKind => self.groups(4).next().is_some(),
            HandCategory::FullHouse => self
                .trips()
                .and_then(|t| self.full_house_pair(t))
                .is_some(),
            HandCategory::Flush => !self.flush_ranks.is_empty(),
            HandCategory::Straight => self.straight_high.is_some(),
            HandCategory::ThreeKind => self.trips().is_some(),
            HandCategory::TwoPair => self.groups(2).count() >= 2,
            HandCategory::Pair => self.groups(2).next().is_some(),
            HandCategory::HighCard => true,
        }
    }

    fn key(&self, category: HandCategory) -> Vec<u8> {
        match category {
            HandCategory::RoyalFlush | HandCategory::StraightFlush => {
                self.straight_flush_high.into_iter().collect()
            }
            HandCategory::FourKind => self.groups(4).take(1).collect(),
            HandCategory::FullHouse => self
                .trips()
                .into_iter()
                .flat_map(|t| [Some(t), self.full_house_pair(t)])
                .flatten()
                .collect(),
            HandCategory::Flush => self.flush_ranks.iter().take(5).copied().collect(),
            HandCategory::Straight => self.straight_high.into_iter().collect(),
            HandCategory::ThreeKind => self.groups(3).take(1).collect(),
            HandCategory::TwoPair => self.groups(2).take(2).collect(),
            HandCategory::Pair => self.groups(2).take(1).collect(),
            HandCategory::HighCard => self.ranks.clone(),
        }
    }
}

/// Finds the high card of the best five consecutive ranks.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut mask = ranks.iter().fold(0u16, |m, r| m | (1 << r));

    // The ace plays low in the wheel.
    if mask & (1 << 12) != 0 {
        mask = (mask << 1) | 1;
    } else {
        mask <<= 1;
    }

    // Bit 0 is the low ace so rank index r is at bit r + 1.
    (4..=13u8).rev().find_map(|high| {
        let window = 0b11111u16 << (high - 4);
        (mask & window == window).then_some(high - 1)
    })
}
