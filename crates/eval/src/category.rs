// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker hand category.
///
/// Categories are totally ordered by strength, the enum discriminant is the
/// category strength from 0 for a high card to 9 for a royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeKind,
    /// Five cards of consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Returns categories in classification order, the first category a hand
    /// satisfies is its category.
    pub fn precedence() -> impl Iterator<Item = HandCategory> {
        Self::ALL.into_iter().rev()
    }

    /// The category strength.
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high_card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two_pair",
            HandCategory::ThreeKind => "three_kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full_house",
            HandCategory::FourKind => "four_kind",
            HandCategory::StraightFlush => "straight_flush",
            HandCategory::RoyalFlush => "royal_flush",
        }
    }

    /// A label used when showing a hand to players.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "a pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeKind => "three of a kind",
            HandCategory::Straight => "a straight",
            HandCategory::Flush => "a flush",
            HandCategory::FullHouse => "a full house",
            HandCategory::FourKind => "four of a kind",
            HandCategory::StraightFlush => "a straight flush",
            HandCategory::RoyalFlush => "a royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_table() {
        let table = [
            ("high_card", 0),
            ("pair", 1),
            ("two_pair", 2),
            ("three_kind", 3),
            ("straight", 4),
            ("flush", 5),
            ("full_house", 6),
            ("four_kind", 7),
            ("straight_flush", 8),
            ("royal_flush", 9),
        ];

        for (category, (name, strength)) in HandCategory::ALL.iter().zip(table) {
            assert_eq!(category.name(), name);
            assert_eq!(category.strength(), strength);
        }
    }

    #[test]
    fn total_order() {
        for (i, a) in HandCategory::ALL.iter().enumerate() {
            for (j, b) in HandCategory::ALL.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{a} vs {b}");
                assert_eq!(a.strength().cmp(&b.strength()), a.cmp(b));
            }
        }

        assert!(HandCategory::Flush > HandCategory::Straight);
        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
        assert!(HandCategory::Pair > HandCategory::HighCard);
    }

    #[test]
    fn precedence_is_strongest_first() {
        let order = HandCategory::precedence().collect::<Vec<_>>();
        assert_eq!(order.len(), 10);
        assert_eq!(order[0], HandCategory::RoyalFlush);
        assert_eq!(order[9], HandCategory::HighCard);
        assert!(order.windows(2).all(|w| w[0] > w[1]));
    }
}
