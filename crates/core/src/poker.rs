// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Holdem round.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use holdem_eval::{Card, Deck, EvaluatedHand, HandCategory, Rank, Suit};

/// A player identifier, unique within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id integer value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chips amount.
///
/// Subtraction saturates at zero so a bank can never go negative.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl ops::Rem<u32> for Chips {
    type Output = Self;

    fn rem(self, rhs: u32) -> Self::Output {
        Self(self.0 % rhs)
    }
}

impl std::iter::Sum for Chips {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// The blinds amounts for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    /// The small blind.
    pub small: Chips,
    /// The big blind, also the minimum bet.
    pub big: Chips,
}

impl Blinds {
    /// Creates blinds with the given amounts.
    pub fn new(small: impl Into<Chips>, big: impl Into<Chips>) -> Self {
        Self {
            small: small.into(),
            big: big.into(),
        }
    }

    /// Returns these blinds with both amounts increased by `increment`.
    pub fn increased_by(self, increment: impl Into<Chips>) -> Self {
        let increment = increment.into();
        Self {
            small: self.small + increment,
            big: self.big + increment,
        }
    }
}

impl fmt::Display for Blinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}

/// The player cards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCards {
    /// The player has no cards.
    #[default]
    None,
    /// The player has cards but their values are covered.
    Covered,
    /// The player cards.
    Cards(Card, Card),
}

impl PlayerCards {
    /// Sorts two cards by rank.
    pub fn sorted(c1: Card, c2: Card) -> Self {
        if c1.rank() <= c2.rank() {
            PlayerCards::Cards(c1, c2)
        } else {
            PlayerCards::Cards(c2, c1)
        }
    }

    /// Returns the cards if they are visible.
    pub fn cards(&self) -> Option<[Card; 2]> {
        match self {
            PlayerCards::Cards(c1, c2) => Some([*c1, *c2]),
            _ => None,
        }
    }

    /// Returns covered cards if there are any cards.
    pub fn covered(&self) -> Self {
        match self {
            PlayerCards::None => PlayerCards::None,
            _ => PlayerCards::Covered,
        }
    }
}
