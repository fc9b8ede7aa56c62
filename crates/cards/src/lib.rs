// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10d".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards, the deck takes the random
//! number generator as a parameter so that a seeded generator gives the same
//! sequence of cards:
//!
//! ```
//! # use holdem_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! assert_eq!(d1.deal().unwrap(), d2.deal().unwrap());
//! assert_eq!(d1.count(), Deck::SIZE - 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;

pub use cards::{Card, Rank, Suit};
pub use deck::Deck;

/// Errors building cards or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The rank text or index is not a card rank.
    #[error("invalid card rank {0:?}")]
    InvalidRank(String),
    /// The suit text is not a card suit.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(String),
    /// The card text is not a rank followed by a suit.
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    /// Tried to deal from a deck with no cards left.
    #[error("deal from an empty deck")]
    EmptyDeck,
}
