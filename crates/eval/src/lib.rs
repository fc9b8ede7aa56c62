// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem hand evaluator.
//!
//! Classifies 5, 6 or 7 cards hands into one of ten [HandCategory] and
//! resolves a showdown between players holding evaluated hands.
//!
//! To use the evaluator pass the player hole cards and the board to
//! [evaluate] and give the evaluated hands to [resolve] to get the winners:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let board = cards("2c 5s 7d 9h Jc");
//! let h1 = evaluate_hole_and_board(&cards("2h 3d"), &board).unwrap();
//! let h2 = evaluate_hole_and_board(&cards("Ah Kd"), &board).unwrap();
//! assert_eq!(h1.category(), HandCategory::Pair);
//! assert_eq!(h2.category(), HandCategory::HighCard);
//!
//! let winners = resolve(&[("p1", h1), ("p2", h2)]).unwrap();
//! assert_eq!(winners, vec!["p1"]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub mod eval;
pub mod showdown;

pub use category::HandCategory;
pub use eval::{EvaluatedHand, evaluate, evaluate_hole_and_board};
pub use showdown::{break_tie, resolve};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, Rank, Suit};

/// Hand evaluation and showdown errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A hand needs at least five cards to be evaluated.
    #[error("a hand needs at least 5 cards, got {0}")]
    TooFewCards(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A showdown needs at least one hand.
    #[error("no hands to resolve")]
    NoHands,
    /// A tie break was called on hands of different categories.
    #[error("tie break on mixed categories, expected {expected} found {found}")]
    MixedCategories {
        /// The category of the first hand.
        expected: HandCategory,
        /// The first category that doesn't match.
        found: HandCategory,
    },
}
