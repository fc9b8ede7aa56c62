// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem round engine.
//!
//! The engine runs a single round of Texas Holdem: it posts the blinds, deals
//! the cards, collects bets from the players [DecisionSource]s and pays the
//! pot to the showdown winners. After each step it returns a [Snapshot] that
//! can be given to a [RenderSink].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod decision;
pub mod player;
pub mod poker;
pub mod round;
pub mod snapshot;

pub use decision::{Decision, DecisionRequest, DecisionSource, DecisionSources};
pub use player::Player;
pub use poker::{Blinds, Card, Chips, Deck, HandCategory, PlayerCards, PlayerId, Rank, Suit};
pub use round::{Phase, Round};
pub use snapshot::{PlayerSnapshot, RenderSink, Snapshot};
