// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decisions and the sources that make them.
use ahash::AHashMap;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::poker::{Card, Chips, PlayerId};

/// A player decision on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Leave the round.
    Fold,
    /// Check if there is nothing to call, call otherwise.
    CheckOrCall,
    /// Call and raise by the given amount.
    Bet(Chips),
}

impl Decision {
    /// The decision label.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Fold => "fold",
            Decision::CheckOrCall => "check/call",
            Decision::Bet(_) => "bet",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Bet(amount) => write!(f, "bet {amount}"),
            _ => write!(f, "{}", self.label()),
        }
    }
}

/// What a player sees when asked for a decision.
#[derive(Debug, Clone)]
pub struct DecisionRequest<'a> {
    /// The player that has to act.
    pub player_id: PlayerId,
    /// The chips the player has to put in to match the current bet.
    pub call_amount: Chips,
    /// The minimum raise amount.
    pub min_bet: Chips,
    /// The player bank.
    pub chips: Chips,
    /// The pot before this decision.
    pub pot: Chips,
    /// The player hole cards.
    pub hole_cards: Option<[Card; 2]>,
    /// The board cards.
    pub board: &'a [Card],
}

impl DecisionRequest<'_> {
    /// The most the player can raise after calling.
    pub fn max_raise(&self) -> Chips {
        self.chips - self.call_amount
    }
}

/// A source of player decisions.
///
/// The round engine blocks on [DecisionSource::decide] until the source
/// returns, a source must always return a decision.
pub trait DecisionSource {
    /// Returns the decision for the given request.
    fn decide(&mut self, request: &DecisionRequest<'_>) -> Decision;
}

/// The decision sources for the players in a game.
#[derive(Default)]
pub struct DecisionSources {
    sources: AHashMap<PlayerId, Box<dyn DecisionSource>>,
}

impl DecisionSources {
    /// Sets the decision source for a player.
    pub fn insert<S>(&mut self, player_id: PlayerId, source: S)
    where
        S: DecisionSource + 'static,
    {
        self.sources.insert(player_id, Box::new(source));
    }

    /// Removes a player decision source.
    pub fn remove(&mut self, player_id: &PlayerId) -> Option<Box<dyn DecisionSource>> {
        self.sources.remove(player_id)
    }

    /// Checks if a player has a decision source.
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.sources.contains_key(player_id)
    }

    /// The number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Checks if there are no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Asks the player source for a decision.
    pub fn decide(&mut self, request: &DecisionRequest<'_>) -> Result<Decision> {
        let source = self
            .sources
            .get_mut(&request.player_id)
            .ok_or_else(|| anyhow!("No decision source for player {}", request.player_id))?;
        Ok(source.decide(request))
    }
}

impl fmt::Debug for DecisionSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionSources")
            .field("players", &self.sources.keys().collect::<Vec<_>>())
            .finish()
    }
}
