// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round state snapshots handed to renderers.
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::poker::{Card, Chips, HandCategory, PlayerCards, PlayerId};

/// A player as seen by the round viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// The player id.
    pub player_id: PlayerId,
    /// The player nickname.
    pub nickname: String,
    /// The player bank.
    pub chips: Chips,
    /// The player bet in the current betting round.
    pub bet: Chips,
    /// The player cards, covered if the viewer is not allowed to see them.
    pub cards: PlayerCards,
    /// The player is still in the round.
    pub is_active: bool,
    /// The chips won at showdown.
    pub winnings: Chips,
    /// The hand category at showdown.
    pub category: Option<HandCategory>,
}

/// An immutable view of a round after a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The pot.
    pub pot: Chips,
    /// The board cards.
    pub board: Vec<Card>,
    /// The players in seating order.
    pub players: Vec<PlayerSnapshot>,
    /// The round result once the round is complete.
    pub result: Option<String>,
}

impl Snapshot {
    /// Checks if the round has a result.
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Returns a player snapshot.
    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// The chips in play, the players banks plus the pot.
    pub fn total_chips(&self) -> Chips {
        self.pot + self.players.iter().map(|p| p.chips).sum::<Chips>()
    }
}

/// A sink for round snapshots.
pub trait RenderSink {
    /// Renders a snapshot.
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}
