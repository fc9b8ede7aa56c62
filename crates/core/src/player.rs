// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round player types.
use crate::{
    decision::Decision,
    poker::{Chips, HandCategory, PlayerCards, PlayerId},
};

/// A round player state.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player id.
    pub player_id: PlayerId,
    /// This player nickname.
    pub nickname: String,
    /// This player chips.
    pub chips: Chips,
    /// The player bet in the current betting round.
    pub bet: Chips,
    /// The player decision in the current betting round.
    pub decision: Option<Decision>,
    /// This player private cards.
    pub hole_cards: PlayerCards,
    /// This player is active in the round.
    pub is_active: bool,
    /// The chips won in the last showdown.
    pub winnings: Chips,
    /// The player hand category at showdown.
    pub category: Option<HandCategory>,
}

impl Player {
    /// Creates a new player.
    pub fn new(player_id: PlayerId, nickname: impl Into<String>, chips: Chips) -> Self {
        Self {
            player_id,
            nickname: nickname.into(),
            chips,
            bet: Chips::ZERO,
            decision: None,
            hole_cards: PlayerCards::None,
            is_active: true,
            winnings: Chips::ZERO,
            category: None,
        }
    }

    /// Moves up to `amount` chips from the bank to the bet.
    ///
    /// Returns the chips actually moved, less than `amount` if the player
    /// doesn't have enough chips.
    pub fn put_in(&mut self, amount: Chips) -> Chips {
        let amount = amount.min(self.chips);
        self.chips -= amount;
        self.bet += amount;
        amount
    }

    /// Sets this player in fold state.
    pub fn fold(&mut self) {
        self.is_active = false;
        self.decision = Some(Decision::Fold);
    }

    /// Reset state for a new round.
    pub(crate) fn start_round(&mut self) {
        self.is_active = self.chips > Chips::ZERO;
        self.bet = Chips::ZERO;
        self.decision = None;
        self.hole_cards = PlayerCards::None;
        self.winnings = Chips::ZERO;
        self.category = None;
    }

    /// Clears the betting round state.
    pub(crate) fn end_betting(&mut self) {
        self.bet = Chips::ZERO;
        self.decision = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_in_chips() {
        let mut player = Player::new(PlayerId::new(1), "Alice", Chips::new(100));
        assert_eq!(player.put_in(Chips::new(30)), Chips::new(30));
        assert_eq!(player.chips, Chips::new(70));
        assert_eq!(player.bet, Chips::new(30));

        // Can't put in more than the bank.
        assert_eq!(player.put_in(Chips::new(100)), Chips::new(70));
        assert_eq!(player.chips, Chips::ZERO);
        assert_eq!(player.bet, Chips::new(100));
    }

    #[test]
    fn fold_and_restart() {
        let mut player = Player::new(PlayerId::new(1), "Alice", Chips::new(100));
        player.hole_cards = PlayerCards::Covered;
        player.put_in(Chips::new(10));
        player.fold();
        assert!(!player.is_active);
        assert_eq!(player.decision, Some(Decision::Fold));
        assert_eq!(player.hole_cards, PlayerCards::Covered);

        player.start_round();
        assert_eq!(player.hole_cards, PlayerCards::None);
        assert!(player.is_active);
        assert_eq!(player.bet, Chips::ZERO);
        assert_eq!(player.decision, None);

        // A player with no chips doesn't play.
        player.put_in(Chips::new(90));
        player.start_round();
        assert!(!player.is_active);
    }
}
