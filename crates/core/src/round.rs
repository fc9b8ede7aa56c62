// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The betting round engine.
//!
//! A [Round] drives one hand from the blinds to the showdown. Each step is a
//! method call that must be made in order:
//!
//! 1. [Round::set_up_round] shuffles the deck and posts the blinds.
//! 2. [Round::deal_hand] deals two hole cards to each active player.
//! 3. [Round::take_bets] runs the pre-flop betting.
//! 4. [Round::deal_flop], [Round::deal_turn], [Round::deal_river] each deal
//!    the board cards and are followed by [Round::take_bets].
//! 5. [Round::finish_round] evaluates the hands and pays the pot.
//!
//! If all players but one fold the round completes at once and every
//! following step returns the final snapshot.
use anyhow::{Result, bail};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use std::fmt;

use holdem_eval::{evaluate_hole_and_board, resolve};

use crate::{
    decision::{Decision, DecisionRequest, DecisionSources},
    player::Player,
    poker::{Blinds, Card, Chips, Deck, PlayerCards, PlayerId},
    snapshot::{PlayerSnapshot, Snapshot},
};

/// The round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The round has not started yet.
    NotStarted,
    /// The blinds have been posted.
    Blinds,
    /// The hole cards have been dealt.
    HoleCards,
    /// The flop has been dealt.
    Flop,
    /// The turn has been dealt.
    Turn,
    /// The river has been dealt.
    River,
    /// The pot has been paid.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Blinds => "blinds",
            Phase::HoleCards => "hole cards",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Complete => "complete",
        };

        write!(f, "{name}")
    }
}

/// A single round of Holdem.
#[derive(Debug)]
pub struct Round {
    players: Vec<Player>,
    blinds: Blinds,
    small_blind: usize,
    big_blind: usize,
    phase: Phase,
    bets_taken: bool,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    viewer: Option<PlayerId>,
    result: Option<String>,
    rng: StdRng,
}

impl Round {
    /// Creates a round for the players in seating order.
    ///
    /// The small blind is posted by the first player with chips at or after
    /// the `small_blind` seat, the big blind by the next one.
    pub fn new(players: Vec<Player>, blinds: Blinds, small_blind: usize, rng: StdRng) -> Self {
        let small_blind = small_blind.checked_rem(players.len()).unwrap_or_default();
        Self {
            players,
            blinds,
            small_blind,
            big_blind: small_blind,
            phase: Phase::NotStarted,
            bets_taken: false,
            deck: Deck::default(),
            board: Vec::with_capacity(5),
            pot: Chips::ZERO,
            viewer: None,
            result: None,
            rng,
        }
    }

    /// Sets the player whose hole cards are visible in snapshots.
    pub fn set_viewer(&mut self, player_id: PlayerId) {
        self.viewer = Some(player_id);
    }

    /// The round phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The round blinds.
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    /// The pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The seat that posted the small blind.
    pub fn small_blind_seat(&self) -> usize {
        self.small_blind
    }

    /// The seat that posted the big blind.
    pub fn big_blind_seat(&self) -> usize {
        self.big_blind
    }

    /// Returns the players.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// Shuffles the deck and posts the blinds.
    pub fn set_up_round(&mut self) -> Result<Snapshot> {
        match self.phase {
            Phase::Complete => return Ok(self.snapshot()),
            Phase::NotStarted => {}
            phase => bail!("Cannot set up the round in phase {phase}"),
        }

        self.players.iter_mut().for_each(Player::start_round);

        let active = self.count_active();
        if active < 2 {
            bail!("A round needs at least 2 players with chips, found {active}");
        }

        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.board.clear();
        self.pot = Chips::ZERO;

        self.small_blind = self.next_active(self.small_blind);
        self.big_blind = self.next_active(self.small_blind + 1);
        self.post_blind(self.small_blind, self.blinds.small, "small");
        self.post_blind(self.big_blind, self.blinds.big, "big");

        self.phase = Phase::Blinds;
        Ok(self.snapshot())
    }

    /// Deals two hole cards to each active player.
    pub fn deal_hand(&mut self) -> Result<Snapshot> {
        match self.phase {
            Phase::Complete => return Ok(self.snapshot()),
            Phase::Blinds => {}
            phase => bail!("Cannot deal hole cards in phase {phase}"),
        }

        for player in self.players.iter_mut().filter(|p| p.is_active) {
            let (c1, c2) = (self.deck.deal()?, self.deck.deal()?);
            player.hole_cards = PlayerCards::sorted(c1, c2);
        }

        info!("Dealt hole cards to {} players", self.count_active());

        self.phase = Phase::HoleCards;
        self.bets_taken = false;
        Ok(self.snapshot())
    }

    /// Deals the three flop cards.
    pub fn deal_flop(&mut self) -> Result<Snapshot> {
        self.deal_board(Phase::HoleCards, Phase::Flop, 3)
    }

    /// Deals the turn card.
    pub fn deal_turn(&mut self) -> Result<Snapshot> {
        self.deal_board(Phase::Flop, Phase::Turn, 1)
    }

    /// Deals the river card.
    pub fn deal_river(&mut self) -> Result<Snapshot> {
        self.deal_board(Phase::Turn, Phase::River, 1)
    }

    /// Runs a betting round asking each player for a decision.
    ///
    /// Pre-flop the first player to act is the one after the big blind, on
    /// the other streets the first active player from the small blind. The
    /// betting ends when all active players have matched the highest bet and
    /// have made a decision, or when only one player is left, in which case
    /// the round completes and the last player takes the pot.
    pub fn take_bets(&mut self, sources: &mut DecisionSources) -> Result<Snapshot> {
        match self.phase {
            Phase::Complete => return Ok(self.snapshot()),
            Phase::HoleCards | Phase::Flop | Phase::Turn | Phase::River if !self.bets_taken => {}
            phase => bail!("Cannot take bets in phase {phase}"),
        }

        let mut seat = if self.phase == Phase::HoleCards {
            self.next_active(self.big_blind + 1)
        } else {
            self.next_active(self.small_blind)
        };

        let start_pot = self.pot;

        while self.count_active() > 1 {
            let current_bet = self.current_bet();
            if self.is_betting_complete(current_bet) {
                break;
            }

            self.player_turn(seat, current_bet, sources)?;
            seat = self.next_active(seat + 1);
        }

        self.players.iter_mut().for_each(Player::end_betting);
        self.bets_taken = true;

        info!(
            "Betting on {} done, pot {} collected {}",
            self.phase,
            self.pot,
            self.pot - start_pot
        );

        if self.count_active() < 2 {
            return self.showdown();
        }

        Ok(self.snapshot())
    }

    /// Evaluates the active players hands and pays the winners.
    pub fn finish_round(&mut self) -> Result<Snapshot> {
        match self.phase {
            Phase::Complete => Ok(self.snapshot()),
            Phase::River if self.bets_taken => self.showdown(),
            phase => bail!("Cannot finish the round in phase {phase}"),
        }
    }

    /// Returns a snapshot of the round as seen by the viewer.
    ///
    /// The viewer hole cards are always visible, other players cards are
    /// covered until the round completes, then all dealt hands are shown.
    pub fn snapshot(&self) -> Snapshot {
        let complete = self.phase == Phase::Complete;
        let players = self
            .players
            .iter()
            .map(|p| {
                let visible = complete || self.viewer == Some(p.player_id);
                PlayerSnapshot {
                    player_id: p.player_id,
                    nickname: p.nickname.clone(),
                    chips: p.chips,
                    bet: p.bet,
                    cards: if visible {
                        p.hole_cards
                    } else {
                        p.hole_cards.covered()
                    },
                    is_active: p.is_active,
                    winnings: p.winnings,
                    category: p.category,
                }
            })
            .collect();

        Snapshot {
            pot: self.pot,
            board: self.board.clone(),
            players,
            result: self.result.clone(),
        }
    }

    fn deal_board(&mut self, expected: Phase, next: Phase, count: usize) -> Result<Snapshot> {
        if self.phase == Phase::Complete {
            return Ok(self.snapshot());
        }

        if self.phase != expected {
            bail!("Cannot deal the {next} in phase {}", self.phase);
        }

        if !self.bets_taken {
            bail!("Cannot deal the {next} before the {} betting", self.phase);
        }

        for _ in 0..count {
            let card = self.deck.deal()?;
            self.board.push(card);
        }

        info!("Dealt the {next}, board {}", format_cards(&self.board));

        self.phase = next;
        self.bets_taken = false;
        Ok(self.snapshot())
    }

    fn post_blind(&mut self, seat: usize, amount: Chips, name: &str) {
        let player = &mut self.players[seat];
        let posted = player.put_in(amount);
        if posted < amount {
            warn!(
                "Player {} posted {posted} for the {name} blind of {amount}",
                player.nickname
            );
        } else {
            info!("Player {} posted the {name} blind {posted}", player.nickname);
        }

        self.pot += posted;
    }

    fn player_turn(
        &mut self,
        seat: usize,
        current_bet: Chips,
        sources: &mut DecisionSources,
    ) -> Result<()> {
        let player = &self.players[seat];
        let call_amount = current_bet - player.bet;

        // Players that cannot call fold whatever they would decide.
        if call_amount > player.chips {
            info!(
                "Player {} cannot call {call_amount} with {} and folds",
                player.nickname, player.chips
            );
            self.players[seat].fold();
            return Ok(());
        }

        let request = DecisionRequest {
            player_id: player.player_id,
            call_amount,
            min_bet: self.blinds.big,
            chips: player.chips,
            pot: self.pot,
            hole_cards: player.hole_cards.cards(),
            board: &self.board,
        };

        debug!("Request {request:?}");
        let decision = sources.decide(&request)?;

        let player = &mut self.players[seat];
        match decision {
            Decision::Fold => {
                player.fold();
                info!("Player {} folds", player.nickname);
            }
            Decision::CheckOrCall => {
                let paid = player.put_in(call_amount);
                self.pot += paid;
                player.decision = Some(Decision::CheckOrCall);

                if paid > Chips::ZERO {
                    info!("Player {} calls {paid}", player.nickname);
                } else {
                    info!("Player {} checks", player.nickname);
                }
            }
            Decision::Bet(amount) => {
                let paid = player.put_in(call_amount);
                let raise = player.put_in(amount);
                self.pot += paid + raise;

                if raise < amount {
                    warn!(
                        "Player {} bet {amount} clamped to {raise}",
                        player.nickname
                    );
                }

                if raise == Chips::ZERO {
                    player.decision = Some(Decision::CheckOrCall);
                    info!("Player {} calls {paid}", player.nickname);
                } else {
                    player.decision = Some(Decision::Bet(raise));
                    info!(
                        "Player {} raises by {raise} for a total of {}",
                        player.nickname, player.bet
                    );
                }
            }
        }

        Ok(())
    }

    fn showdown(&mut self) -> Result<Snapshot> {
        let active = (0..self.players.len())
            .filter(|&seat| self.players[seat].is_active)
            .collect::<Vec<_>>();

        let winners = if let [seat] = active[..] {
            vec![seat]
        } else {
            let mut hands = Vec::with_capacity(active.len());
            for seat in active {
                let player = &mut self.players[seat];
                let Some(cards) = player.hole_cards.cards() else {
                    bail!("Player {} has no cards at showdown", player.nickname);
                };

                let hand = evaluate_hole_and_board(&cards, &self.board)?;
                debug!(
                    "Player {} has {} {:?}",
                    player.nickname,
                    hand.category(),
                    hand.key()
                );

                player.category = Some(hand.category());
                hands.push((seat, hand));
            }

            resolve(&hands)?
        };

        let pot = self.pot;
        let count = winners.len() as u32;
        if count == 0 {
            bail!("No winners for a pot of {pot}");
        }

        // The chips left from an uneven split go one each to the winners in
        // seating order.
        let share = pot / count;
        let remainder = (pot % count).amount() as usize;
        for (idx, &seat) in winners.iter().enumerate() {
            let amount = if idx < remainder {
                share + Chips::new(1)
            } else {
                share
            };

            let player = &mut self.players[seat];
            player.chips += amount;
            player.winnings = amount;
            info!("Player {} wins {amount}", player.nickname);
        }

        self.result = Some(self.result_text(pot, &winners));
        self.pot = Chips::ZERO;
        self.phase = Phase::Complete;
        Ok(self.snapshot())
    }

    fn result_text(&self, pot: Chips, winners: &[usize]) -> String {
        let mut text = format!("The final pot was {pot}\nThe winners are:");
        for &seat in winners {
            let player = &self.players[seat];
            text.push_str(&format!("\n {} wins {}", player.nickname, player.winnings));
            if let Some(category) = player.category {
                text.push_str(&format!(" with {}", category.label()));
            }
        }

        text
    }

    fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.is_active).count()
    }

    fn current_bet(&self) -> Chips {
        self.players
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.bet)
            .max()
            .unwrap_or_default()
    }

    fn is_betting_complete(&self, current_bet: Chips) -> bool {
        self.players
            .iter()
            .filter(|p| p.is_active)
            .all(|p| p.bet == current_bet && p.decision.is_some())
    }

    /// Returns the first active seat at or after `seat`, wrapping around the
    /// table, or `seat` if no player is active.
    fn next_active(&self, seat: usize) -> usize {
        let count = self.players.len();
        (0..count)
            .map(|offset| (seat + offset) % count)
            .find(|&idx| self.players[idx].is_active)
            .unwrap_or(seat)
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
