// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem computer players.
//!
//! A [Bot] decides at random following a [Strategy] table that gives the
//! probability of checking or calling, betting and folding and how much of
//! its bank the bot is willing to bet.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use holdem_core::{Chips, Decision, DecisionRequest, DecisionSource};

/// Nicknames given to computer players.
pub static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Frank", "Mike"];

/// A bot playing strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Mostly checks and calls, small bets.
    Conservative,
    /// Sometimes bets.
    #[default]
    Balanced,
    /// Bets and folds as often as it calls.
    Aggressive,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Strategy; 3] = [
        Strategy::Conservative,
        Strategy::Balanced,
        Strategy::Aggressive,
    ];

    /// The probabilities of (check or call, bet, fold).
    pub fn weights(&self) -> (f64, f64, f64) {
        match self {
            Strategy::Conservative => (0.90, 0.05, 0.05),
            Strategy::Balanced => (0.70, 0.25, 0.05),
            Strategy::Aggressive => (0.34, 0.33, 0.33),
        }
    }

    /// The fraction of the bank the bot may bet on top of the minimum bet.
    pub fn max_bet_fraction(&self) -> f64 {
        match self {
            Strategy::Conservative => 0.05,
            Strategy::Balanced => 0.10,
            Strategy::Aggressive => 0.15,
        }
    }

    /// The strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Conservative => "conservative",
            Strategy::Balanced => "balanced",
            Strategy::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?}, expected conservative, balanced or aggressive")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// A computer player.
#[derive(Debug)]
pub struct Bot {
    strategy: Strategy,
    rng: StdRng,
}

impl Bot {
    /// Creates a bot with the given strategy and random generator.
    pub fn new(strategy: Strategy, rng: StdRng) -> Self {
        Self { strategy, rng }
    }

    /// Creates a bot with a seeded random generator.
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self::new(strategy, StdRng::seed_from_u64(seed))
    }

    /// The bot strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn bet(&mut self, req: &DecisionRequest<'_>) -> Decision {
        // Call if we cannot afford the minimum bet.
        let max_raise = req.max_raise();
        if max_raise < req.min_bet {
            return Decision::CheckOrCall;
        }

        let min_bet = req.min_bet.amount();
        let extra = (req.chips.amount() as f64 * self.strategy.max_bet_fraction()) as u32;
        let amount = self
            .rng
            .random_range(min_bet..=min_bet.saturating_add(extra))
            .min(max_raise.amount());

        Decision::Bet(Chips::new(amount))
    }
}

impl DecisionSource for Bot {
    fn decide(&mut self, req: &DecisionRequest<'_>) -> Decision {
        let (check, bet, _) = self.strategy.weights();

        let p = self.rng.random::<f64>();
        let decision = if p < check {
            Decision::CheckOrCall
        } else if p < check + bet {
            self.bet(req)
        } else {
            Decision::Fold
        };

        debug!(
            "Bot {} {} decision {decision} to call {}",
            req.player_id, self.strategy, req.call_amount
        );

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_core::PlayerId;

    fn request(call_amount: u32, chips: u32) -> DecisionRequest<'static> {
        DecisionRequest {
            player_id: PlayerId::new(1),
            call_amount: Chips::new(call_amount),
            min_bet: Chips::new(4),
            chips: Chips::new(chips),
            pot: Chips::new(20),
            hole_cards: None,
            board: &[],
        }
    }

    #[test]
    fn weights_are_probabilities() {
        for strategy in Strategy::ALL {
            let (check, bet, fold) = strategy.weights();
            assert!((check + bet + fold - 1.0).abs() < 1e-9, "{strategy}");
            assert!(strategy.max_bet_fraction() > 0.0);
        }
    }

    #[test]
    fn parse_strategy() {
        assert_eq!(
            "conservative".parse::<Strategy>().unwrap(),
            Strategy::Conservative
        );
        assert_eq!(" Balanced ".parse::<Strategy>().unwrap(), Strategy::Balanced);
        assert_eq!("AGGRESSIVE".parse::<Strategy>().unwrap(), Strategy::Aggressive);
        assert!("reckless".parse::<Strategy>().is_err());

        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn decisions_follow_weights() {
        const COUNT: usize = 10_000;

        for strategy in Strategy::ALL {
            let mut bot = Bot::with_seed(strategy, 42);
            let req = request(10, 1_000);

            let (mut checks, mut bets, mut folds) = (0, 0, 0);
            for _ in 0..COUNT {
                match bot.decide(&req) {
                    Decision::CheckOrCall => checks += 1,
                    Decision::Bet(_) => bets += 1,
                    Decision::Fold => folds += 1,
                }
            }

            let (check, bet, fold) = strategy.weights();
            let freq = |n: usize| n as f64 / COUNT as f64;
            assert!((freq(checks) - check).abs() < 0.03, "{strategy} checks");
            assert!((freq(bets) - bet).abs() < 0.03, "{strategy} bets");
            assert!((freq(folds) - fold).abs() < 0.03, "{strategy} folds");
        }
    }

    #[test]
    fn bet_amount_range() {
        for strategy in Strategy::ALL {
            let mut bot = Bot::with_seed(strategy, 7);
            let req = request(10, 1_000);
            let max = 4 + (1_000.0 * strategy.max_bet_fraction()) as u32;

            for _ in 0..1_000 {
                if let Decision::Bet(amount) = bot.decide(&req) {
                    assert!(amount >= Chips::new(4), "{strategy} {amount}");
                    assert!(amount <= Chips::new(max), "{strategy} {amount}");
                }
            }
        }
    }

    #[test]
    fn bet_clamped_to_bank() {
        let mut bot = Bot::with_seed(Strategy::Aggressive, 3);

        // After calling 10 there are only 6 chips left.
        let req = request(10, 16);
        for _ in 0..1_000 {
            if let Decision::Bet(amount) = bot.decide(&req) {
                assert!(amount <= Chips::new(6));
            }
        }

        // Cannot afford the minimum bet.
        let req = request(10, 12);
        for _ in 0..1_000 {
            assert!(!matches!(bot.decide(&req), Decision::Bet(_)));
        }
    }

    #[test]
    fn seeded_bots_repeat() {
        let req = request(4, 500);
        let mut b1 = Bot::with_seed(Strategy::Balanced, 99);
        let mut b2 = Bot::with_seed(Strategy::Balanced, 99);
        for _ in 0..100 {
            assert_eq!(b1.decide(&req), b2.decide(&req));
        }
    }
}
