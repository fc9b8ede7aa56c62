// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The game sequencer.
//!
//! Seats the players, then plays rounds rotating the blinds until there is
//! only one player left with chips.
use anyhow::{Result, bail};
use log::{info, warn};
use rand::prelude::*;

use holdem_bot::{Bot, NICKNAMES, Strategy};
use holdem_core::{
    Blinds, Chips, DecisionSource, DecisionSources, Player, PlayerId, RenderSink, Round,
    Snapshot,
};

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of computer players.
    pub bots: u8,
    /// Computer players strategies, cycled over the bots.
    pub strategies: Vec<Strategy>,
    /// The players starting chips.
    pub chips: Chips,
    /// The first round blinds.
    pub blinds: Blinds,
    /// Added to the blinds after each round.
    pub blind_increment: Chips,
    /// Seed for all random generators.
    pub seed: Option<u64>,
    /// Maximum number of rounds to play.
    pub rounds: Option<u32>,
    /// Replace the human player with a bot.
    pub auto: bool,
    /// The human player nickname.
    pub nickname: String,
}

impl Config {
    /// Checks the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.blinds.small == Chips::ZERO || self.blinds.big < self.blinds.small {
            bail!(
                "Invalid blinds {}, the big blind must be at least the small blind",
                self.blinds
            );
        }

        if self.chips <= self.blinds.big {
            bail!(
                "Starting chips {} must be more than the big blind {}",
                self.chips,
                self.blinds.big
            );
        }

        Ok(())
    }
}

type Step = fn(&mut Round, &mut DecisionSources) -> Result<Snapshot>;

/// A game between a human player and bots.
pub struct Game<S> {
    players: Vec<Player>,
    sources: DecisionSources,
    sink: S,
    chips: Chips,
    blinds: Blinds,
    blind_increment: Chips,
    max_rounds: Option<u32>,
    rounds: u32,
    viewer: Option<PlayerId>,
    rng: StdRng,
}

impl<S: RenderSink> Game<S> {
    /// Creates a game with no players.
    pub fn new(config: &Config, sink: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            players: Vec::new(),
            sources: DecisionSources::default(),
            sink,
            chips: config.chips,
            blinds: config.blinds,
            blind_increment: config.blind_increment,
            max_rounds: config.rounds,
            rounds: 0,
            viewer: None,
            rng,
        }
    }

    /// Adds a player and its decision source.
    pub fn add_player<D>(&mut self, nickname: &str, source: D) -> PlayerId
    where
        D: DecisionSource + 'static,
    {
        let player_id = PlayerId::new(self.players.len() as u32 + 1);
        self.players.push(Player::new(player_id, nickname, self.chips));
        self.sources.insert(player_id, source);
        player_id
    }

    /// Adds `count` bots cycling over the strategies.
    pub fn add_bots(&mut self, count: u8, strategies: &[Strategy]) {
        let default = [Strategy::default()];
        let strategies = if strategies.is_empty() {
            &default[..]
        } else {
            strategies
        };

        for (idx, strategy) in strategies.iter().cycle().take(count as usize).enumerate() {
            let bot = Bot::new(*strategy, StdRng::from_rng(&mut self.rng));
            let nickname = NICKNAMES[idx % NICKNAMES.len()];
            info!("Adding {strategy} bot {nickname}");
            self.add_player(nickname, bot);
        }
    }

    /// Sets the player whose cards are shown.
    pub fn set_viewer(&mut self, player_id: PlayerId) {
        self.viewer = Some(player_id);
    }

    /// The players still in the game.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The number of rounds played.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The current blinds.
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plays rounds until one player is left or the rounds limit is reached.
    pub fn run(&mut self) -> Result<()> {
        if self.players.len() < 2 {
            bail!("A game needs at least 2 players, found {}", self.players.len());
        }

        self.players.shuffle(&mut self.rng);
        info!(
            "Seating order {}",
            self.players
                .iter()
                .map(|p| p.nickname.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        while self.players.len() > 1 {
            if self.max_rounds.is_some_and(|max| self.rounds >= max) {
                info!("Stopping after {} rounds", self.rounds);
                break;
            }

            let small_blind = self.rounds as usize % self.players.len();
            self.rounds += 1;
            self.play_round(small_blind)?;

            self.blinds = self.blinds.increased_by(self.blind_increment);
            self.eliminate_players();
        }

        Ok(())
    }

    fn play_round(&mut self, small_blind: usize) -> Result<()> {
        info!("Round {} blinds {}", self.rounds, self.blinds);

        let players = std::mem::take(&mut self.players);
        let rng = StdRng::from_rng(&mut self.rng);
        let mut round = Round::new(players, self.blinds, small_blind, rng);
        if let Some(viewer) = self.viewer {
            round.set_viewer(viewer);
        }

        let res = self.play_steps(&mut round);
        self.players = round.into_players();
        res
    }

    fn play_steps(&mut self, round: &mut Round) -> Result<()> {
        let steps: [Step; 10] = [
            |round, _| round.set_up_round(),
            |round, _| round.deal_hand(),
            |round, sources| round.take_bets(sources),
            |round, _| round.deal_flop(),
            |round, sources| round.take_bets(sources),
            |round, _| round.deal_turn(),
            |round, sources| round.take_bets(sources),
            |round, _| round.deal_river(),
            |round, sources| round.take_bets(sources),
            |round, _| round.finish_round(),
        ];

        for step in steps {
            let snapshot = step(round, &mut self.sources)?;
            if let Err(e) = self.sink.render(&snapshot) {
                warn!("Render failed: {e}");
            }

            if snapshot.is_complete() {
                break;
            }
        }

        Ok(())
    }

    /// Removes players that cannot pay the big blind.
    fn eliminate_players(&mut self) {
        let big_blind = self.blinds.big;
        let (remaining, eliminated) = std::mem::take(&mut self.players)
            .into_iter()
            .partition::<Vec<_>, _>(|p| p.chips > big_blind);

        for player in eliminated {
            info!(
                "Player {} eliminated with {} chips",
                player.nickname, player.chips
            );
            self.sources.remove(&player.player_id);
        }

        self.players = remaining;
    }
}
