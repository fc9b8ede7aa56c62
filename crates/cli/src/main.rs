// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, error};
use std::io;

use holdem_bot::{Bot, Strategy};
use holdem_core::{Blinds, Chips};

pub mod game;
pub mod prompt;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of computer players.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    bots: u8,
    /// Computer players strategy, repeat to assign strategies in order.
    #[clap(long, short)]
    strategy: Vec<Strategy>,
    /// Starting chips for each player.
    #[clap(long, short, default_value_t = 1000)]
    chips: u32,
    /// The first round small blind.
    #[clap(long, default_value_t = 2)]
    small_blind: u32,
    /// The first round big blind.
    #[clap(long, default_value_t = 4)]
    big_blind: u32,
    /// Amount added to the blinds after each round.
    #[clap(long, default_value_t = 2)]
    blind_increment: u32,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
    /// Maximum number of rounds to play.
    #[clap(long, short)]
    rounds: Option<u32>,
    /// Let a bot play in place of the human player.
    #[clap(long, short)]
    auto: bool,
    /// The human player nickname.
    #[clap(long, short, default_value = "You")]
    nickname: String,
    /// Log level, RUST_LOG overrides it.
    #[clap(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = game::Config {
        bots: cli.bots,
        strategies: cli.strategy,
        chips: Chips::new(cli.chips),
        blinds: Blinds::new(cli.small_blind, cli.big_blind),
        blind_increment: Chips::new(cli.blind_increment),
        seed: cli.seed,
        rounds: cli.rounds,
        auto: cli.auto,
        nickname: cli.nickname,
    };

    if let Err(e) = run(config) {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: game::Config) -> Result<()> {
    config.validate()?;

    let sink = terminal::TerminalRenderer::new(io::stdout(), !config.auto);
    let mut game = game::Game::new(&config, sink);

    if config.auto {
        let seed = config.seed.unwrap_or_else(rand::random);
        game.add_player(&config.nickname, Bot::with_seed(Strategy::Balanced, seed));
    } else {
        let human = prompt::HumanPlayer::new(io::stdin().lock(), io::stdout());
        let player_id = game.add_player(&config.nickname, human);
        game.set_viewer(player_id);
    }

    game.add_bots(config.bots, &config.strategies);
    game.run()?;

    match game.players() {
        [winner] => println!(
            "\n{} wins the game with {} chips after {} rounds!",
            winner.nickname,
            winner.chips,
            game.rounds()
        ),
        [] => println!("\nNo players left after {} rounds.", game.rounds()),
        players => {
            println!("\nGame stopped after {} rounds:", game.rounds());
            for p in players {
                println!("  {:<10} {}", p.nickname, p.chips);
            }
        }
    }

    Ok(())
}
