// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pepper Poker cards CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

pub mod display;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for the deck shuffle, uses OS entropy if not set.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of cards to deal.
    #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=52))]
    cards: u8,
    /// The directory with the cards images.
    #[clap(long, default_value = "images/deck/deck1")]
    deck_dir: PathBuf,
    /// The image between the hole cards and the board.
    #[clap(long, default_value = "images/deck/deck1/blank.png")]
    divider: PathBuf,
    /// Don't insert the divider image.
    #[clap(long)]
    no_divider: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = display::DisplayConfig {
        deck_dir: cli.deck_dir,
        divider: cli.divider,
    };

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    terminal::run(&config, &mut rng, cli.cards as usize, !cli.no_divider)
}
