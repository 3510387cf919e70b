// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use blackjack_core::Config;

mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for reproducible shuffles.
    #[clap(long)]
    seed: Option<u64>,
    /// Pause before each dealer card in milliseconds.
    #[clap(long, default_value_t = 600)]
    dealer_delay_ms: u64,
    /// The log level (off, error, warn, info, debug, trace).
    #[clap(long, default_value = "warn")]
    log_level: log::LevelFilter,
    /// The bet offered at the betting prompt.
    #[clap(long, short, default_value_t = 50)]
    bet: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        seed: cli.seed,
        dealer_delay: Duration::from_millis(cli.dealer_delay_ms),
    };

    terminal::run(config, cli.bet)
}
