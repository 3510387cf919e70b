// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack game core: hand scoring, the round state machine and the
//! strategy advisor.
//!
//! ```
//! use blackjack_core::{Config, GameState, Phase};
//!
//! let config = Config {
//!     seed: Some(7),
//!     dealer_delay: std::time::Duration::ZERO,
//! };
//!
//! let mut game = GameState::new(config);
//! game.place_bet(50).unwrap();
//!
//! while game.phase() == Phase::PlayerTurn {
//!     game.stand().unwrap();
//! }
//!
//! assert!(matches!(game.phase(), Phase::Resolved | Phase::GameOver));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod advisor;
pub mod error;
pub mod event;
pub mod game_state;
pub mod hand;
pub mod pacing;
pub mod payout;
pub mod shoe;
pub mod table;
pub mod view;

pub use advisor::Advice;
pub use error::{BetError, GameError, SplitError};
pub use game_state::{Action, Config, GameState, Phase};
