// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use thiserror::Error;

use crate::game_state::{Action, Phase};

/// A rejected bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet input is not an integer.
    #[error("please enter a valid number")]
    NotANumber,
    /// The bet is zero or negative.
    #[error("bet must be positive")]
    NonPositive,
    /// The bet is more than the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// A rejected split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The active hand is not two cards of the same value.
    #[error("only two cards of the same value can be split")]
    NotAPair,
    /// The player already has the maximum number of hands.
    #[error("maximum {0} hands allowed")]
    MaxHandsReached(usize),
    /// The bankroll cannot cover another base bet.
    #[error("insufficient funds to split")]
    InsufficientFunds,
}

/// A game error.
///
/// Bet and split errors are recoverable and leave the game unchanged, an
/// invalid phase or an exhausted deck signal a caller or game logic bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The split was rejected.
    #[error(transparent)]
    Split(#[from] SplitError),
    /// The action is not valid in the current phase.
    #[error("cannot {action} during {phase}")]
    InvalidPhase {
        /// The requested action.
        action: Action,
        /// The game phase.
        phase: Phase,
    },
    /// No cards left to deal.
    #[error("the deck is exhausted")]
    DeckExhausted,
}

impl GameError {
    /// Checks if the error is a rejected input that leaves the game unchanged.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Bet(_) | GameError::Split(_))
    }
}

/// Parses a bet from user input.
///
/// Surrounding whitespace is ignored, the bet range is checked when the bet is
/// placed.
pub fn parse_bet(input: &str) -> Result<i64, BetError> {
    input.trim().parse::<i64>().map_err(|_| BetError::NotANumber)
}
