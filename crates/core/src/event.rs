// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Events emitted by game transitions.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    hand::{HandStatus, Score},
    payout::RoundResult,
    table::{Card, Chips},
    view::VisibleCard,
};

/// A game state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bet was placed and a new round dealt.
    RoundStarted {
        /// The base bet.
        bet: Chips,
        /// The bankroll after the bet.
        bankroll: Chips,
    },
    /// A card dealt to a player hand.
    PlayerCard {
        /// The hand index.
        hand: usize,
        /// The card.
        card: Card,
    },
    /// A card dealt to the dealer.
    DealerCard(VisibleCard),
    /// A hand was split.
    HandSplit {
        /// The hand that was split, the new hand follows it.
        hand: usize,
        /// The bet for the new hand.
        bet: Chips,
    },
    /// A hand reached a final status.
    HandFinished {
        /// The hand index.
        hand: usize,
        /// The final status.
        status: HandStatus,
        /// The final score.
        score: Score,
    },
    /// The dealer turned the hole card.
    HoleRevealed(Card),
    /// The round was settled.
    RoundResolved(RoundResult),
    /// The bankroll is empty.
    GameOver,
    /// The bankroll was refilled.
    BankrollRefilled(Chips),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::RoundStarted { bet, bankroll } => {
                write!(f, "Bet ${bet}, bankroll ${bankroll}")
            }
            GameEvent::PlayerCard { hand, card } => write!(f, "Hand {} gets {card}", hand + 1),
            GameEvent::DealerCard(VisibleCard::Covered) => write!(f, "Dealer gets a hole card"),
            GameEvent::DealerCard(VisibleCard::Up(card)) => write!(f, "Dealer gets {card}"),
            GameEvent::HandSplit { hand, bet } => {
                write!(f, "Hand {} split, new hand bet ${bet}", hand + 1)
            }
            GameEvent::HandFinished {
                hand,
                status,
                score,
            } => write!(f, "Hand {} {} with {score}", hand + 1, status.label()),
            GameEvent::HoleRevealed(card) => write!(f, "Dealer reveals {card}"),
            GameEvent::RoundResolved(result) => {
                write!(f, "{} (paid ${})", result.outcome, result.payout)
            }
            GameEvent::GameOver => write!(f, "GAME OVER"),
            GameEvent::BankrollRefilled(chips) => write!(f, "Bankroll refilled to ${chips}"),
        }
    }
}
