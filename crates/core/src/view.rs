// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Read only table snapshots for a presentation layer.
use serde::{Deserialize, Serialize};

use crate::{
    game_state::Phase,
    hand::{HandStatus, Score},
    payout::RoundResult,
    table::{Card, Chips},
};

/// A card as seen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCard {
    /// The card is face down.
    Covered,
    /// The card is face up.
    Up(Card),
}

/// The dealer cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerView {
    /// The dealer cards with the hole card first.
    pub cards: Vec<VisibleCard>,
    /// The dealer score, only when the hole card is visible.
    pub score: Option<Score>,
}

/// A player hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    /// The hand cards.
    pub cards: Vec<Card>,
    /// The hand bet.
    pub bet: Chips,
    /// The hand status.
    pub status: HandStatus,
    /// The hand score.
    pub score: Score,
}

/// A snapshot of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// The game phase.
    pub phase: Phase,
    /// The player bankroll.
    pub bankroll: Chips,
    /// The base bet for the round.
    pub base_bet: Chips,
    /// The dealer cards.
    pub dealer: DealerView,
    /// The player hands in play order.
    pub hands: Vec<HandView>,
    /// The hand the player is acting on.
    pub current_hand: Option<usize>,
    /// Cards left in the deck.
    pub cards_left: usize,
    /// The result of the last settled round.
    pub last_result: Option<RoundResult>,
}
