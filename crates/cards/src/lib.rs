// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use blackjack_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.value() + kd.value(), 21);
//! ```
//!
//! and a [Deck] type that deals cards from a shuffled 52 cards deck:
//!
//! ```
//! # use blackjack_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal();
//! assert!(card.is_some());
//! assert_eq!(deck.len(), Deck::SIZE - 1);
//! ```
//!
//! For reproducible games [Deck::stacked] puts a given sequence of cards on top
//! of the deck, the first card in the slice is the first card dealt:
//!
//! ```
//! # use blackjack_cards::{Card, Deck, Rank, Suit};
//! let top = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//! let mut deck = Deck::stacked(&top);
//! assert_eq!(deck.len(), Deck::SIZE);
//! assert_eq!(deck.deal(), Some(top[0]));
//! assert_eq!(deck.deal(), Some(top[1]));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
