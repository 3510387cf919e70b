// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck sources for new rounds.
use rand::{SeedableRng, rngs::StdRng};
use std::{collections::VecDeque, fmt};

use crate::table::{Card, Deck};

/// Provides a fresh 52 cards deck at the start of each round.
pub trait Shoe: fmt::Debug {
    /// Returns the deck for the next round.
    fn fresh_deck(&mut self) -> Deck;
}

/// A shoe that shuffles every deck with a [StdRng].
#[derive(Debug)]
pub struct RandomShoe {
    rng: StdRng,
}

impl RandomShoe {
    /// Creates a shoe seeded from the given seed or from the OS when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self { rng }
    }
}

impl Shoe for RandomShoe {
    fn fresh_deck(&mut self) -> Deck {
        Deck::new_and_shuffled(&mut self.rng)
    }
}

/// A shoe that deals pre arranged decks, used for reproducible games.
///
/// When all queued decks have been used the shoe returns ordered decks.
#[derive(Debug, Default)]
pub struct StackedShoe {
    decks: VecDeque<Deck>,
}

impl StackedShoe {
    /// Creates a shoe with a deck for each cards sequence.
    pub fn new<I, T>(rounds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[Card]>,
    {
        let decks = rounds
            .into_iter()
            .map(|top| Deck::stacked(top.as_ref()))
            .collect();
        Self { decks }
    }
}

impl Shoe for StackedShoe {
    fn fresh_deck(&mut self) -> Deck {
        self.decks.pop_front().unwrap_or_default()
    }
}
