// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pacing of the dealer draws.
use std::{fmt, thread, time::Duration};

use crate::view::DealerView;

/// Pauses the game between dealer draws.
///
/// Pacing is for presentation only and never changes the game outcome. A
/// front-end can show the dealer cards before waiting.
pub trait Pacer: fmt::Debug {
    /// Waits for the given delay before the next dealer card, `dealer` has the
    /// dealer cards dealt so far with the hole card turned.
    fn pause(&mut self, delay: Duration, dealer: &DealerView);
}

/// Blocks the current thread for the delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration, _dealer: &DealerView) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Does not wait.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _delay: Duration, _dealer: &DealerView) {}
}
