// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Basic strategy advisor.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recommended player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
}

impl Advice {
    /// The advice label.
    pub fn label(&self) -> &'static str {
        match self {
            Advice::Hit => "HIT",
            Advice::Stand => "STAND",
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommends a move for a player total against the dealer up card value.
///
/// The rules are checked in order:
///
/// ```text
///   hard >= 17      STAND
///   hard <= 11      HIT
///   soft >= 19      STAND
///   soft == 18      STAND against 2..=8, else HIT
///   soft <  18      HIT
///   hard == 12      STAND against 4..=6, else HIT
///   hard 13..=16    STAND against 2..=6, else HIT
/// ```
///
/// The up card value is the card Blackjack value, with an Ace as 11.
pub fn advise(total: u8, soft: bool, dealer_upcard: u8) -> Advice {
    use Advice::*;

    let stand_if = |range: std::ops::RangeInclusive<u8>| {
        if range.contains(&dealer_upcard) {
            Stand
        } else {
            Hit
        }
    };

    match (soft, total) {
        (false, 17..) => Stand,
        (false, ..=11) => Hit,
        (true, 19..) => Stand,
        (true, 18) => stand_if(2..=8),
        (true, ..=17) => Hit,
        (false, 12) => stand_if(4..=6),
        (false, 13..=16) => stand_if(2..=6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_totals() {
        for up in 2..=11 {
            assert_eq!(advise(17, false, up), Advice::Stand);
            assert_eq!(advise(20, false, up), Advice::Stand);
            assert_eq!(advise(4, false, up), Advice::Hit);
            assert_eq!(advise(11, false, up), Advice::Hit);
        }
    }

    #[test]
    fn hard_twelve() {
        assert_eq!(advise(12, false, 3), Advice::Hit);
        assert_eq!(advise(12, false, 4), Advice::Stand);
        assert_eq!(advise(12, false, 6), Advice::Stand);
        assert_eq!(advise(12, false, 7), Advice::Hit);
    }

    #[test]
    fn hard_thirteen_to_sixteen() {
        for total in 13..=16 {
            assert_eq!(advise(total, false, 2), Advice::Stand);
            assert_eq!(advise(total, false, 6), Advice::Stand);
            assert_eq!(advise(total, false, 7), Advice::Hit);
            assert_eq!(advise(total, false, 11), Advice::Hit);
        }
    }

    #[test]
    fn soft_totals() {
        assert_eq!(advise(19, true, 10), Advice::Stand);
        assert_eq!(advise(21, true, 11), Advice::Stand);
        assert_eq!(advise(18, true, 2), Advice::Stand);
        assert_eq!(advise(18, true, 8), Advice::Stand);
        assert_eq!(advise(18, true, 9), Advice::Hit);
        assert_eq!(advise(18, true, 11), Advice::Hit);
        assert_eq!(advise(17, true, 6), Advice::Hit);
        assert_eq!(advise(12, true, 6), Advice::Hit);
    }

    #[test]
    fn hard_nineteen_against_six() {
        // Ten and nine against a six.
        assert_eq!(advise(19, false, 6), Advice::Stand);
    }

    #[test]
    fn single_ace() {
        // A lone Ace is a soft 11.
        assert_eq!(advise(11, true, 6), Advice::Hit);
    }

    #[test]
    fn labels() {
        assert_eq!(Advice::Hit.to_string(), "HIT");
        assert_eq!(Advice::Stand.label(), "STAND");
    }
}
