// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scoring.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::{Card, Chips};

/// The score of a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// The best total for the hand.
    pub total: u8,
    /// The total counts an Ace as 11.
    pub soft: bool,
}

impl Score {
    /// The highest total that is not a bust.
    pub const BLACKJACK: u8 = 21;

    /// Checks if the total is over 21.
    pub fn is_bust(&self) -> bool {
        self.total > Self::BLACKJACK
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.soft {
            write!(f, "soft {}", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// Scores a sequence of cards.
///
/// Aces count 11 and are demoted to 1, one at a time, while the total is over
/// 21. The score is soft when at least one Ace is still counted as 11.
pub fn score(cards: &[Card]) -> Score {
    let mut total = 0u16;
    let mut aces = 0;

    for card in cards {
        total += u16::from(card.value());
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > u16::from(Score::BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let total = u8::try_from(total).unwrap_or(u8::MAX);
    Score {
        total,
        soft: aces > 0 && total <= Score::BLACKJACK,
    }
}

/// Checks if the cards are a two cards 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards).total == Score::BLACKJACK
}

/// The status of a player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandStatus {
    /// The player can act on this hand.
    Active,
    /// The player stood.
    Stand,
    /// The hand went over 21.
    Bust,
    /// The hand hit 21 with its first two cards.
    Blackjack,
}

impl HandStatus {
    /// The status label.
    pub fn label(&self) -> &'static str {
        match self {
            HandStatus::Active => "ACTIVE",
            HandStatus::Stand => "STAND",
            HandStatus::Bust => "BUST",
            HandStatus::Blackjack => "BLACKJACK",
        }
    }
}

/// A player hand with its own bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// The hand cards in dealing order.
    pub cards: Vec<Card>,
    /// The chips wagered on this hand.
    pub bet: Chips,
    /// The hand status.
    pub status: HandStatus,
}

impl Hand {
    /// Creates an active hand.
    pub fn new(cards: Vec<Card>, bet: Chips) -> Self {
        Self {
            cards,
            bet,
            status: HandStatus::Active,
        }
    }

    /// This hand score.
    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    /// Checks if the hand is two cards with the same Blackjack value.
    ///
    /// Ten and face cards all count 10 so any two of them are a pair.
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [c1, c2] if c1.value() == c2.value())
    }

    /// Checks if the player can still act on this hand.
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|r| Card::new(*r, Suit::Hearts)).collect()
    }

    #[test]
    fn empty_hand() {
        assert_eq!(score(&[]), Score::default());
        assert!(!score(&[]).soft);
    }

    #[test]
    fn hard_totals() {
        let s = score(&cards(&[Rank::Ten, Rank::Nine]));
        assert_eq!(s, Score { total: 19, soft: false });

        let s = score(&cards(&[Rank::King, Rank::Queen, Rank::Five]));
        assert_eq!(s.total, 25);
        assert!(s.is_bust());
        assert!(!s.soft);
    }

    #[test]
    fn soft_totals() {
        let s = score(&cards(&[Rank::Ace, Rank::Seven]));
        assert_eq!(s, Score { total: 18, soft: true });
        assert_eq!(s.to_string(), "soft 18");

        // Ace demoted to 1.
        let s = score(&cards(&[Rank::Ace, Rank::Six, Rank::Nine]));
        assert_eq!(s, Score { total: 16, soft: false });
    }

    #[test]
    fn multiple_aces() {
        let s = score(&cards(&[Rank::Ace, Rank::Ace]));
        assert_eq!(s, Score { total: 12, soft: true });

        let s = score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine]));
        assert_eq!(s, Score { total: 21, soft: true });

        // All Aces demoted.
        let s = score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine, Rank::King]));
        assert_eq!(s, Score { total: 21, soft: false });

        let s = score(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::King, Rank::Nine]));
        assert_eq!(s, Score { total: 22, soft: false });
        assert!(s.is_bust());
    }

    #[test]
    fn score_is_not_bust_when_an_ace_can_be_demoted() {
        for rank in Rank::ranks() {
            let s = score(&cards(&[Rank::Ace, Rank::Nine, rank]));
            assert!(!s.is_bust(), "{rank} busted");
        }
    }

    #[test]
    fn naturals() {
        assert!(is_natural(&cards(&[Rank::Ace, Rank::King])));
        assert!(is_natural(&cards(&[Rank::Ten, Rank::Ace])));
        assert!(!is_natural(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
        assert!(!is_natural(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn pairs() {
        let hand = Hand::new(cards(&[Rank::Eight, Rank::Eight]), Chips::new(10));
        assert!(hand.is_pair());

        let hand = Hand::new(cards(&[Rank::Ten, Rank::Queen]), Chips::new(10));
        assert!(hand.is_pair());

        let hand = Hand::new(cards(&[Rank::Ace, Rank::Ace]), Chips::new(10));
        assert!(hand.is_pair());

        let hand = Hand::new(cards(&[Rank::Nine, Rank::Ten]), Chips::new(10));
        assert!(!hand.is_pair());

        let hand = Hand::new(cards(&[Rank::Eight, Rank::Eight, Rank::Deuce]), Chips::new(10));
        assert!(!hand.is_pair());
    }
}
