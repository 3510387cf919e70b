// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round settlement.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    hand::{self, Hand, HandStatus},
    table::{Card, Chips},
};

/// The result of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// The hand went over 21, the bet is lost.
    Bust,
    /// The dealer beat the hand.
    Lose,
    /// Tie with the dealer, the bet is returned.
    Push,
    /// The hand beat the dealer and pays even money.
    Win,
    /// A natural that pays 3:2.
    Blackjack,
}

impl HandOutcome {
    /// The chips returned for a bet, stake included, in half chips.
    ///
    /// A natural pays two and a half times the bet so the payout is kept in
    /// half chips until the round total is known.
    fn half_chips(&self, bet: Chips) -> u64 {
        let bet = u64::from(bet.amount());
        match self {
            HandOutcome::Bust | HandOutcome::Lose => 0,
            HandOutcome::Push => bet * 2,
            HandOutcome::Win => bet * 4,
            HandOutcome::Blackjack => bet * 5,
        }
    }

    /// The outcome label.
    pub fn label(&self) -> &'static str {
        match self {
            HandOutcome::Bust => "BUST",
            HandOutcome::Lose => "LOSE",
            HandOutcome::Push => "PUSH",
            HandOutcome::Win => "WIN",
            HandOutcome::Blackjack => "BLACKJACK",
        }
    }
}

/// The round result for the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The payout is more than the wager.
    Win {
        /// The chips won on top of the wager.
        net: Chips,
    },
    /// The payout is less than the wager.
    Loss,
    /// The payout equals the wager.
    Push,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Win { net } => write!(f, "WIN (+${net})"),
            RoundOutcome::Loss => write!(f, "LOSS"),
            RoundOutcome::Push => write!(f, "PUSH"),
        }
    }
}

/// A settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The round outcome.
    pub outcome: RoundOutcome,
    /// The chips wagered on all hands.
    pub wagered: Chips,
    /// The chips paid back to the bankroll.
    pub payout: Chips,
    /// The outcome of each hand in hand order.
    pub hands: Vec<HandOutcome>,
}

/// Compares a player hand with the dealer cards.
pub fn hand_outcome(hand: &Hand, dealer: &[Card]) -> HandOutcome {
    let dealer_total = hand::score(dealer).total;

    match hand.status {
        HandStatus::Bust => HandOutcome::Bust,
        HandStatus::Blackjack if hand::is_natural(dealer) => HandOutcome::Push,
        HandStatus::Blackjack => HandOutcome::Blackjack,
        HandStatus::Active | HandStatus::Stand => {
            let player_total = hand.score().total;
            if dealer_total > 21 || player_total > dealer_total {
                HandOutcome::Win
            } else if player_total == dealer_total {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            }
        }
    }
}

/// Settles all player hands against the dealer.
///
/// Payouts are summed before truncating to whole chips, so two 3:2 payouts on
/// odd bets lose at most one chip in total.
pub fn settle(hands: &[Hand], dealer: &[Card]) -> RoundResult {
    let outcomes = hands
        .iter()
        .map(|h| hand_outcome(h, dealer))
        .collect::<Vec<_>>();

    let half_chips = hands
        .iter()
        .zip(&outcomes)
        .map(|(h, o)| o.half_chips(h.bet))
        .sum::<u64>();

    let wagered = hands.iter().map(|h| h.bet).sum::<Chips>();
    let wagered_half_chips = u64::from(wagered.amount()) * 2;

    let outcome = if half_chips > wagered_half_chips {
        let net = (half_chips - wagered_half_chips) / 2;
        RoundOutcome::Win {
            net: to_chips(net),
        }
    } else if half_chips < wagered_half_chips {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Push
    };

    RoundResult {
        outcome,
        wagered,
        payout: to_chips(half_chips / 2),
        hands: outcomes,
    }
}

fn to_chips(amount: u64) -> Chips {
    Chips::new(u32::try_from(amount).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|r| Card::new(*r, Suit::Spades)).collect()
    }

    fn hand(ranks: &[Rank], bet: u32, status: HandStatus) -> Hand {
        Hand {
            cards: cards(ranks),
            bet: Chips::new(bet),
            status,
        }
    }

    #[test]
    fn natural_pays_three_to_two() {
        let hands = [hand(&[Rank::Ace, Rank::King], 50, HandStatus::Blackjack)];
        let result = settle(&hands, &cards(&[Rank::Nine, Rank::Eight]));

        assert_eq!(result.hands, [HandOutcome::Blackjack]);
        assert_eq!(result.payout, Chips::new(125));
        assert_eq!(result.wagered, Chips::new(50));
        assert_eq!(result.outcome, RoundOutcome::Win { net: Chips::new(75) });
        assert_eq!(result.outcome.to_string(), "WIN (+$75)");
    }

    #[test]
    fn natural_against_dealer_natural_is_a_push() {
        let hands = [hand(&[Rank::Ace, Rank::King], 50, HandStatus::Blackjack)];
        let result = settle(&hands, &cards(&[Rank::Ace, Rank::Queen]));

        assert_eq!(result.hands, [HandOutcome::Push]);
        assert_eq!(result.payout, Chips::new(50));
        assert_eq!(result.outcome, RoundOutcome::Push);
    }

    #[test]
    fn dealer_three_cards_21_does_not_push_a_natural() {
        let hands = [hand(&[Rank::Ace, Rank::King], 10, HandStatus::Blackjack)];
        let result = settle(&hands, &cards(&[Rank::Seven, Rank::Seven, Rank::Seven]));
        assert_eq!(result.hands, [HandOutcome::Blackjack]);
        assert_eq!(result.payout, Chips::new(25));
    }

    #[test]
    fn compare_totals() {
        let dealer = cards(&[Rank::Ten, Rank::Eight]);

        let win = hand(&[Rank::Ten, Rank::Nine], 10, HandStatus::Stand);
        assert_eq!(hand_outcome(&win, &dealer), HandOutcome::Win);

        let push = hand(&[Rank::Ten, Rank::Eight], 10, HandStatus::Stand);
        assert_eq!(hand_outcome(&push, &dealer), HandOutcome::Push);

        let lose = hand(&[Rank::Ten, Rank::Seven], 10, HandStatus::Stand);
        assert_eq!(hand_outcome(&lose, &dealer), HandOutcome::Lose);

        let bust = hand(&[Rank::Ten, Rank::Seven, Rank::Nine], 10, HandStatus::Bust);
        assert_eq!(hand_outcome(&bust, &dealer), HandOutcome::Bust);
    }

    #[test]
    fn dealer_bust_pays_every_standing_hand() {
        let dealer = cards(&[Rank::Ten, Rank::Six, Rank::King]);
        let hands = [
            hand(&[Rank::Ten, Rank::Deuce], 20, HandStatus::Stand),
            hand(&[Rank::Ten, Rank::Four, Rank::King], 20, HandStatus::Bust),
        ];

        let result = settle(&hands, &dealer);
        assert_eq!(result.hands, [HandOutcome::Win, HandOutcome::Bust]);
        assert_eq!(result.payout, Chips::new(40));
        assert_eq!(result.wagered, Chips::new(40));
        assert_eq!(result.outcome, RoundOutcome::Push);
    }

    #[test]
    fn fractional_payouts_truncate_once() {
        // Two naturals on odd bets pay 2.5 + 2.5 = 5 chips, not 2 + 2.
        let dealer = cards(&[Rank::Ten, Rank::Seven]);
        let hands = [
            hand(&[Rank::Ace, Rank::King], 1, HandStatus::Blackjack),
            hand(&[Rank::Ace, Rank::Queen], 1, HandStatus::Blackjack),
        ];
        assert_eq!(settle(&hands, &dealer).payout, Chips::new(5));

        // A single odd natural truncates the half chip.
        let hands = [hand(&[Rank::Ace, Rank::King], 3, HandStatus::Blackjack)];
        let result = settle(&hands, &dealer);
        assert_eq!(result.payout, Chips::new(7));
        assert_eq!(result.outcome, RoundOutcome::Win { net: Chips::new(4) });
    }

    #[test]
    fn all_busted_is_a_loss() {
        let hands = [hand(&[Rank::Ten, Rank::Six, Rank::Nine], 50, HandStatus::Bust)];
        let result = settle(&hands, &cards(&[Rank::Ten, Rank::Six]));
        assert_eq!(result.payout, Chips::ZERO);
        assert_eq!(result.outcome, RoundOutcome::Loss);
    }
}
