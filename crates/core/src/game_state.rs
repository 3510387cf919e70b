// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack game state machine.
//!
//! A [GameState] takes a player from betting through the player and dealer
//! turns to the round settlement:
//!
//! ```text
//!   Betting -> Dealing -> PlayerTurn -> DealerTurn -> Resolved -> Betting
//!                 ^                                       |
//!                 +---------------- replay ---------------+--> GameOver
//! ```
//!
//! The bet is taken from the bankroll when the round is dealt, each split
//! takes another base bet from the bankroll.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use crate::{
    advisor::{self, Advice},
    error::{BetError, GameError, SplitError},
    event::GameEvent,
    hand::{self, Hand, HandStatus, Score},
    pacing::{Pacer, SleepPacer},
    payout::{self, RoundResult},
    shoe::{RandomShoe, Shoe},
    table::{Card, Chips, Deck},
    view::{DealerView, HandView, TableView, VisibleCard},
};

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for the deck shuffles, a random seed is used when `None`.
    pub seed: Option<u64>,
    /// The pause before each dealer draw.
    pub dealer_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            dealer_delay: Duration::from_millis(600),
        }
    }
}

/// The game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a bet.
    Betting,
    /// Shuffling and dealing the first cards.
    Dealing,
    /// The player acts on the current hand.
    PlayerTurn,
    /// The dealer draws.
    DealerTurn,
    /// The round has been settled.
    Resolved,
    /// The bankroll is empty.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Phase::Betting => "betting",
            Phase::Dealing => "dealing",
            Phase::PlayerTurn => "player turn",
            Phase::DealerTurn => "dealer turn",
            Phase::Resolved => "resolved",
            Phase::GameOver => "game over",
        };

        f.write_str(phase)
    }
}

/// An action requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Place a bet and deal.
    PlaceBet,
    /// Draw a card.
    Hit,
    /// Stop drawing.
    Stand,
    /// Split a pair.
    Split,
    /// Deal again with the same bet.
    Replay,
    /// Go back to betting.
    ChangeBet,
    /// Refill an empty bankroll.
    Refill,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::PlaceBet => "place a bet",
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Split => "split",
            Action::Replay => "replay",
            Action::ChangeBet => "change bet",
            Action::Refill => "refill the bankroll",
        };

        f.write_str(action)
    }
}

/// The cards in play for a round.
#[derive(Debug)]
struct Round {
    deck: Deck,
    hands: Vec<Hand>,
    dealer: Vec<Card>,
    current: usize,
    hole_revealed: bool,
}

impl Round {
    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal().ok_or(GameError::DeckExhausted)
    }

    fn deal_player(&mut self, hand: usize, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let card = self.draw()?;
        self.give(hand, card, events);
        Ok(())
    }

    fn give(&mut self, hand: usize, card: Card, events: &mut Vec<GameEvent>) {
        debug!("Hand {hand} gets {card}");
        self.hands[hand].cards.push(card);
        events.push(GameEvent::PlayerCard { hand, card });
    }

    /// Moves the second card of the current hand to a new hand after it and
    /// deals a card to the current hand.
    ///
    /// The card is drawn first so that an empty deck leaves the hands as they
    /// were.
    fn split_current(
        &mut self,
        bet: Chips,
        events: &mut Vec<GameEvent>,
    ) -> Result<usize, GameError> {
        let card = self.draw()?;

        let idx = self.current;
        if let Some(moved) = self.hands[idx].cards.pop() {
            self.hands.insert(idx + 1, Hand::new(vec![moved], bet));
        }

        events.push(GameEvent::HandSplit { hand: idx, bet });
        self.give(idx, card, events);
        Ok(idx)
    }

    fn deal_dealer(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let card = self.draw()?;
        debug!("Dealer gets {card}");

        // The first dealer card stays face down until the dealer turn.
        let visible = if self.dealer.is_empty() && !self.hole_revealed {
            VisibleCard::Covered
        } else {
            VisibleCard::Up(card)
        };

        self.dealer.push(card);
        events.push(GameEvent::DealerCard(visible));
        Ok(())
    }

    fn finish(&mut self, hand: usize, status: HandStatus, events: &mut Vec<GameEvent>) {
        let h = &mut self.hands[hand];
        h.status = status;

        let score = h.score();
        debug!("Hand {hand} {} with {score}", status.label());
        events.push(GameEvent::HandFinished {
            hand,
            status,
            score,
        });
    }

    /// Moves to the next hand the player can act on.
    ///
    /// A split hand gets its second card when play reaches it. Returns false
    /// when no hands are left and it is the dealer turn.
    fn advance(&mut self, events: &mut Vec<GameEvent>) -> Result<bool, GameError> {
        loop {
            let next = self.current + 1;
            if next >= self.hands.len() {
                self.current = self.hands.len();
                return Ok(false);
            }

            self.current = next;
            if self.hands[next].cards.len() == 1 {
                self.deal_player(next, events)?;
            }

            if self.hands[next].score().total == Score::BLACKJACK {
                self.finish(next, HandStatus::Blackjack, events);
                continue;
            }

            return Ok(true);
        }
    }

    /// The dealer draws to 17 and stands on all 17s, soft 17 included.
    fn play_dealer(
        &mut self,
        pacer: &mut dyn Pacer,
        delay: Duration,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        if self.hands.iter().all(|h| h.status == HandStatus::Bust) {
            debug!("All hands busted, dealer does not play");
            return Ok(());
        }

        self.hole_revealed = true;
        if let Some(hole) = self.dealer.first() {
            events.push(GameEvent::HoleRevealed(*hole));
        }

        while hand::score(&self.dealer).total < GameState::DEALER_STANDS_ON {
            pacer.pause(delay, &self.dealer_view(true));
            self.deal_dealer(events)?;
        }

        Ok(())
    }

    fn dealer_view(&self, reveal_hole: bool) -> DealerView {
        let cards = self
            .dealer
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if idx == 0 && !reveal_hole {
                    VisibleCard::Covered
                } else {
                    VisibleCard::Up(*card)
                }
            })
            .collect();

        DealerView {
            cards,
            score: reveal_hole.then(|| hand::score(&self.dealer)),
        }
    }

    fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.current)
    }

    #[cfg(test)]
    fn cards_count(&self) -> usize {
        self.deck.len() + self.dealer.len() + self.hands.iter().map(|h| h.cards.len()).sum::<usize>()
    }
}

/// The player session state.
#[derive(Debug)]
pub struct GameState {
    config: Config,
    phase: Phase,
    bankroll: Chips,
    base_bet: Chips,
    round: Option<Round>,
    last_result: Option<RoundResult>,
    events: Vec<GameEvent>,
    shoe: Box<dyn Shoe>,
    pacer: Box<dyn Pacer>,
}

impl GameState {
    /// The bankroll at the start of the game and after a refill.
    pub const STARTING_BANKROLL: Chips = Chips::new(1_000);
    /// The maximum number of player hands after splits.
    pub const MAX_HANDS: usize = 3;
    /// The dealer stops drawing at this total.
    pub const DEALER_STANDS_ON: u8 = 17;
    /// The dealer card used by the advisor.
    pub const UPCARD_INDEX: usize = 1;

    /// Creates a new game that shuffles decks and paces the dealer draws.
    pub fn new(config: Config) -> Self {
        let shoe = RandomShoe::new(config.seed);
        Self::with_shoe(config, shoe, SleepPacer)
    }

    /// Creates a new game with the given deck source and pacer.
    pub fn with_shoe<S, P>(config: Config, shoe: S, pacer: P) -> Self
    where
        S: Shoe + 'static,
        P: Pacer + 'static,
    {
        Self {
            config,
            phase: Phase::Betting,
            bankroll: Self::STARTING_BANKROLL,
            base_bet: Chips::ZERO,
            round: None,
            last_result: None,
            events: Vec::default(),
            shoe: Box::new(shoe),
            pacer: Box::new(pacer),
        }
    }

    /// Places a bet and deals a new round.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), GameError> {
        self.ensure_phase(Action::PlaceBet, Phase::Betting)?;

        if amount <= 0 {
            return Err(self.reject(BetError::NonPositive));
        }

        let bet = match u32::try_from(amount) {
            Ok(bet) if Chips::new(bet) <= self.bankroll => Chips::new(bet),
            _ => return Err(self.reject(BetError::InsufficientFunds)),
        };

        self.base_bet = bet;
        self.enter_dealing()
    }

    /// Draws a card for the current hand.
    pub fn hit(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Hit, Phase::PlayerTurn)?;
        let round = Self::round_mut(&mut self.round, Action::Hit, self.phase)?;
        let events = &mut self.events;

        let idx = round.current;
        round.deal_player(idx, events)?;

        let score = round.hands[idx].score();
        let more = if score.is_bust() {
            round.finish(idx, HandStatus::Bust, events);
            round.advance(events)?
        } else if score.total == Score::BLACKJACK {
            round.finish(idx, HandStatus::Stand, events);
            round.advance(events)?
        } else {
            true
        };

        self.after_player_move(more)
    }

    /// Stands on the current hand.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Stand, Phase::PlayerTurn)?;
        let round = Self::round_mut(&mut self.round, Action::Stand, self.phase)?;
        let events = &mut self.events;

        round.finish(round.current, HandStatus::Stand, events);
        let more = round.advance(events)?;

        self.after_player_move(more)
    }

    /// Splits the current hand into two hands.
    ///
    /// The second card moves to a new hand right after the current one and the
    /// current hand gets a new card, the new hand gets its second card when
    /// play reaches it.
    pub fn split(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Split, Phase::PlayerTurn)?;
        if let Err(e) = self.check_split() {
            return Err(self.reject(e));
        }

        let bet = self.base_bet;
        let round = Self::round_mut(&mut self.round, Action::Split, self.phase)?;
        let idx = round.split_current(bet, &mut self.events)?;
        self.bankroll -= bet;

        info!("Hand {idx} split, bankroll {}", self.bankroll);
        Ok(())
    }

    /// Checks if the current hand can be split.
    pub fn can_split(&self) -> bool {
        self.phase == Phase::PlayerTurn && self.check_split().is_ok()
    }

    /// Deals a new round with the last bet.
    pub fn replay(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Replay, Phase::Resolved)?;
        if self.bankroll < self.base_bet {
            return Err(self.reject(BetError::InsufficientFunds));
        }

        self.enter_dealing()
    }

    /// Goes back to betting after a round.
    pub fn change_bet(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::ChangeBet, Phase::Resolved)?;
        self.round = None;
        self.phase = Phase::Betting;
        Ok(())
    }

    /// Resets an empty bankroll to the starting amount.
    pub fn refill_bankroll(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Refill, Phase::GameOver)?;

        self.bankroll = Self::STARTING_BANKROLL;
        self.round = None;
        self.phase = Phase::Betting;
        self.events
            .push(GameEvent::BankrollRefilled(Self::STARTING_BANKROLL));

        info!("Bankroll refilled to {}", self.bankroll);
        Ok(())
    }

    /// A snapshot of the table with the dealer hole card shown or covered.
    pub fn visible_state(&self, reveal_dealer_hole: bool) -> TableView {
        let (dealer, hands, current_hand, cards_left) = match &self.round {
            Some(round) => {
                let dealer = round.dealer_view(reveal_dealer_hole);
                let hands = round
                    .hands
                    .iter()
                    .map(|h| HandView {
                        cards: h.cards.clone(),
                        bet: h.bet,
                        status: h.status,
                        score: h.score(),
                    })
                    .collect();

                let current = (self.phase == Phase::PlayerTurn).then_some(round.current);
                (dealer, hands, current, round.deck.len())
            }
            None => (DealerView::default(), Vec::default(), None, Deck::SIZE),
        };

        TableView {
            phase: self.phase,
            bankroll: self.bankroll,
            base_bet: self.base_bet,
            dealer,
            hands,
            current_hand,
            cards_left,
            last_result: self.last_result.clone(),
        }
    }

    /// A snapshot of the table with the hole card shown once the dealer played.
    pub fn view(&self) -> TableView {
        let reveal = self.round.as_ref().is_some_and(|r| r.hole_revealed);
        self.visible_state(reveal)
    }

    /// The advisor recommendation for the current hand.
    ///
    /// The advisor compares the hand with the second dealer card, the one dealt
    /// face up.
    pub fn advice(&self) -> Option<Advice> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }

        let round = self.round.as_ref()?;
        let score = round.current_hand()?.score();
        let upcard = round.dealer.get(Self::UPCARD_INDEX)?;
        Some(advisor::advise(score.total, score.soft, upcard.value()))
    }

    /// The game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player bankroll.
    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    /// The last base bet.
    pub fn base_bet(&self) -> Chips {
        self.base_bet
    }

    /// The last settled round.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Takes the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn enter_dealing(&mut self) -> Result<(), GameError> {
        self.phase = Phase::Dealing;
        self.bankroll -= self.base_bet;
        self.events.push(GameEvent::RoundStarted {
            bet: self.base_bet,
            bankroll: self.bankroll,
        });

        info!("New round bet {} bankroll {}", self.base_bet, self.bankroll);

        let round = self.round.insert(Round {
            deck: self.shoe.fresh_deck(),
            hands: vec![Hand::new(Vec::with_capacity(2), self.base_bet)],
            dealer: Vec::with_capacity(2),
            current: 0,
            hole_revealed: false,
        });

        let events = &mut self.events;
        round.deal_player(0, events)?;
        round.deal_player(0, events)?;
        round.deal_dealer(events)?;
        round.deal_dealer(events)?;

        self.phase = Phase::PlayerTurn;

        // A natural ends the player turn.
        if round.hands[0].score().total == Score::BLACKJACK {
            round.finish(0, HandStatus::Blackjack, events);
            let more = round.advance(events)?;
            return self.after_player_move(more);
        }

        Ok(())
    }

    fn after_player_move(&mut self, more: bool) -> Result<(), GameError> {
        if more {
            self.phase = Phase::PlayerTurn;
            Ok(())
        } else {
            self.enter_dealer_turn()
        }
    }

    fn enter_dealer_turn(&mut self) -> Result<(), GameError> {
        self.phase = Phase::DealerTurn;
        let delay = self.config.dealer_delay;
        let round = Self::round_mut(&mut self.round, Action::Stand, self.phase)?;
        round.play_dealer(self.pacer.as_mut(), delay, &mut self.events)?;
        self.enter_resolved()
    }

    fn enter_resolved(&mut self) -> Result<(), GameError> {
        let round = Self::round_mut(&mut self.round, Action::Stand, self.phase)?;
        let result = payout::settle(&round.hands, &round.dealer);

        self.bankroll += result.payout;
        info!(
            "Round {} wagered {} paid {} bankroll {}",
            result.outcome, result.wagered, result.payout, self.bankroll
        );

        self.events.push(GameEvent::RoundResolved(result.clone()));
        self.last_result = Some(result);

        if self.bankroll == Chips::ZERO {
            info!("Game over");
            self.events.push(GameEvent::GameOver);
            self.phase = Phase::GameOver;
        } else {
            self.phase = Phase::Resolved;
        }

        Ok(())
    }

    fn check_split(&self) -> Result<(), SplitError> {
        let Some(round) = &self.round else {
            return Err(SplitError::NotAPair);
        };

        if !round.current_hand().is_some_and(Hand::is_pair) {
            return Err(SplitError::NotAPair);
        }

        if round.hands.len() >= Self::MAX_HANDS {
            return Err(SplitError::MaxHandsReached(Self::MAX_HANDS));
        }

        if self.bankroll < self.base_bet {
            return Err(SplitError::InsufficientFunds);
        }

        Ok(())
    }

    fn ensure_phase(&self, action: Action, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.reject(GameError::InvalidPhase {
                action,
                phase: self.phase,
            }))
        }
    }

    fn round_mut(
        round: &mut Option<Round>,
        action: Action,
        phase: Phase,
    ) -> Result<&mut Round, GameError> {
        round
            .as_mut()
            .ok_or(GameError::InvalidPhase { action, phase })
    }

    fn reject(&self, err: impl Into<GameError>) -> GameError {
        let err = err.into();
        warn!("Rejected: {err}");
        err
    }
}
