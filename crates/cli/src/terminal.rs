// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use log::warn;
use std::{
    fmt,
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use blackjack_core::{
    Advice, Config, GameError, GameState, Phase,
    error::parse_bet,
    event::GameEvent,
    pacing::Pacer,
    payout::RoundOutcome,
    shoe::RandomShoe,
    table::Card,
    view::{DealerView, TableView, VisibleCard},
};

/// Shows the dealer cards before each dealer draw and waits.
#[derive(Debug)]
struct TerminalPacer<W> {
    out: W,
}

impl<W: Write> TerminalPacer<W> {
    fn show(&mut self, dealer: &DealerView) -> Result<()> {
        print_dealer(&mut self.out, dealer)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write + fmt::Debug> Pacer for TerminalPacer<W> {
    fn pause(&mut self, delay: Duration, dealer: &DealerView) {
        if let Err(e) = self.show(dealer) {
            warn!("Cannot print dealer cards: {e}");
        }

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Runs the terminal loop until the player quits or stdin is closed.
pub fn run(config: Config, default_bet: u32) -> Result<()> {
    let shoe = RandomShoe::new(config.seed);
    let pacer = TerminalPacer { out: io::stdout() };
    let mut game = GameState::with_shoe(config, shoe, pacer);
    let mut last_bet = i64::from(default_bet);

    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    loop {
        print_table(&mut stdout, &game.view(), game.advice(), game.can_split())?;
        print_prompt(&mut stdout, game.phase(), last_bet)?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let input = line.trim().to_ascii_lowercase();
        if input == "q" {
            break;
        }

        let res = match (game.phase(), input.as_str()) {
            (Phase::Betting, bet) => {
                let bet = if bet.is_empty() {
                    Ok(last_bet)
                } else {
                    parse_bet(bet)
                };

                match bet {
                    Ok(bet) => game.place_bet(bet).map(|_| last_bet = bet),
                    Err(e) => Err(GameError::from(e)),
                }
            }
            (Phase::PlayerTurn, "h") => game.hit(),
            (Phase::PlayerTurn, "s") => game.stand(),
            (Phase::PlayerTurn, "p") => game.split(),
            (Phase::Resolved, "r") => game.replay(),
            (Phase::Resolved, "c") => game.change_bet(),
            (Phase::GameOver, "a") => game.refill_bankroll(),
            _ => {
                print_message(&mut stdout, "Unknown command".yellow())?;
                continue;
            }
        };

        print_events(&mut stdout, game.drain_events())?;

        if let Err(e) = res {
            print_message(&mut stdout, e.to_string().red())?;
        }
    }

    Ok(())
}

fn print_table(
    w: &mut impl Write,
    view: &TableView,
    advice: Option<Advice>,
    can_split: bool,
) -> Result<()> {
    let header = format!(
        "Bankroll ${}  Bet ${}  Cards left {}",
        view.bankroll, view.base_bet, view.cards_left
    );

    queue!(
        w,
        style::Print("\n"),
        style::PrintStyledContent(header.as_str().bold()),
        style::Print("\n")
    )?;

    if !view.dealer.cards.is_empty() {
        print_dealer(w, &view.dealer)?;
    }

    for (idx, hand) in view.hands.iter().enumerate() {
        let marker = if view.current_hand == Some(idx) { ">" } else { " " };
        queue!(w, style::Print(format!("{marker}Hand {:<4}", idx + 1)))?;

        for card in &hand.cards {
            print_card(w, card)?;
        }

        let text = format!(" ({}) ${} {}", hand.score, hand.bet, hand.status.label());
        queue!(w, style::Print(text), style::Print("\n"))?;
    }

    if let Some(advice) = advice {
        let text = format!("Advice: {advice}");
        queue!(
            w,
            style::PrintStyledContent(text.as_str().cyan()),
            style::Print("\n")
        )?;
    }

    match view.phase {
        Phase::PlayerTurn if can_split => {
            queue!(w, style::Print("[h]it [s]tand s[p]lit [q]uit\n"))?;
        }
        Phase::PlayerTurn => queue!(w, style::Print("[h]it [s]tand [q]uit\n"))?,
        Phase::Resolved => {
            if let Some(result) = &view.last_result {
                let outcome = result.outcome.to_string();
                let color = outcome_color(&result.outcome);
                queue!(
                    w,
                    style::PrintStyledContent(outcome.as_str().with(color).bold()),
                    style::Print("\n")
                )?;
            }

            queue!(w, style::Print("[r]eplay same bet [c]hange bet [q]uit\n"))?;
        }
        Phase::GameOver => {
            queue!(
                w,
                style::PrintStyledContent("GAME OVER".red().bold()),
                style::Print("\n[a]dd $1000 [q]uit\n")
            )?;
        }
        Phase::Betting | Phase::Dealing | Phase::DealerTurn => {}
    }

    w.flush()?;
    Ok(())
}

fn print_dealer(w: &mut impl Write, dealer: &DealerView) -> Result<()> {
    queue!(w, style::Print(format!("{:<10}", "Dealer")))?;
    for card in &dealer.cards {
        match card {
            VisibleCard::Covered => queue!(w, style::Print("▒▒ "))?,
            VisibleCard::Up(card) => print_card(w, card)?,
        }
    }

    if let Some(score) = dealer.score {
        queue!(w, style::Print(format!(" ({score})")))?;
    }

    queue!(w, style::Print("\n"))?;
    Ok(())
}

fn outcome_color(outcome: &RoundOutcome) -> style::Color {
    match outcome {
        RoundOutcome::Win { .. } => style::Color::Green,
        RoundOutcome::Loss => style::Color::Red,
        RoundOutcome::Push => style::Color::Yellow,
    }
}

fn print_card(w: &mut impl Write, card: &Card) -> Result<()> {
    let text = format!("{}{} ", card.rank(), card.suit().symbol());
    if card.suit().is_red() {
        queue!(w, style::PrintStyledContent(text.as_str().red()))?;
    } else {
        queue!(w, style::Print(text))?;
    }

    Ok(())
}

fn print_prompt(w: &mut impl Write, phase: Phase, last_bet: i64) -> Result<()> {
    if phase == Phase::Betting {
        queue!(w, style::Print(format!("Place your bet [{last_bet}]: ")))?;
    } else {
        queue!(w, style::Print("> "))?;
    }

    w.flush()?;
    Ok(())
}

fn print_events(w: &mut impl Write, events: Vec<GameEvent>) -> Result<()> {
    for event in events {
        let text = event.to_string();
        queue!(
            w,
            style::PrintStyledContent(text.as_str().dark_grey()),
            style::Print("\n")
        )?;
    }

    w.flush()?;
    Ok(())
}

fn print_message<D: fmt::Display>(
    w: &mut impl Write,
    msg: style::StyledContent<D>,
) -> Result<()> {
    queue!(w, style::PrintStyledContent(msg), style::Print("\n"))?;
    w.flush()?;
    Ok(())
}
