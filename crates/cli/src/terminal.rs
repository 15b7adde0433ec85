// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::style::Stylize;
use log::info;
use rand::Rng;
use std::io::{self, Write};

use pepper_cards::group;
use pepper_core::{Card, Deck, Rank, Suit, wire};

use crate::display::DisplayConfig;

/// Deals `count` cards from a shuffled deck and prints them.
pub fn run<R: Rng + ?Sized>(
    config: &DisplayConfig,
    rng: &mut R,
    count: usize,
    divider: bool,
) -> Result<()> {
    let mut deck = Deck::new_and_shuffled(rng);

    let mut hand = Vec::with_capacity(count);
    for _ in 0..count {
        hand.push(deck.draw()?);
    }
    info!("Dealt {} cards, {} left in the deck", hand.len(), deck.len());

    // Cards go through the wire encoding like they would for a client.
    let frame = wire::encode_cards(&hand)?;
    let hand = wire::decode_cards(&frame)?;
    info!("Cards frame is {} bytes", frame.len());

    let mut stdout = io::stdout().lock();
    print_hand(&mut stdout, &hand)?;
    print_counts(&mut stdout, &hand)?;
    print_layout(&mut stdout, config, &hand, divider)?;

    // Put the cards back, the deck must be full again.
    for card in hand {
        deck.return_card(card)?;
    }
    info!("Returned cards, deck has {} cards", deck.len());

    Ok(())
}

fn styled(card: Card) -> String {
    match card.suit() {
        Suit::Hearts | Suit::Diamonds => card.to_string().red().to_string(),
        Suit::Clubs | Suit::Spades => card.to_string(),
    }
}

fn print_hand<W: Write>(w: &mut W, hand: &[Card]) -> Result<()> {
    let (hole, board) = hand.split_at(hand.len().min(2));

    let hole = hole.iter().map(|c| styled(*c)).collect::<Vec<_>>();
    writeln!(w, "{} {}", "Hole: ".bold(), hole.join(" "))?;

    if !board.is_empty() {
        let board = board.iter().map(|c| styled(*c)).collect::<Vec<_>>();
        writeln!(w, "{} {}", "Board:".bold(), board.join(" "))?;
    }

    let mut sorted = hand.to_vec();
    sorted.sort();
    let sorted = sorted.into_iter().map(styled).collect::<Vec<_>>();
    writeln!(w, "{} {}", "Sorted:".bold(), sorted.join(" "))?;

    Ok(())
}

fn print_counts<W: Write>(w: &mut W, hand: &[Card]) -> Result<()> {
    let by_rank = group::count_by_rank(hand);
    let ranks = Rank::ranks()
        .rev()
        .filter_map(|r| by_rank.get(&r).map(|n| format!("{r}x{n}")))
        .collect::<Vec<_>>();
    writeln!(w, "{} {}", "Ranks:".bold(), ranks.join(" "))?;

    let by_suit = group::count_by_suit(hand);
    let suits = Suit::suits()
        .map(|s| format!("{}x{}", s.name(), by_suit[&s]))
        .collect::<Vec<_>>();
    writeln!(w, "{} {}", "Suits:".bold(), suits.join(" "))?;

    Ok(())
}

fn print_layout<W: Write>(
    w: &mut W,
    config: &DisplayConfig,
    hand: &[Card],
    divider: bool,
) -> Result<()> {
    writeln!(w, "{}", "Images:".bold())?;
    for path in config.layout(hand, divider) {
        writeln!(w, "  {}", path.display())?;
    }

    Ok(())
}
