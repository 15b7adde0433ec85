// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use log::{debug, trace};
use rand::prelude::*;

use crate::{Card, Error, Rank, Result, Suit};

/// A cards Deck.
///
/// The deck holds an ordered sequence of cards with no duplicates, cards are
/// drawn from the front and returned to the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new full deck.
    ///
    /// Cards are grouped by suit (Clubs, Diamonds, Spades, Hearts) and each
    /// suit goes from Ace down to Two.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().rev().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Creates a deck with no cards.
    pub fn empty() -> Self {
        Self {
            cards: Vec::with_capacity(Self::SIZE),
        }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        trace!("Shuffled {} cards", self.cards.len());
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The remaining cards from the front to the back of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draws the card at the front of the deck.
    pub fn draw(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(Error::EmptyDeck);
        }

        Ok(self.cards.remove(0))
    }

    /// Removes a card from the deck.
    ///
    /// Returns `Ok(false)` and leaves the deck as it is if the card is not in
    /// the deck, fails only if the deck is empty.
    pub fn remove(&mut self, card: Card) -> Result<bool> {
        if self.cards.is_empty() {
            return Err(Error::EmptyDeck);
        }

        match self.cards.iter().position(|c| *c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                Ok(true)
            }
            None => {
                debug!("Card {card} not in deck");
                Ok(false)
            }
        }
    }

    /// Returns a card to the back of the deck.
    pub fn return_card(&mut self, card: Card) -> Result<()> {
        if self.contains(card) {
            return Err(Error::DuplicateCard(card));
        }

        self.cards.push(card);
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
