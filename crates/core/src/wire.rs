// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards encoding for the external protocol.
//!
//! The protocol encodes suits and ranks as plain integers, every value in
//! range maps to exactly one [Suit] or [Rank] and values out of range are
//! rejected with [Error::InvalidEncoding].
use anyhow::Result;
use serde::{Deserialize, Serialize};

use pepper_cards::{Card, Error, Rank, Suit};

/// A card as sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCard {
    /// The suit code, Club=0, Diamond=1, Spade=2, Heart=3.
    pub suit: i32,
    /// The rank code, Two=0 up to Ace=12.
    pub rank: i32,
}

/// Conversion between a type and its wire code.
pub trait WireCode: Sized {
    /// Returns the wire code.
    fn to_wire(&self) -> i32;

    /// Decodes a wire code.
    fn from_wire(value: i32) -> Result<Self, Error>;
}

impl WireCode for Suit {
    fn to_wire(&self) -> i32 {
        *self as i32
    }

    fn from_wire(value: i32) -> Result<Self, Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Suit::ALL.get(idx).copied())
            .ok_or(Error::InvalidEncoding { what: "suit", value })
    }
}

impl WireCode for Rank {
    fn to_wire(&self) -> i32 {
        *self as i32
    }

    fn from_wire(value: i32) -> Result<Self, Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Rank::ALL.get(idx).copied())
            .ok_or(Error::InvalidEncoding { what: "rank", value })
    }
}

impl From<Card> for WireCard {
    fn from(card: Card) -> Self {
        to_wire(card)
    }
}

impl TryFrom<WireCard> for Card {
    type Error = Error;

    fn try_from(wire: WireCard) -> Result<Self, Self::Error> {
        from_wire(wire)
    }
}

/// Encodes a card for the wire.
pub fn to_wire(card: Card) -> WireCard {
    WireCard {
        suit: card.suit().to_wire(),
        rank: card.rank().to_wire(),
    }
}

/// Decodes a card from the wire.
pub fn from_wire(wire: WireCard) -> Result<Card, Error> {
    Ok(Card::new(
        Rank::from_wire(wire.rank)?,
        Suit::from_wire(wire.suit)?,
    ))
}

/// Encodes a list of cards for the wire.
pub fn cards_to_wire(cards: &[Card]) -> Vec<WireCard> {
    cards.iter().copied().map(to_wire).collect()
}

/// Decodes a list of cards, fails on the first invalid card.
pub fn cards_from_wire(cards: &[WireCard]) -> Result<Vec<Card>, Error> {
    cards.iter().copied().map(from_wire).collect()
}

/// Serializes a list of cards into a binary frame.
pub fn encode_cards(cards: &[Card]) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&cards_to_wire(cards))?)
}

/// Deserializes a binary frame into a list of cards.
pub fn decode_cards(buf: &[u8]) -> Result<Vec<Card>> {
    let wire = bincode::deserialize::<Vec<WireCard>>(buf)?;
    Ok(cards_from_wire(&wire)?)
}
