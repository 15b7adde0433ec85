// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random suits, ranks and cards.
//!
//! All functions take the random generator as an argument so that callers
//! decide how it is seeded, tests use a seeded [StdRng](rand::rngs::StdRng).
//! Exclusion variants pick uniformly among the values that are not excluded.
use rand::prelude::*;

use crate::{Card, Error, Rank, Result, Suit};

/// Returns a random suit.
pub fn random_suit<R: Rng + ?Sized>(rng: &mut R) -> Suit {
    Suit::ALL[rng.random_range(0..Suit::COUNT)]
}

/// Returns a random rank.
pub fn random_rank<R: Rng + ?Sized>(rng: &mut R) -> Rank {
    Rank::ALL[rng.random_range(0..Rank::COUNT)]
}

/// Returns a random card.
pub fn random_card<R: Rng + ?Sized>(rng: &mut R) -> Card {
    Card::new(random_rank(rng), random_suit(rng))
}

/// Returns a random suit that is not in `excluded`.
pub fn random_suit_excluding<R: Rng + ?Sized>(rng: &mut R, excluded: &[Suit]) -> Result<Suit> {
    Suit::suits()
        .filter(|s| !excluded.contains(s))
        .choose(rng)
        .ok_or(Error::ExhaustedExclusionSet { domain: "suits" })
}

/// Returns a random rank that is not in `excluded`.
pub fn random_rank_excluding<R: Rng + ?Sized>(rng: &mut R, excluded: &[Rank]) -> Result<Rank> {
    Rank::ranks()
        .filter(|r| !excluded.contains(r))
        .choose(rng)
        .ok_or(Error::ExhaustedExclusionSet { domain: "ranks" })
}

/// Returns a random rank strictly greater than `rank`.
///
/// Fails for an Ace as there are no ranks above it.
pub fn random_rank_above<R: Rng + ?Sized>(rng: &mut R, rank: Rank) -> Result<Rank> {
    Rank::ranks()
        .filter(|r| *r > rank)
        .choose(rng)
        .ok_or(Error::ExhaustedExclusionSet { domain: "ranks" })
}

/// Returns a random card that is not in `excluded`.
pub fn random_card_excluding<R: Rng + ?Sized>(rng: &mut R, excluded: &[Card]) -> Result<Card> {
    Suit::suits()
        .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
        .filter(|c| !excluded.contains(c))
        .choose(rng)
        .ok_or(Error::ExhaustedExclusionSet { domain: "cards" })
}
