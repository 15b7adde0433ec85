// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards grouping and counting used by hand evaluation.
//!
//! These functions work on any collection of cards and don't check for
//! duplicates.
use ahash::AHashMap;

use crate::{Card, Rank, Suit};

/// Counts cards by rank, ranks with no cards are not in the map.
pub fn count_by_rank<'a, I>(cards: I) -> AHashMap<Rank, usize>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut counts = AHashMap::with_capacity(Rank::COUNT);
    for card in cards {
        *counts.entry(card.rank()).or_insert(0) += 1;
    }
    counts
}

/// Groups cards by rank keeping the input order within each group.
pub fn cards_by_rank<'a, I>(cards: I) -> AHashMap<Rank, Vec<Card>>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut groups = AHashMap::<Rank, Vec<Card>>::with_capacity(Rank::COUNT);
    for card in cards {
        groups.entry(card.rank()).or_default().push(*card);
    }
    groups
}

/// Counts cards by suit, all suits are in the map.
pub fn count_by_suit<'a, I>(cards: I) -> AHashMap<Suit, usize>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut counts = Suit::suits().map(|s| (s, 0)).collect::<AHashMap<_, _>>();
    for card in cards {
        *counts.entry(card.suit()).or_insert(0) += 1;
    }
    counts
}
