// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards error types.
use thiserror::Error;

use crate::Card;

/// Errors returned by deck, sampling and encoding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Draw or remove on a deck with no cards.
    #[error("deck is empty")]
    EmptyDeck,
    /// The card is already in the deck.
    #[error("cannot add duplicate card {0}")]
    DuplicateCard(Card),
    /// A transport value that doesn't map to a suit or rank.
    #[error("invalid {what} encoding {value}")]
    InvalidEncoding {
        /// What was being decoded.
        what: &'static str,
        /// The offending value.
        value: i32,
    },
    /// Nothing is left to sample from.
    #[error("no {domain} left to choose from")]
    ExhaustedExclusionSet {
        /// The sampled domain.
        domain: &'static str,
    },
}

/// Result alias for cards operations.
pub type Result<T> = std::result::Result<T, Error>;
