// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pepper Poker core types for moving cards across the transport boundary.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod wire;

// Reexport cards types.
pub use pepper_cards::{Card, Deck, Error, Rank, Suit};
