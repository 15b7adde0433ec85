// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pepper Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pepper_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(kd < ah);
//! ```
//!
//! and a [Deck] type for shuffling, drawing, removing and returning cards:
//!
//! ```
//! # use pepper_cards::{Card, Deck, Rank, Suit};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//!
//! let card = deck.draw()?;
//! assert_eq!(deck.len(), Deck::SIZE - 1);
//!
//! deck.return_card(card)?;
//! assert_eq!(deck.cards().last(), Some(&card));
//! # Ok::<(), pepper_cards::Error>(())
//! ```
//!
//! The [random] module samples suits, ranks and cards with exclusions, the
//! [group] module counts and groups cards for hand evaluation:
//!
//! ```
//! # use pepper_cards::{group, Card, Rank, Suit};
//! let hand = [
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Diamonds),
//! ];
//! let counts = group::count_by_rank(&hand);
//! assert_eq!(counts[&Rank::Two], 2);
//! assert_eq!(group::count_by_suit(&hand)[&Suit::Spades], 0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod error;
pub mod group;
pub mod random;

pub use card::{Card, Rank, Suit, contains_rank};
pub use deck::Deck;
pub use error::{Error, Result};
