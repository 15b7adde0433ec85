// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards images configuration.
use std::path::PathBuf;

use pepper_core::Card;

/// Where to find the cards images.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Directory with one image per card.
    pub deck_dir: PathBuf,
    /// Image placed between the hole cards and the board.
    pub divider: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            deck_dir: PathBuf::from("images/deck/deck1"),
            divider: PathBuf::from("images/deck/deck1/blank.png"),
        }
    }
}

impl DisplayConfig {
    /// The image path for a card, the file is not checked.
    pub fn card_path(&self, card: Card) -> PathBuf {
        self.deck_dir.join(format!("{}.png", card.image_key()))
    }

    /// The images for a row of cards.
    ///
    /// If `divider` is set the divider image goes after the first two cards.
    pub fn layout(&self, cards: &[Card], divider: bool) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(cards.len() + 1);
        for (idx, card) in cards.iter().enumerate() {
            paths.push(self.card_path(*card));

            if divider && idx == 1 {
                paths.push(self.divider.clone());
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pepper_core::{Rank, Suit};

    fn config() -> DisplayConfig {
        DisplayConfig {
            deck_dir: PathBuf::from("/decks/classic"),
            divider: PathBuf::from("/decks/blank.png"),
        }
    }

    #[test]
    fn card_paths() {
        let config = config();
        assert_eq!(
            config.card_path(Card::new(Rank::Ten, Suit::Hearts)),
            PathBuf::from("/decks/classic/10H.png")
        );
        assert_eq!(
            config.card_path(Card::new(Rank::Jack, Suit::Clubs)),
            PathBuf::from("/decks/classic/JC.png")
        );
    }

    #[test]
    fn layout_with_divider() {
        let config = config();
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Two, Suit::Diamonds),
        ];

        let paths = config.layout(&cards, true);
        assert_eq!(
            paths,
            [
                PathBuf::from("/decks/classic/AS.png"),
                PathBuf::from("/decks/classic/KS.png"),
                PathBuf::from("/decks/blank.png"),
                PathBuf::from("/decks/classic/2D.png"),
            ]
        );

        let paths = config.layout(&cards, false);
        assert_eq!(paths.len(), cards.len());
        assert!(!paths.contains(&config.divider));

        // No divider for a single card.
        assert_eq!(config.layout(&cards[..1], true).len(), 1);
        assert!(config.layout(&[], true).is_empty());
    }
}
