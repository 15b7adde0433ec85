// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playing card.
///
/// Cards are ordered by rank first and by suit when ranks are equal, see
/// [Suit] for the suits order. Two cards are equal only if both rank and
/// suit match.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card {
    // Field order matters for the derived ordering.
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Checks if this card has the same rank as `other` regardless of suit.
    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    /// The key used to look up this card image asset.
    ///
    /// The key is the rank label followed by the suit name initial:
    ///
    /// ```
    /// # use pepper_cards::{Card, Rank, Suit};
    /// assert_eq!(Card::new(Rank::Ten, Suit::Clubs).image_key(), "10C");
    /// assert_eq!(Card::new(Rank::Ace, Suit::Spades).image_key(), "AS");
    /// ```
    pub fn image_key(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.initial())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Checks if any of the cards has the given rank.
pub fn contains_rank(rank: Rank, cards: &[Card]) -> bool {
    cards.iter().any(|c| c.rank == rank)
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two = 0,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks from Two to Ace.
    pub const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from Two to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        Self::ALL.into_iter()
    }

    /// The rank label used for display and image keys.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
///
/// Suits are ordered Clubs < Diamonds < Spades < Hearts, this order only
/// breaks ties between cards of the same rank.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// All suits in ascending order.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    /// Returns all suits in ascending order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + Clone {
        Self::ALL.into_iter()
    }

    /// The suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Club",
            Suit::Diamonds => "Diamond",
            Suit::Spades => "Spade",
            Suit::Hearts => "Heart",
        }
    }

    /// The first letter of the suit name.
    pub fn initial(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn all_cards() -> Vec<Card> {
        Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect()
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(c.to_string(), "10♣");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "A♥");
        assert_eq!(format!("{c:?}"), "Card(A♥)");
    }

    #[test]
    fn card_image_key() {
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).image_key(), "2H");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).image_key(), "10D");
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).image_key(), "QS");
        assert_eq!(Card::new(Rank::King, Suit::Clubs).image_key(), "KC");

        // Keys are unique.
        let keys = all_cards()
            .iter()
            .map(Card::image_key)
            .collect::<ahash::AHashSet<_>>();
        assert_eq!(keys.len(), 52);
    }

    #[test]
    fn card_equality() {
        let tc = Card::new(Rank::Ten, Suit::Clubs);
        let th = Card::new(Rank::Ten, Suit::Hearts);

        assert_eq!(tc, Card::new(Rank::Ten, Suit::Clubs));
        assert_ne!(tc, th);
        assert!(tc.same_rank(&th));
        assert!(!tc.same_rank(&Card::new(Rank::Jack, Suit::Clubs)));
    }

    #[test]
    fn card_ordering() {
        let two_c = Card::new(Rank::Two, Suit::Clubs);
        let two_h = Card::new(Rank::Two, Suit::Hearts);
        let two_s = Card::new(Rank::Two, Suit::Spades);
        let ace_c = Card::new(Rank::Ace, Suit::Clubs);

        // Rank first.
        assert!(two_h < ace_c);
        // Then suit.
        assert!(two_c < two_s);
        assert!(two_s < two_h);
        assert_eq!(two_c.cmp(&two_c), Ordering::Equal);
    }

    #[test]
    fn ordering_is_total() {
        let cards = all_cards();

        for a in &cards {
            for b in &cards {
                let ab = a.cmp(b);
                assert_eq!(ab, b.cmp(a).reverse());
                assert_eq!(ab == Ordering::Equal, a == b);

                for c in &cards {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn sort_cards() {
        let mut cards = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        cards.sort();

        assert_eq!(
            cards,
            [
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Two, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Jack, Suit::Spades),
            ]
        );

        // Any permutation sorts to the same sequence.
        let mut sorted = all_cards();
        sorted.sort();
        let mut reversed = all_cards();
        reversed.reverse();
        reversed.sort();
        assert_eq!(sorted, reversed);
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn card_contains_rank() {
        let cards = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::King, Suit::Diamonds),
        ];

        assert!(contains_rank(Rank::King, &cards));
        assert!(!contains_rank(Rank::Ace, &cards));
        assert!(!contains_rank(Rank::Two, &[]));
    }
}
