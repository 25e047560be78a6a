//! Card values for the Sorry! deck.
//!
//! The deck holds 45 cards: five Ones and four of every other value.
//! There are no Sixes or Nines.

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 45;

/// A card value.
///
/// Ordering follows face value with `Sorry` last. Hands are kept sorted by
/// this order so that equal hands compare equal slot by slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    One,
    Two,
    Three,
    Four,
    Five,
    Seven,
    Eight,
    Ten,
    Eleven,
    Twelve,
    Sorry,
}

impl Card {
    /// Every distinct card value, in sort order.
    pub const ALL: [Card; 11] = [
        Card::One,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Seven,
        Card::Eight,
        Card::Ten,
        Card::Eleven,
        Card::Twelve,
        Card::Sorry,
    ];

    /// How many copies of this value a full deck contains.
    #[must_use]
    pub const fn multiplicity(self) -> usize {
        match self {
            Card::One => 5,
            _ => 4,
        }
    }

    /// Signed distance of the card's plain move.
    ///
    /// Four is the one card that moves backward. The Sorry card's plain move
    /// is forward four and only applies when the rules enable it.
    #[must_use]
    pub const fn move_distance(self) -> i8 {
        match self {
            Card::One => 1,
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => -4,
            Card::Five => 5,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Ten => 10,
            Card::Eleven => 11,
            Card::Twelve => 12,
            Card::Sorry => 4,
        }
    }

    /// Dense index for per-value tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed display token.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::One => "One",
            Card::Two => "Two",
            Card::Three => "Three",
            Card::Four => "Four",
            Card::Five => "Five",
            Card::Seven => "Seven",
            Card::Eight => "Eight",
            Card::Ten => "Ten",
            Card::Eleven => "Eleven",
            Card::Twelve => "Twelve",
            Card::Sorry => "Sorry",
        }
    }

    /// The full deck composition in canonical order.
    #[must_use]
    pub fn full_deck() -> [Card; DECK_SIZE] {
        let mut cards = [Card::One; DECK_SIZE];
        let mut i = 0;
        for card in Card::ALL {
            for _ in 0..card.multiplicity() {
                cards[i] = card;
                i += 1;
            }
        }
        cards
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplicities_sum_to_deck_size() {
        let total: usize = Card::ALL.iter().map(|c| c.multiplicity()).sum();
        assert_eq!(total, DECK_SIZE);
    }

    #[test]
    fn test_full_deck_composition() {
        let deck = Card::full_deck();
        for card in Card::ALL {
            let count = deck.iter().filter(|&&c| c == card).count();
            assert_eq!(count, card.multiplicity(), "wrong count for {card}");
        }
    }

    #[test]
    fn test_four_moves_backward() {
        assert_eq!(Card::Four.move_distance(), -4);
        assert_eq!(Card::Sorry.move_distance(), 4);
        assert_eq!(Card::Twelve.move_distance(), 12);
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(Card::One.to_string(), "One");
        assert_eq!(Card::Eleven.to_string(), "Eleven");
        assert_eq!(Card::Sorry.to_string(), "Sorry");
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, card) in Card::ALL.iter().enumerate() {
            assert_eq!(card.index(), i);
        }
    }
}
