//! The shared 45-card draw pile.
//!
//! Cards never leave the backing array. Instead the array is split into
//! three contiguous ranges that shift as cards move:
//!
//! ```text
//! [0, live_end)              live: can be drawn
//! [live_end, discard_start)  held: sitting in some player's hand
//! [discard_start, 45)        discarded
//! ```
//!
//! Drawing and discarding are swaps across a boundary, so every operation
//! is O(1) apart from the linear searches for a specific card value.

use super::card::{Card, DECK_SIZE};
use super::error::{Result, SorryError};
use super::rng::GameRng;

/// Fixed-capacity deck with live, held and discarded partitions.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    live_end: usize,
    discard_start: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create a full deck with every card live.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::full_deck(),
            live_end: DECK_SIZE,
            discard_start: DECK_SIZE,
        }
    }

    /// Reset to the full composition with nothing held or discarded.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    /// Number of live (drawable) cards.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.live_end
    }

    /// Check if no live cards remain.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_end == 0
    }

    /// Number of cards currently held in hands.
    #[inline]
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.discard_start - self.live_end
    }

    /// Number of cards in the discard pile.
    #[inline]
    #[must_use]
    pub fn discarded_count(&self) -> usize {
        DECK_SIZE - self.discard_start
    }

    /// How many live copies of `card` remain.
    #[must_use]
    pub fn count_live(&self, card: Card) -> usize {
        self.cards[..self.live_end].iter().filter(|&&c| c == card).count()
    }

    /// Live card counts indexed by [`Card::index`].
    #[must_use]
    pub fn live_counts(&self) -> [u8; Card::ALL.len()] {
        let mut counts = [0u8; Card::ALL.len()];
        for card in &self.cards[..self.live_end] {
            counts[card.index()] += 1;
        }
        counts
    }

    /// Draw a uniformly random live card. The card becomes held.
    pub fn draw_random_card(&mut self, rng: &mut GameRng) -> Result<Card> {
        if self.is_empty() {
            return Err(SorryError::DeckExhausted);
        }
        let index = rng.index_below(self.live_end);
        Ok(self.take_live(index))
    }

    /// Move a specific live card into held, for forcing a known hand.
    pub fn remove_specific_card(&mut self, card: Card) -> Result<()> {
        if self.is_empty() {
            return Err(SorryError::DeckExhausted);
        }
        let index = self.cards[..self.live_end]
            .iter()
            .position(|&c| c == card)
            .ok_or(SorryError::CardNotFound { card })?;
        self.take_live(index);
        Ok(())
    }

    /// Move a held card into the discard pile.
    pub fn discard(&mut self, card: Card) -> Result<()> {
        let offset = self.cards[self.live_end..self.discard_start]
            .iter()
            .position(|&c| c == card)
            .ok_or(SorryError::CardNotFound { card })?;
        self.discard_start -= 1;
        self.cards.swap(self.live_end + offset, self.discard_start);
        Ok(())
    }

    /// Return every discarded card to the live range. Held cards stay held.
    ///
    /// Equivalent to reinitializing the deck and removing every card
    /// currently in a hand.
    pub fn reshuffle(&mut self) {
        let live = self.live_end;
        let held = self.held_count();
        let mut rebuilt = [Card::One; DECK_SIZE];
        rebuilt[..live].copy_from_slice(&self.cards[..live]);
        rebuilt[live..live + self.discarded_count()]
            .copy_from_slice(&self.cards[self.discard_start..]);
        rebuilt[DECK_SIZE - held..].copy_from_slice(&self.cards[self.live_end..self.discard_start]);
        self.cards = rebuilt;
        self.live_end = DECK_SIZE - held;
        self.discard_start = DECK_SIZE;
    }

    fn take_live(&mut self, index: usize) -> Card {
        let card = self.cards[index];
        self.live_end -= 1;
        self.cards.swap(index, self.live_end);
        card
    }
}

/// Two decks are equal when their live multisets match.
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.live_end == other.live_end && self.live_counts() == other.live_counts()
    }
}

impl Eq for Deck {}
