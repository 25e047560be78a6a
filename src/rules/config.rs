//! Rule-variant toggles.
//!
//! A `RuleConfig` is fixed when a game is created and travels with the game
//! state by value, so the search always simulates exactly the rules the real
//! game is played under.

use serde::{Deserialize, Serialize};

/// When the played card reaches the discard pile relative to the
/// replacement draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardTiming {
    /// Discard first, then draw. A reshuffle triggered by the draw
    /// recycles the played card too.
    BeforeReshuffle,
    /// Draw (and reshuffle if needed) first, then discard. The played card
    /// stays out of the fresh live pile.
    AfterReshuffle,
}

/// Rule-variant configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Playing a Two lets the same player act again.
    pub two_grants_extra_turn: bool,

    /// The Sorry card may also move a piece forward four.
    pub sorry_moves_forward_four: bool,

    /// Every player starts with one piece already out of start.
    pub start_with_piece_out: bool,

    /// Ordering of discard and reshuffle when a draw empties the deck.
    pub discard_timing: DiscardTiming,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            two_grants_extra_turn: false,
            sorry_moves_forward_four: true,
            start_with_piece_out: true,
            discard_timing: DiscardTiming::BeforeReshuffle,
        }
    }
}

impl RuleConfig {
    /// Set whether a Two grants an extra turn.
    pub fn with_extra_turn_on_two(mut self, enabled: bool) -> Self {
        self.two_grants_extra_turn = enabled;
        self
    }

    /// Set whether the Sorry card can move forward four.
    pub fn with_sorry_forward_four(mut self, enabled: bool) -> Self {
        self.sorry_moves_forward_four = enabled;
        self
    }

    /// Set whether players start with a piece out.
    pub fn with_piece_out(mut self, enabled: bool) -> Self {
        self.start_with_piece_out = enabled;
        self
    }

    /// Set the discard timing.
    pub fn with_discard_timing(mut self, timing: DiscardTiming) -> Self {
        self.discard_timing = timing;
        self
    }
}
