//! Player colors.
//!
//! A color identifies a seat at the board. Each color's home stretch sits a
//! quarter of the track after the previous one, which is what
//! [`PlayerColor::track_offset`] encodes.

use serde::{Deserialize, Serialize};

/// Maximum number of players at one board.
pub const MAX_PLAYERS: usize = 4;

/// Player color, in clockwise seating order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Green,
    Red,
    Blue,
    Yellow,
}

impl PlayerColor {
    /// All colors in seating order.
    pub const ALL: [PlayerColor; MAX_PLAYERS] = [
        PlayerColor::Green,
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Yellow,
    ];

    /// Dense 0-based index, usable for per-color tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Where this color's square 1 lies on the shared track, minus one.
    #[inline]
    #[must_use]
    pub const fn track_offset(self) -> u8 {
        (self as u8) * 15
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Green => "Green",
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
