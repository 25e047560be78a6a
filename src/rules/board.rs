//! Board geometry.
//!
//! Every piece position is stored in its owner's frame:
//!
//! - `0` is start
//! - `1..=60` is the shared loop, with the owner's start exit at square 2
//! - `61..=65` is the owner's private safety zone
//! - `66` is home
//!
//! Moving backward past square 1 wraps to 60. Moving forward past 60 enters
//! the safety zone; there is no forward wrap.
//!
//! Slides belong to the other colors. In any player's frame they begin at
//! 14, 29 and 44 (four squares long) and at 22, 37 and 52 (five squares
//! long). A player's own slides, at 59 and 7, never move them.

use crate::core::PlayerColor;

/// Start square (shared by every piece not yet in play).
pub const START: u8 = 0;

/// Home square (shared by every finished piece).
pub const HOME: u8 = 66;

/// Length of the shared loop.
pub const TRACK_LENGTH: u8 = 60;

/// First square of the private safety zone.
pub const FIRST_SAFETY: u8 = 61;

/// Where a piece leaving start lands.
pub const START_EXIT: u8 = 2;

/// Pieces per player.
pub const PIECES_PER_PLAYER: usize = 4;

/// Cards per hand.
pub const HAND_SIZE: usize = 5;

/// Length of the slide beginning at `pos`, or 0 if `pos` starts no slide.
#[inline]
#[must_use]
pub const fn slide_length(pos: u8) -> u8 {
    match pos {
        14 | 29 | 44 => 4,
        22 | 37 | 52 => 5,
        _ => 0,
    }
}

/// Where a piece landing on `pos` comes to rest.
#[inline]
#[must_use]
pub const fn position_after_slide(pos: u8) -> u8 {
    match slide_length(pos) {
        0 => pos,
        len => pos + len - 1,
    }
}

/// Squares a piece landing on `pos` passes over, including `pos` itself.
///
/// Empty when `pos` starts no slide.
#[inline]
#[must_use]
pub fn slide_squares(pos: u8) -> std::ops::Range<u8> {
    pos..pos + slide_length(pos)
}

/// Normalize a raw destination, wrapping backward moves past square 1.
#[inline]
#[must_use]
pub fn wrap(raw: i16) -> u8 {
    if raw < 1 {
        (raw + TRACK_LENGTH as i16) as u8
    } else {
        raw as u8
    }
}

/// Check if a position is on the shared loop.
#[inline]
#[must_use]
pub const fn is_on_track(pos: u8) -> bool {
    pos >= 1 && pos <= TRACK_LENGTH
}

/// Convert an own-frame position to an absolute loop square.
///
/// Returns `None` for start, safety and home, which no other color can
/// reach.
#[must_use]
pub fn to_track(color: PlayerColor, pos: u8) -> Option<u8> {
    if !is_on_track(pos) {
        return None;
    }
    Some((pos - 1 + color.track_offset()) % TRACK_LENGTH + 1)
}

/// Convert an absolute loop square to `color`'s frame, or `None` if
/// `square` is not in `1..=60`.
#[must_use]
pub fn from_track(color: PlayerColor, square: u8) -> Option<u8> {
    if !is_on_track(square) {
        return None;
    }
    Some((square - 1 + TRACK_LENGTH - color.track_offset()) % TRACK_LENGTH + 1)
}

/// Translate a loop position from one color's frame into another's.
#[must_use]
pub fn translate(from: PlayerColor, to: PlayerColor, pos: u8) -> Option<u8> {
    to_track(from, pos).and_then(|square| from_track(to, square))
}
