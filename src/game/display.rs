//! Textual form of a game state, for logs and debugging.
//!
//! Solitaire:
//!
//! ```text
//! {Hand:One,Four,Seven,Ten,Sorry;deck:40;piece positions(2,0,0,0)}
//! ```
//!
//! With opponents, only the hand of the player to move is shown unless
//! [`Sorry::to_string_revealed`] is used:
//!
//! ```text
//! {Deck:35,Turn:Green,(Green:One,Two,Two,Five,Eight|2,0,0,0),(Red:?|2,0,0,0)}
//! ```

use std::fmt::{self, Write};

use super::state::{PlayerState, Sorry};

impl Sorry {
    /// Like `to_string`, but with every hand shown.
    #[must_use]
    pub fn to_string_revealed(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_state(&mut out, true);
        out
    }

    fn write_state<W: Write>(&self, f: &mut W, reveal_all: bool) -> fmt::Result {
        if self.players.len() == 1 {
            let player = &self.players[0];
            f.write_str("{Hand:")?;
            write_hand(f, player)?;
            write!(f, ";deck:{};piece positions(", self.deck.size())?;
            write_positions(f, player)?;
            return f.write_str(")}");
        }

        write!(f, "{{Deck:{},Turn:{}", self.deck.size(), self.player_turn())?;
        for (index, player) in self.players.iter().enumerate() {
            write!(f, ",({}:", player.color)?;
            if reveal_all || index == self.turn {
                write_hand(f, player)?;
            } else {
                f.write_char('?')?;
            }
            f.write_char('|')?;
            write_positions(f, player)?;
            f.write_char(')')?;
        }
        f.write_char('}')
    }
}

fn write_hand<W: Write>(f: &mut W, player: &PlayerState) -> fmt::Result {
    if !player.has_hand {
        return f.write_str("none");
    }
    for (i, card) in player.hand.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

fn write_positions<W: Write>(f: &mut W, player: &PlayerState) -> fmt::Result {
    for (i, pos) in player.positions.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{pos}")?;
    }
    Ok(())
}

impl fmt::Display for Sorry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_state(f, false)
    }
}
