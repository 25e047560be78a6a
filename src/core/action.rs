//! Player actions.
//!
//! An action names the card being played and, for moves, which of the
//! mover's pieces go where. Destinations are squares in the mover's own
//! frame before any slide is applied. An action only has meaning relative to
//! the state that produced it.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// A complete player action.
///
/// ## Example
///
/// ```
/// use sorry_mcts::core::{Action, Card};
///
/// let discard = Action::Discard { card: Card::Three };
/// let advance = Action::SingleMove { card: Card::Five, piece: 0, destination: 7 };
///
/// assert_eq!(discard.card(), Card::Three);
/// assert_eq!(advance.to_string(), "SingleMove,Five,0,7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Discard a card without moving (only when nothing else is legal).
    Discard { card: Card },

    /// Move one piece.
    SingleMove {
        card: Card,
        piece: usize,
        destination: u8,
    },

    /// Split a Seven across two pieces.
    DoubleMove {
        card: Card,
        first_piece: usize,
        first_destination: u8,
        second_piece: usize,
        second_destination: u8,
    },

    /// Trade places with an opponent's piece using an Eleven.
    Swap {
        card: Card,
        piece: usize,
        destination: u8,
    },
}

impl Action {
    /// The card this action plays.
    #[must_use]
    pub fn card(&self) -> Card {
        match *self {
            Action::Discard { card }
            | Action::SingleMove { card, .. }
            | Action::DoubleMove { card, .. }
            | Action::Swap { card, .. } => card,
        }
    }

    /// Short name of the action kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Discard { .. } => "Discard",
            Action::SingleMove { .. } => "SingleMove",
            Action::DoubleMove { .. } => "DoubleMove",
            Action::Swap { .. } => "Swap",
        }
    }

    /// Check if this action moves no pieces.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        matches!(self, Action::Discard { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.kind(), self.card())?;
        match *self {
            Action::Discard { .. } => Ok(()),
            Action::SingleMove { piece, destination, .. }
            | Action::Swap { piece, destination, .. } => write!(f, ",{piece},{destination}"),
            Action::DoubleMove {
                first_piece,
                first_destination,
                second_piece,
                second_destination,
                ..
            } => write!(
                f,
                ",{first_piece},{first_destination},{second_piece},{second_destination}"
            ),
        }
    }
}
