//! Error type shared by the engine and the search.
//!
//! Every variant is an invariant violation or a sequencing mistake by the
//! caller. Ordinary situations such as having no legal move or running the
//! deck dry are handled as normal control flow and never surface here.

use thiserror::Error;

use super::action::Action;
use super::card::Card;
use super::color::PlayerColor;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SorryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SorryError {
    #[error("{operation} called before starting hands were dealt")]
    HandsNotDealt { operation: &'static str },

    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerColor, card: Card },

    #[error("piece index {piece} out of range")]
    InvalidPiece { piece: usize },

    #[error("card {card} not found in deck")]
    CardNotFound { card: Card },

    #[error("no live cards left in deck")]
    DeckExhausted,

    #[error(
        "{first_player} piece {first_piece} and {second_player} piece {second_piece} \
         share square {square} after {action}"
    )]
    PieceCollision {
        first_player: PlayerColor,
        first_piece: usize,
        second_player: PlayerColor,
        second_piece: usize,
        square: u8,
        action: Action,
    },

    #[error("asked for best action but no search tree has been built")]
    NoSearchTree,

    #[error("search tree has no explored actions at its root")]
    NoActionsExplored,

    #[error("invalid player list: {reason}")]
    InvalidPlayers { reason: &'static str },

    #[error("{color} is not playing in this game")]
    UnknownPlayer { color: PlayerColor },

    #[error("invalid starting position {position}: {reason}")]
    InvalidStartingPosition { position: u8, reason: &'static str },

    #[error("game is not finished")]
    GameNotFinished,

    #[error("{operation} called after the game ended")]
    GameOver { operation: &'static str },
}
