//! Core value types: cards, actions, colors, the deck, RNG and errors.

pub mod action;
pub mod card;
pub mod color;
pub mod deck;
pub mod error;
pub mod rng;

pub use action::Action;
pub use card::{Card, DECK_SIZE};
pub use color::{PlayerColor, MAX_PLAYERS};
pub use deck::Deck;
pub use error::{Result, SorryError};
pub use rng::GameRng;
