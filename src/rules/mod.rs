//! Rules of the board: track geometry and rule-variant toggles.
//!
//! The game state consults these but never hardcodes them:
//! - `board`: squares, slides and per-color frames
//! - `config`: `RuleConfig`, fixed for the lifetime of a game

pub mod board;
pub mod config;

pub use config::{DiscardTiming, RuleConfig};
