//! The Sorry! game engine.
//!
//! `Sorry` is a value type: the search clones it for every simulated
//! branch. Its behavior is split across files:
//! - `state`: construction, setup and queries
//! - `movegen`: legal actions for the player to move
//! - `transition`: applying an action
//! - `display`: the textual form used in logs

mod display;
mod movegen;
pub mod state;
mod transition;

pub use state::{PlayerState, Sorry};
