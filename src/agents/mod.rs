//! Agents and the game driver.
//!
//! An [`Agent`] picks actions for a seat; [`play_game`] and [`play_series`]
//! seat agents at a board and play to the end.

pub mod agent;
pub mod driver;

pub use agent::{Agent, MctsAgent, RandomAgent};
pub use driver::{play_game, play_series, GameRecord, Seat};
