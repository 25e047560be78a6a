//! # sorry-mcts
//!
//! A Sorry! board game engine with Monte Carlo Tree Search move selection.
//!
//! ## Design Principles
//!
//! 1. **States are values**: a `Sorry` game state is a handful of fixed-size
//!    arrays. The search clones it for every simulated branch; nothing is
//!    shared between branches.
//!
//! 2. **Rules travel with the game**: rule variants live in a `RuleConfig`
//!    stored inside each state, so the search always simulates the rules the
//!    game is actually played under.
//!
//! 3. **Determinism**: all randomness flows through a seeded `GameRng`.
//!    Same seed, same game, same search.
//!
//! ## Modules
//!
//! - `core`: cards, actions, colors, the deck, RNG and errors
//! - `rules`: board geometry and rule toggles
//! - `game`: the game state, move generation and transitions
//! - `mcts`: Monte Carlo Tree Search
//! - `agents`: decision makers and the game driver

pub mod agents;
pub mod core;
pub mod game;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Action, Card, Deck, GameRng, PlayerColor, Result, SorryError};

pub use crate::rules::{DiscardTiming, RuleConfig};

pub use crate::game::{PlayerState, Sorry};

pub use crate::mcts::{
    ActionScore, Budget, ExplicitTerminator, LoopCondition, MctsConfig, Objective, SearchStats,
    SorryMcts,
};

pub use crate::agents::{play_game, play_series, Agent, GameRecord, MctsAgent, RandomAgent, Seat};
