//! Monte Carlo Tree Search over Sorry! states.
//!
//! ## Overview
//!
//! - **Full replay**: every iteration replays the real game from the root,
//!   drawing fresh random cards, so the tree is keyed on (state, action)
//! - **Two objectives**: fewest total actions (solitaire) or most wins
//!   (multi-player), see [`Objective`]
//! - **Budgets**: iteration count, wall-clock time, or an external stop flag
//! - **Shared reads**: scores can be polled from another thread mid-search
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use sorry_mcts::core::GameRng;
//! use sorry_mcts::game::Sorry;
//! use sorry_mcts::mcts::{Budget, MctsConfig, SorryMcts};
//!
//! let mut game = Sorry::default();
//! game.draw_random_starting_cards(&mut GameRng::new(1)).unwrap();
//!
//! let search = SorryMcts::new(MctsConfig::default().with_seed(3));
//! search.run(&game, Budget::Time(Duration::from_millis(20))).unwrap();
//!
//! for score in search.action_scores() {
//!     println!("{}: {:.3} over {} visits", score.action, score.score, score.visits);
//! }
//! let best = search.pick_best_action().unwrap();
//! # let _ = best;
//! ```

pub mod condition;
pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use condition::{Budget, ExplicitTerminator, IterationLimit, LoopCondition, TimeLimit};
pub use config::{MctsConfig, Objective};
pub use node::{MCTSNode, NodeId};
pub use policy::{policy_for, MoveCount, SelectionPolicy, WinRate};
pub use search::{rollout, ActionScore, Outcome, SorryMcts};
pub use stats::SearchStats;
pub use tree::MCTSTree;
