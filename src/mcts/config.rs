//! Search parameters and objectives.

use serde::{Deserialize, Serialize};

/// What the search optimizes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// Finish in as few total actions as possible (solitaire).
    MinimizeActions,
    /// Maximize the mover's chance of finishing first.
    MaximizeWins,
}

impl Objective {
    /// The natural objective for a game with `player_count` seats.
    #[must_use]
    pub fn for_player_count(player_count: usize) -> Self {
        if player_count <= 1 {
            Objective::MinimizeActions
        } else {
            Objective::MaximizeWins
        }
    }
}

/// Parameters for `SorryMcts`, fixed when the search is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Weight of the UCB bonus during descent. Never applied when
    /// picking the final action.
    pub exploration_constant: f64,

    /// Seed for the card draws inside simulated games.
    pub seed: u64,

    /// Fixed objective, or `None` to pick one from the player count.
    pub objective: Option<Objective>,

    /// Iterations between voluntary yields to waiting readers.
    pub yield_interval: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
            objective: None,
            yield_interval: 100,
        }
    }
}

impl MctsConfig {
    /// Replace the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a fixed objective.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Create a new config with a custom yield interval (minimum 1).
    pub fn with_yield_interval(mut self, interval: u64) -> Self {
        self.yield_interval = interval.max(1);
        self
    }

    /// The objective to use for a game with `player_count` seats.
    #[must_use]
    pub fn objective_for(&self, player_count: usize) -> Objective {
        self.objective.unwrap_or_else(|| Objective::for_player_count(player_count))
    }
}
