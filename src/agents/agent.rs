//! Decision makers for one seat.

use crate::core::{Action, GameRng, Result, SorryError};
use crate::game::Sorry;
use crate::mcts::{Budget, MctsConfig, SorryMcts};

/// Something that picks an action for the player to move.
pub trait Agent {
    /// Choose one of `game.get_actions()`.
    fn choose_action(&mut self, game: &Sorry) -> Result<Action>;

    /// Short label for logs.
    fn name(&self) -> &str;
}

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, game: &Sorry) -> Result<Action> {
        let actions = game.get_actions()?;
        self.rng
            .choose(&actions)
            .copied()
            .ok_or(SorryError::GameOver { operation: "choose_action" })
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Runs a fresh search on every decision.
pub struct MctsAgent {
    search: SorryMcts,
    budget: Budget,
}

impl MctsAgent {
    pub fn new(config: MctsConfig, budget: Budget) -> Self {
        Self {
            search: SorryMcts::new(config),
            budget,
        }
    }

    /// The search behind this agent, holding the tree of its last decision.
    pub fn search(&self) -> &SorryMcts {
        &self.search
    }
}

impl Agent for MctsAgent {
    fn choose_action(&mut self, game: &Sorry) -> Result<Action> {
        if game.game_done() {
            return Err(SorryError::GameOver { operation: "choose_action" });
        }
        self.search.run(game, self.budget)?;
        self.search.pick_best_action()
    }

    fn name(&self) -> &str {
        "mcts"
    }
}
