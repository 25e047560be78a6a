//! Core MCTS search algorithm.
//!
//! Each iteration replays the real game from the root:
//!
//! 1. At each node, walk the legal actions of the simulated state. The
//!    first one with no child for (state, action) is expanded: a child is
//!    added, the action applied, a random rollout played to the end, and
//!    the outcome backpropagated to the root.
//! 2. If every action already has a child, pick one with the selection
//!    policy (exploration on), apply it and descend.
//! 3. If the game ends inside the tree, the terminal outcome is
//!    backpropagated from the last node reached.
//!
//! Random card draws mean the same action can lead to different states,
//! so children are matched on the pre-action state as well as the action.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Instant;

use smallvec::SmallVec;

use crate::core::{Action, GameRng, PlayerColor, Result, SorryError};
use crate::game::Sorry;

use super::condition::{Budget, LoopCondition};
use super::config::{MctsConfig, Objective};
use super::node::NodeId;
use super::policy::policy_for;
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// How a simulated game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Total actions taken in the whole game.
    pub action_count: u32,
    /// First player to bring every piece home.
    pub winner: Option<PlayerColor>,
}

impl Outcome {
    /// Read the outcome off a finished game.
    #[must_use]
    pub fn of(state: &Sorry) -> Self {
        Self {
            action_count: state.total_action_count(),
            winner: state.winner(),
        }
    }
}

/// Play uniformly random legal actions until the game ends.
pub fn rollout(mut state: Sorry, rng: &mut GameRng) -> Result<Outcome> {
    while !state.game_done() {
        let actions = state.get_actions()?;
        let Some(&action) = rng.choose(&actions) else {
            break;
        };
        state.do_action(&action, rng)?;
    }
    Ok(Outcome::of(&state))
}

/// Statistics for one root action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionScore {
    pub action: Action,
    /// Exploitation score under the search objective, without exploration.
    pub score: f64,
    pub visits: u32,
    pub average_action_count: f64,
    /// Share of visits won by the player to move at the root.
    pub win_rate: f64,
}

/// Search state guarded by the lock.
struct SearchInner {
    tree: Option<MCTSTree>,
    objective: Objective,
    rng: GameRng,
    stats: SearchStats,
}

impl SearchInner {
    /// One selection, expansion, rollout and backpropagation pass.
    fn iterate(&mut self, start: &Sorry, exploration: f64) -> Result<()> {
        let tree = self.tree.as_mut().ok_or(SorryError::NoSearchTree)?;
        let policy = policy_for(self.objective);

        let mut state = start.clone();
        let mut current = tree.root();
        let mut candidates: SmallVec<[NodeId; 16]> = SmallVec::new();

        while !state.game_done() {
            candidates.clear();
            for action in state.get_actions()? {
                if let Some(child) = tree.find_child(current, &state, &action) {
                    candidates.push(child);
                    continue;
                }

                let child = tree.add_child(current, state.clone(), action);
                let depth = tree.get(child).depth;
                self.stats.nodes_expanded += 1;
                self.stats.max_depth = self.stats.max_depth.max(depth);
                log::trace!("expanding {action} at depth {depth}");

                state.do_action(&action, &mut self.rng)?;
                let outcome = rollout(state, &mut self.rng)?;
                self.stats.rollouts += 1;
                backprop(tree, child, outcome);
                return Ok(());
            }

            current = policy
                .select(tree, current, &candidates, Some(exploration))
                .ok_or(SorryError::NoActionsExplored)?;
            if let Some(action) = tree.get(current).action {
                state.do_action(&action, &mut self.rng)?;
            }
        }

        self.stats.terminal_backprops += 1;
        backprop(tree, current, Outcome::of(&state));
        Ok(())
    }
}

/// Record `outcome` on `node` and every ancestor up to the root.
fn backprop(tree: &mut MCTSTree, mut node: NodeId, outcome: Outcome) {
    loop {
        let current = tree.get_mut(node);
        current.visits += 1;
        current.total_action_count += u64::from(outcome.action_count);
        if let Some(winner) = outcome.winner {
            current.wins[winner.index()] += 1;
        }
        if current.parent.is_none() {
            break;
        }
        node = current.parent;
    }
}

/// Monte Carlo Tree Search over Sorry! game states.
///
/// All methods take `&self`: one thread can drive [`SorryMcts::run`] while
/// others read scores. The tree lives behind a mutex held for one
/// iteration at a time, and the loop yields every `yield_interval`
/// iterations so readers get a turn.
///
/// ## Example
///
/// ```
/// use sorry_mcts::core::GameRng;
/// use sorry_mcts::game::Sorry;
/// use sorry_mcts::mcts::{Budget, MctsConfig, SorryMcts};
///
/// let mut game = Sorry::default();
/// game.draw_random_starting_cards(&mut GameRng::new(7)).unwrap();
///
/// let search = SorryMcts::new(MctsConfig::default());
/// search.run(&game, Budget::Iterations(200)).unwrap();
/// let action = search.pick_best_action().unwrap();
/// assert!(game.get_actions().unwrap().contains(&action));
/// ```
pub struct SorryMcts {
    config: MctsConfig,
    inner: Mutex<SearchInner>,
    iterations: AtomicU64,
}

impl SorryMcts {
    /// Create a search context. No tree exists until the first run.
    pub fn new(config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            inner: Mutex::new(SearchInner {
                tree: None,
                objective: config.objective.unwrap_or(Objective::MinimizeActions),
                rng,
                stats: SearchStats::default(),
            }),
            config,
            iterations: AtomicU64::new(0),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Search from `state` within `budget`, replacing any previous tree.
    pub fn run(&self, state: &Sorry, budget: Budget) -> Result<()> {
        let mut condition = budget.condition();
        self.run_until(state, condition.as_mut())
    }

    /// Search from `state` until `condition` says stop, replacing any
    /// previous tree.
    ///
    /// With a single legal action the tree records it as the only root
    /// child and returns without iterating. With none (the game is over)
    /// it returns at once.
    pub fn run_until(&self, state: &Sorry, condition: &mut dyn LoopCondition) -> Result<()> {
        let start = Instant::now();
        let actions = state.get_actions()?;

        {
            let mut inner = self.lock();
            let mut tree = MCTSTree::new(state.clone());
            inner.stats.reset();
            inner.objective = self.config.objective_for(state.player_count());
            self.iterations.store(0, Ordering::Relaxed);

            if let [only] = actions.as_slice() {
                tree.add_child(tree.root(), state.clone(), *only);
                inner.stats.nodes_expanded = 1;
                inner.tree = Some(tree);
                log::debug!("single legal action {only}, skipping search");
                return Ok(());
            }
            inner.tree = Some(tree);
        }
        if actions.is_empty() {
            return Ok(());
        }

        let yield_interval = self.config.yield_interval.max(1);
        while condition.should_continue() {
            let completed = self.iterations.load(Ordering::Relaxed);
            if completed > 0 && completed % yield_interval == 0 {
                thread::yield_now();
            }
            self.lock().iterate(state, self.config.exploration_constant)?;
            self.iterations.fetch_add(1, Ordering::Relaxed);
            condition.on_iteration_complete();
        }

        let mut inner = self.lock();
        inner.stats.iterations = self.iterations.load(Ordering::Relaxed);
        inner.stats.time_us = start.elapsed().as_micros() as u64;
        let nodes = inner.tree.as_ref().map_or(0, MCTSTree::len);
        log::debug!("search finished: {}, tree holds {nodes} nodes", inner.stats);
        Ok(())
    }

    /// The best root action under the search objective, without exploration.
    ///
    /// Only expanded root actions are considered.
    ///
    /// # Errors
    ///
    /// `NoSearchTree` before any run (or after [`SorryMcts::reset`]);
    /// `NoActionsExplored` if the last run expanded nothing.
    pub fn pick_best_action(&self) -> Result<Action> {
        let inner = self.lock();
        let tree = inner.tree.as_ref().ok_or(SorryError::NoSearchTree)?;
        let root = tree.root();
        let children = &tree.root_node().children;

        policy_for(inner.objective)
            .select(tree, root, children, None)
            .and_then(|id| tree.get(id).action)
            .ok_or(SorryError::NoActionsExplored)
    }

    /// Per-action statistics for every expanded root action, in expansion
    /// order. Empty before any run.
    pub fn action_scores(&self) -> Vec<ActionScore> {
        let inner = self.lock();
        let Some(tree) = inner.tree.as_ref() else {
            return Vec::new();
        };
        let children = &tree.root_node().children;
        let mover = tree.root_node().state.player_turn();
        let scores = policy_for(inner.objective).exploitation(tree, children);

        children
            .iter()
            .zip(scores)
            .filter_map(|(&id, score)| {
                let node = tree.get(id);
                node.action.map(|action| ActionScore {
                    action,
                    score,
                    visits: node.visits,
                    average_action_count: node.average_action_count(),
                    win_rate: node.win_rate(mover),
                })
            })
            .collect()
    }

    /// Win rate of the root player for every expanded root action.
    pub fn win_rates(&self) -> Vec<(Action, f64)> {
        self.action_scores()
            .into_iter()
            .map(|s| (s.action, s.win_rate))
            .collect()
    }

    /// Iterations completed by the current (or last) run.
    #[must_use]
    pub fn iteration_count(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Statistics of the last completed run.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.lock().stats.clone()
    }

    /// Drop the tree and statistics. The RNG stream continues.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.tree = None;
        inner.stats.reset();
        self.iterations.store(0, Ordering::Relaxed);
    }

    fn lock(&self) -> MutexGuard<'_, SearchInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
