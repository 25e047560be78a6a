//! Child scoring and selection.
//!
//! A `SelectionPolicy` supplies the exploitation half of the score for a
//! group of sibling candidates; selection adds the UCB exploration bonus
//! `c * sqrt(ln(N) / n)` on top when asked to.
//!
//! - `MoveCount`: lower average final action count is better, rescaled to
//!   `[0, 1]` across the candidates
//! - `WinRate`: share of rollouts won by the player who chose the action

use super::config::Objective;
use super::node::NodeId;
use super::tree::MCTSTree;

/// Policy for scoring sibling nodes.
pub trait SelectionPolicy: Send + Sync {
    /// Exploitation score of each candidate, in the same order.
    fn exploitation(&self, tree: &MCTSTree, candidates: &[NodeId]) -> Vec<f64>;

    /// Pick the best of `candidates`, children of `parent`.
    ///
    /// With `exploration = Some(c)` the UCB bonus is added. Ties go to the
    /// earliest candidate. Returns `None` only for an empty candidate list.
    fn select(
        &self,
        tree: &MCTSTree,
        parent: NodeId,
        candidates: &[NodeId],
        exploration: Option<f64>,
    ) -> Option<NodeId> {
        if candidates.len() <= 1 {
            return candidates.first().copied();
        }

        let ln_parent = f64::from(tree.get(parent).visits.max(1)).ln();
        let scores = self.exploitation(tree, candidates);

        let mut best: Option<(NodeId, f64)> = None;
        for (&id, exploitation) in candidates.iter().zip(scores) {
            let score = match exploration {
                None => exploitation,
                Some(c) => {
                    let visits = tree.get(id).visits;
                    if visits == 0 {
                        f64::INFINITY
                    } else {
                        exploitation + c * (ln_parent / f64::from(visits)).sqrt()
                    }
                }
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Prefer actions that finish the game in fewer total actions.
#[derive(Clone, Debug, Default)]
pub struct MoveCount;

impl SelectionPolicy for MoveCount {
    fn exploitation(&self, tree: &MCTSTree, candidates: &[NodeId]) -> Vec<f64> {
        let visited = candidates
            .iter()
            .map(|&id| tree.get(id))
            .filter(|node| node.visits > 0)
            .map(|node| node.average_action_count());
        let (min, max) = visited.fold((f64::MAX, 0.0_f64), |(lo, hi), avg| {
            (lo.min(avg), hi.max(avg))
        });
        let range = max - min;

        candidates
            .iter()
            .map(|&id| {
                let node = tree.get(id);
                if node.visits == 0 {
                    0.0
                } else if range <= 0.0 {
                    1.0
                } else {
                    1.0 - (node.average_action_count() - min) / range
                }
            })
            .collect()
    }
}

/// Prefer actions that win most often for the player taking them.
#[derive(Clone, Debug, Default)]
pub struct WinRate;

impl SelectionPolicy for WinRate {
    fn exploitation(&self, tree: &MCTSTree, candidates: &[NodeId]) -> Vec<f64> {
        candidates
            .iter()
            .map(|&id| {
                let node = tree.get(id);
                node.win_rate(node.chooser())
            })
            .collect()
    }
}

/// The scoring policy for an objective.
#[must_use]
pub fn policy_for(objective: Objective) -> &'static dyn SelectionPolicy {
    match objective {
        Objective::MinimizeActions => &MoveCount,
        Objective::MaximizeWins => &WinRate,
    }
}
