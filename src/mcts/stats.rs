//! Counters describing the last search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What one `run` did. Reset at the start of every run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    pub iterations: u64,

    /// Iterations that expanded a node and played a random game from it.
    pub rollouts: u64,

    pub nodes_expanded: u64,

    /// Iterations whose descent ended the game inside the tree.
    pub terminal_backprops: u64,

    /// Depth of the deepest node added, root children being depth 1.
    pub max_depth: u16,

    /// Wall-clock duration of the run in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.iterations as f64 * 1e6 / self.time_us as f64
    }

    /// Share of iterations that never left the tree. Near 1 once the tree
    /// covers most of the reachable game.
    #[must_use]
    pub fn terminal_ratio(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.terminal_backprops as f64 / self.iterations as f64
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} iterations ({} rollouts, {:.0}% terminal), {} nodes, depth {}, {:.0} it/s",
            self.iterations,
            self.rollouts,
            100.0 * self.terminal_ratio(),
            self.nodes_expanded,
            self.max_depth,
            self.iterations_per_second()
        )
    }
}
