//! Tree nodes and the handles that link them.

use smallvec::SmallVec;

use crate::core::{Action, PlayerColor, MAX_PLAYERS};
use crate::game::Sorry;

/// Position of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Parent of the root.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

/// One (state, action) pair reached during search, with the outcomes of
/// every iteration that passed through it.
///
/// A non-root node stands for "`action` taken from `state`". The same
/// action can appear under one parent several times when different random
/// draws led to different states, so children are told apart by the pair.
#[derive(Clone, Debug)]
pub struct MCTSNode {
    /// `NodeId::NONE` on the root.
    pub parent: NodeId,

    /// State before `action` was applied. For the root, the search's
    /// starting state.
    pub state: Sorry,

    /// `None` only on the root.
    pub action: Option<Action>,

    pub depth: u16,

    /// Children in expansion order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Rollouts and terminal visits counted through this node.
    pub visits: u32,

    /// Sum of final action counts over those visits.
    pub total_action_count: u64,

    /// Wins per color, indexed by `PlayerColor::index`.
    pub wins: [u32; MAX_PLAYERS],
}

impl MCTSNode {
    pub fn new(parent: NodeId, state: Sorry, action: Action, depth: u16) -> Self {
        Self {
            action: Some(action),
            ..Self::unvisited(parent, state, depth)
        }
    }

    pub fn root(state: Sorry) -> Self {
        Self::unvisited(NodeId::NONE, state, 0)
    }

    fn unvisited(parent: NodeId, state: Sorry, depth: u16) -> Self {
        Self {
            parent,
            state,
            action: None,
            depth,
            children: SmallVec::new(),
            visits: 0,
            total_action_count: 0,
            wins: [0; MAX_PLAYERS],
        }
    }

    /// Mean final action count, or infinity before any visit.
    #[must_use]
    pub fn average_action_count(&self) -> f64 {
        if self.visits == 0 {
            f64::INFINITY
        } else {
            self.total_action_count as f64 / self.visits as f64
        }
    }

    /// Fraction of visits won by `color`.
    #[must_use]
    pub fn win_rate(&self, color: PlayerColor) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            f64::from(self.wins[color.index()]) / f64::from(self.visits)
        }
    }

    /// The player who chose this node's action.
    #[inline]
    #[must_use]
    pub fn chooser(&self) -> PlayerColor {
        self.state.player_turn()
    }

    /// True if this node is `action` played from exactly `state`.
    #[inline]
    #[must_use]
    pub fn represents(&self, state: &Sorry, action: &Action) -> bool {
        self.action.as_ref() == Some(action) && self.state == *state
    }
}
