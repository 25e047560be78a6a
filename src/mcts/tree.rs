//! The search tree: a flat node arena addressed by [`NodeId`].
//!
//! A tree lives for exactly one run. `SorryMcts` builds a fresh one for
//! every search and drops it on reset, so nodes are never removed.

use super::node::{MCTSNode, NodeId};
use crate::core::Action;
use crate::game::Sorry;

#[derive(Clone, Debug)]
pub struct MCTSTree {
    nodes: Vec<MCTSNode>,
    root: NodeId,
}

impl MCTSTree {
    /// A tree holding only a root for `state`.
    pub fn new(state: Sorry) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Panics if `id` did not come from this tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Record `action` played from `state` as a new child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, state: Sorry, action: Action) -> NodeId {
        let depth = self.get(parent).depth.saturating_add(1);
        let child = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(MCTSNode::new(parent, state, action, depth));
        self.get_mut(parent).children.push(child);
        child
    }

    /// The child of `parent` for `action` played from exactly `state`.
    ///
    /// Different card draws can reach the same action from different
    /// states, so matching on the action alone would merge them.
    #[must_use]
    pub fn find_child(&self, parent: NodeId, state: &Sorry, action: &Action) -> Option<NodeId> {
        self.get(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.get(child).represents(state, action))
    }

    /// Node count, root included.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, GameRng};

    fn discard(card: Card) -> Action {
        Action::Discard { card }
    }

    #[test]
    fn test_fresh_tree_is_just_a_root() {
        let tree = MCTSTree::new(Sorry::default());
        assert_eq!(tree.len(), 1);
        assert!(tree.root_node().parent.is_none());
        assert!(tree.root_node().action.is_none());
    }

    #[test]
    fn test_children_are_matched_on_state_and_action() {
        let mut tree = MCTSTree::new(Sorry::default());
        let root = tree.root();
        let undealt = Sorry::default();
        let mut dealt = Sorry::default();
        dealt.draw_random_starting_cards(&mut GameRng::new(1)).unwrap();

        let first = tree.add_child(root, undealt.clone(), discard(Card::One));
        let second = tree.add_child(root, dealt.clone(), discard(Card::One));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root_node().children.as_slice(), &[first, second]);
        assert_eq!(tree.find_child(root, &undealt, &discard(Card::One)), Some(first));
        assert_eq!(tree.find_child(root, &dealt, &discard(Card::One)), Some(second));
        assert_eq!(tree.find_child(root, &dealt, &discard(Card::Two)), None);
    }

    #[test]
    fn test_depth_follows_parent() {
        let mut tree = MCTSTree::new(Sorry::default());
        let state = Sorry::default();
        let child = tree.add_child(tree.root(), state.clone(), discard(Card::Four));
        let grandchild = tree.add_child(child, state, discard(Card::Five));

        assert_eq!(tree.get(grandchild).depth, 2);
        assert_eq!(tree.get(grandchild).parent, child);

        tree.get_mut(grandchild).visits = 7;
        assert_eq!(tree.get(grandchild).visits, 7);
    }

    #[test]
    fn test_depth_saturates() {
        let mut tree = MCTSTree::new(Sorry::default());
        let root = tree.root();
        tree.get_mut(root).depth = u16::MAX;

        let child = tree.add_child(root, Sorry::default(), discard(Card::Four));
        assert_eq!(tree.get(child).depth, u16::MAX);
    }
}
