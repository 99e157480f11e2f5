//! The blocks world as a search graph.

use blocksworld_kernel::operators::ActionRules;
use blocksworld_kernel::world::WorldState;
use blocksworld_search::{Edge, SearchGraph};

/// Every primitive action costs the same.
pub const ACTION_COST: u64 = 1;

/// Successors are the legal actions under `rules`, in their fixed order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateGraph {
    rules: ActionRules,
}

impl StateGraph {
    #[must_use]
    pub const fn new(rules: ActionRules) -> Self {
        Self { rules }
    }
}

impl SearchGraph for StateGraph {
    type Node = WorldState;
    type Key = String;

    fn edges(&self, node: &WorldState) -> Vec<Edge<WorldState>> {
        self.rules
            .legal_actions(node)
            .into_iter()
            .filter_map(|action| self.rules.apply(node, action).ok())
            .map(|next| Edge::new(next, ACTION_COST))
            .collect()
    }

    fn key(&self, node: &WorldState) -> String {
        node.key().to_string()
    }
}
