//! Search graph contract traits.

use std::hash::Hash;

/// A weighted edge to a successor node. The source is the node being expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub to: N,
    pub cost: u64,
}

impl<N> Edge<N> {
    #[must_use]
    pub const fn new(to: N, cost: u64) -> Self {
        Self { to, cost }
    }
}

/// Trait for graphs that support search.
///
/// # Contract
///
/// - `edges` must be finite and deterministic: same node, same edges in the
///   same order.
/// - `key` must be canonical: two nodes denote the same search state iff their
///   keys are equal.
pub trait SearchGraph {
    type Node: Clone;
    type Key: Eq + Hash + Clone;

    /// Successors of `node`, in a fixed order.
    fn edges(&self, node: &Self::Node) -> Vec<Edge<Self::Node>>;

    /// Canonical identity of `node` for deduplication.
    fn key(&self, node: &Self::Node) -> Self::Key;
}

/// Estimate of the remaining cost from a node to the nearest goal.
///
/// Optimality of the returned path requires the estimate never to exceed the
/// true remaining cost.
pub trait Heuristic<N: ?Sized> {
    fn estimate(&self, node: &N) -> u64;
}

impl<N: ?Sized, F> Heuristic<N> for F
where
    F: Fn(&N) -> u64,
{
    fn estimate(&self, node: &N) -> u64 {
        self(node)
    }
}

/// The zero estimate. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N: ?Sized> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N) -> u64 {
        0
    }
}
