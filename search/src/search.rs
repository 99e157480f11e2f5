//! A* entry point and expansion loop.
//!
//! Closed nodes are never reopened and edges into them are not relaxed. With
//! a consistent heuristic the first goal popped is optimal.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::contract::{Edge, Heuristic, SearchGraph};
use crate::frontier::BestFirstFrontier;
use crate::node::NodeRecord;

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal pop excluded).
    pub expansions: u64,
    /// Edges produced by the graph across all expansions.
    pub generated: u64,
    /// Stale frontier entries skipped because their node was already closed.
    pub duplicates_skipped: u64,
    /// Distinct nodes discovered, start included.
    pub discovered: u64,
    pub frontier_high_water: u64,
    pub elapsed: Duration,
}

/// A path from the start to a goal.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    /// Start first, goal last. A start that is already a goal yields a
    /// single-node path.
    pub path: Vec<N>,
    /// Sum of edge costs along `path`.
    pub cost: u64,
    pub stats: SearchStats,
}

/// How a search ended.
#[derive(Debug, Clone)]
pub enum SearchOutcome<N> {
    Found(SearchResult<N>),
    /// The frontier emptied without reaching a goal.
    Exhausted(SearchStats),
    /// The deadline passed before a goal was reached.
    TimedOut(SearchStats),
}

impl<N> SearchOutcome<N> {
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Found(result) => &result.stats,
            Self::Exhausted(stats) | Self::TimedOut(stats) => stats,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The result, if a goal was reached.
    #[must_use]
    pub fn found(self) -> Option<SearchResult<N>> {
        match self {
            Self::Found(result) => Some(result),
            Self::Exhausted(_) | Self::TimedOut(_) => None,
        }
    }
}

/// Run A* from `start` until `is_goal` accepts a popped node, the frontier
/// empties, or `deadline` elapses.
///
/// The deadline is checked at the top of every iteration, so a zero deadline
/// times out before the start node is examined. Ties on `f = g + h` are
/// broken in insertion order.
pub fn search<G, P, H>(
    graph: &G,
    start: G::Node,
    is_goal: P,
    heuristic: &H,
    deadline: Duration,
) -> SearchOutcome<G::Node>
where
    G: SearchGraph,
    P: Fn(&G::Node) -> bool,
    H: Heuristic<G::Node> + ?Sized,
{
    let started = Instant::now();
    let mut stats = SearchStats::default();
    let mut frontier = BestFirstFrontier::new();
    let mut arena: Vec<NodeRecord<G::Node>> = Vec::new();
    let mut index: HashMap<G::Key, usize> = HashMap::new();

    let start_key = graph.key(&start);
    let start_h = heuristic.estimate(&start);
    index.insert(start_key, 0);
    arena.push(NodeRecord {
        node: start,
        g_cost: 0,
        h_cost: start_h,
        parent: None,
        closed: false,
    });
    frontier.push(0, start_h);
    stats.discovered = 1;

    loop {
        if started.elapsed() >= deadline {
            stats.elapsed = started.elapsed();
            stats.frontier_high_water = frontier.high_water();
            debug!(
                expansions = stats.expansions,
                discovered = stats.discovered,
                "search timed out"
            );
            return SearchOutcome::TimedOut(stats);
        }

        let Some((_, slot)) = frontier.pop() else {
            stats.elapsed = started.elapsed();
            stats.frontier_high_water = frontier.high_water();
            debug!(
                expansions = stats.expansions,
                discovered = stats.discovered,
                "search exhausted"
            );
            return SearchOutcome::Exhausted(stats);
        };

        if arena[slot].closed {
            stats.duplicates_skipped += 1;
            continue;
        }

        if is_goal(&arena[slot].node) {
            stats.elapsed = started.elapsed();
            stats.frontier_high_water = frontier.high_water();
            let cost = arena[slot].g_cost;
            let path = reconstruct(&arena, slot);
            debug!(
                cost,
                path_len = path.len(),
                expansions = stats.expansions,
                discovered = stats.discovered,
                "search reached goal"
            );
            return SearchOutcome::Found(SearchResult { path, cost, stats });
        }

        arena[slot].closed = true;
        stats.expansions += 1;
        let g = arena[slot].g_cost;

        for Edge { to, cost } in graph.edges(&arena[slot].node) {
            stats.generated += 1;
            let tentative = g.saturating_add(cost);
            let key = graph.key(&to);
            if let Some(&existing) = index.get(&key) {
                let record = &mut arena[existing];
                if record.closed || tentative >= record.g_cost {
                    continue;
                }
                record.g_cost = tentative;
                record.parent = Some(slot);
                let f = record.f_cost();
                frontier.push(existing, f);
            } else {
                let h = heuristic.estimate(&to);
                let new_slot = arena.len();
                index.insert(key, new_slot);
                arena.push(NodeRecord {
                    node: to,
                    g_cost: tentative,
                    h_cost: h,
                    parent: Some(slot),
                    closed: false,
                });
                stats.discovered += 1;
                frontier.push(new_slot, tentative.saturating_add(h));
            }
        }
    }
}

fn reconstruct<N: Clone>(arena: &[NodeRecord<N>], goal: usize) -> Vec<N> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(slot) = cursor {
        path.push(arena[slot].node.clone());
        cursor = arena[slot].parent;
    }
    path.reverse();
    path
}
