//! Brute-force reference answers: breadth-first enumeration and distances.
//!
//! Independent of the A* engine so that lock tests can check it against
//! ground truth on small worlds.

use std::collections::{HashMap, HashSet, VecDeque};

use blocksworld_kernel::operators::{Action, ActionRules};
use blocksworld_kernel::world::WorldState;

/// Every state reachable from `start`, in breadth-first discovery order.
#[must_use]
pub fn reachable(start: &WorldState, rules: &ActionRules) -> Vec<WorldState> {
    let mut seen: HashSet<String> = HashSet::from([start.key().to_owned()]);
    let mut queue = VecDeque::from([start.clone()]);
    let mut order = vec![start.clone()];
    while let Some(state) = queue.pop_front() {
        for action in rules.legal_actions(&state) {
            let Ok(next) = rules.apply(&state, action) else {
                continue;
            };
            if seen.insert(next.key().to_owned()) {
                order.push(next.clone());
                queue.push_back(next);
            }
        }
    }
    order
}

/// Exact number of actions from `start` to the nearest state accepted by
/// `is_goal`, or `None` when no reachable state qualifies.
#[must_use]
pub fn distance(
    start: &WorldState,
    rules: &ActionRules,
    is_goal: impl Fn(&WorldState) -> bool,
) -> Option<u64> {
    let mut depth: HashMap<String, u64> = HashMap::from([(start.key().to_owned(), 0)]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(state) = queue.pop_front() {
        let d = depth[state.key()];
        if is_goal(&state) {
            return Some(d);
        }
        for action in rules.legal_actions(&state) {
            let Ok(next) = rules.apply(&state, action) else {
                continue;
            };
            if !depth.contains_key(next.key()) {
                depth.insert(next.key().to_owned(), d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Apply `actions` in order from `start`.
///
/// # Panics
///
/// Panics if any action is illegal where it is applied.
#[must_use]
pub fn replay(
    start: &WorldState,
    rules: &ActionRules,
    actions: impl IntoIterator<Item = Action>,
) -> WorldState {
    actions.into_iter().fold(start.clone(), |state, action| {
        rules
            .apply(&state, action)
            .unwrap_or_else(|e| panic!("replay failed at {}: {e}", state.key()))
    })
}
