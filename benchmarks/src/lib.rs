//! Shared worlds and goals for the benchmark suites.

use blocksworld_kernel::world::WorldState;
use blocksworld_planner::GoalFormula;

/// One planning workload: a world and a goal over it.
pub struct Regime {
    pub name: &'static str,
    pub world: WorldState,
    pub goal: GoalFormula,
}

const SMALL_WORLD: &str = r#"{
    "stacks": [["e"], ["g", "l"], [], ["k", "m", "f"], []],
    "holding": "a",
    "arm": 0,
    "objects": {
        "a": {"form": "brick", "size": "large", "color": "green"},
        "e": {"form": "ball", "size": "large", "color": "white"},
        "f": {"form": "ball", "size": "small", "color": "black"},
        "g": {"form": "table", "size": "large", "color": "blue"},
        "k": {"form": "box", "size": "large", "color": "yellow"},
        "l": {"form": "box", "size": "large", "color": "red"},
        "m": {"form": "box", "size": "small", "color": "blue"}
    }
}"#;

/// Seven objects in five columns, arm at 0 holding a large brick.
///
/// # Panics
///
/// Panics if the embedded world is invalid.
#[must_use]
pub fn small_world() -> WorldState {
    WorldState::from_json_str(SMALL_WORLD).expect("embedded world is valid")
}

/// Planning workloads from shallow to deep.
///
/// # Panics
///
/// Panics if an embedded goal fails to parse.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    [
        ("shallow_drop", "ontop(a,floor)"),
        ("dig_out", "holding(f)"),
        ("relocate", "inside(f,l)"),
        ("horizontal", "leftof(f,e)"),
        ("restack", "ontop(a,g)"),
        ("deep_rearrange", "inside(e,k)"),
    ]
    .into_iter()
    .map(|(name, goal)| Regime {
        name,
        world: small_world(),
        goal: goal.parse().expect("embedded goal parses"),
    })
    .collect()
}
