//! In-process determinism: repeated planning yields identical plans, stats
//! and digests, and world fingerprints are independent of fixture spelling.

use blocksworld_kernel::world::WorldState;
use blocksworld_planner::{GoalFormula, Planner};
use lock_tests::fixtures::small_world;

const GOALS: &[&str] = &[
    "holding(f)",
    "inside(f,l)",
    "leftof(f,e)",
    "beside(m,g)",
    "holding(m) | holding(f)",
];

#[test]
fn repeated_planning_is_identical() {
    let planner = Planner::default();
    for text in GOALS {
        let goal: GoalFormula = text.parse().unwrap();
        let runs: Vec<_> = (0..10)
            .map(|_| planner.plan(&goal, &small_world()).unwrap())
            .collect();
        let first = &runs[0];
        for run in &runs[1..] {
            assert_eq!(run.steps, first.steps, "{text}");
            assert_eq!(run.digest(), first.digest(), "{text}");
            assert_eq!(run.stats.expansions, first.stats.expansions, "{text}");
            assert_eq!(run.stats.generated, first.stats.generated, "{text}");
            assert_eq!(run.stats.discovered, first.stats.discovered, "{text}");
        }
    }
}

#[test]
fn fingerprint_ignores_fixture_key_order_and_whitespace() {
    let compact = WorldState::from_json_str(
        r#"{"arm":1,"objects":{"b":{"size":"large","form":"table","color":"red"},"a":{"color":"white","form":"ball","size":"small"}},"stacks":[["a"],[],["b"]]}"#,
    )
    .unwrap();
    let spread = WorldState::from_json_str(
        r#"{
            "stacks": [["a"], [], ["b"]],
            "arm": 1,
            "holding": null,
            "objects": {
                "a": {"form": "ball", "size": "small", "color": "white"},
                "b": {"form": "table", "size": "large", "color": "red"}
            }
        }"#,
    )
    .unwrap();
    assert_eq!(compact.fingerprint().unwrap(), spread.fingerprint().unwrap());
}

#[test]
fn fingerprint_distinguishes_arm_and_attributes() {
    let base = r#"{"stacks": [["a"], []], "arm": 0, "objects": {
        "a": {"form": "ball", "size": "small", "color": "white"}}}"#;
    let moved = base.replace(r#""arm": 0"#, r#""arm": 1"#);
    let recolored = base.replace("white", "black");
    let fp = |json: &str| WorldState::from_json_str(json).unwrap().fingerprint().unwrap();
    assert_ne!(fp(base), fp(&moved));
    assert_ne!(fp(base), fp(&recolored));
}
