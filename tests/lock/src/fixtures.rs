//! Fixture worlds used across lock tests.
//!
//! File fixtures live in `tests/lock/fixtures/`. Small inline worlds cover
//! each stacking rule with two objects so that their state spaces can be
//! enumerated exhaustively.

use std::path::PathBuf;

use blocksworld_kernel::world::WorldState;

/// Absolute path of a file fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Load and validate a file fixture.
///
/// # Panics
///
/// Panics if the fixture is missing or invalid. Fixtures are checked in.
#[must_use]
pub fn load(name: &str) -> WorldState {
    let path = fixture_path(name);
    WorldState::from_json_file(&path)
        .unwrap_or_else(|e| panic!("fixture {} failed to load: {e}", path.display()))
}

/// Five columns, seven objects, arm at 0 holding a large brick.
#[must_use]
pub fn small_world() -> WorldState {
    load("small_world.json")
}

/// `[[b,a],[],[]]`, two small bricks, arm at 0.
#[must_use]
pub fn two_bricks() -> WorldState {
    load("two_bricks.json")
}

/// `[[a],[],[b]]`, a small ball and a large table, arm at 0.
#[must_use]
pub fn ball_and_table() -> WorldState {
    inline(
        r#"{"stacks": [["a"], [], ["b"]], "arm": 0, "objects": {
            "a": {"form": "ball", "size": "small", "color": "white"},
            "b": {"form": "table", "size": "large", "color": "red"}}}"#,
    )
}

/// `[[a],[b],[]]`, a small box and a large box, arm at 1.
#[must_use]
pub fn two_boxes() -> WorldState {
    inline(
        r#"{"stacks": [["a"], ["b"], []], "arm": 1, "objects": {
            "a": {"form": "box", "size": "small", "color": "blue"},
            "b": {"form": "box", "size": "large", "color": "yellow"}}}"#,
    )
}

/// `[[],[b,a],[]]`, a large pyramid resting on a small plank, arm at 2.
#[must_use]
pub fn pyramid_on_plank() -> WorldState {
    inline(
        r#"{"stacks": [[], ["b", "a"], []], "arm": 2, "objects": {
            "a": {"form": "pyramid", "size": "large", "color": "green"},
            "b": {"form": "plank", "size": "small", "color": "black"}}}"#,
    )
}

/// Every two-object world above, with a label for assertion messages.
#[must_use]
pub fn two_object_worlds() -> Vec<(&'static str, WorldState)> {
    vec![
        ("two_bricks", two_bricks()),
        ("ball_and_table", ball_and_table()),
        ("two_boxes", two_boxes()),
        ("pyramid_on_plank", pyramid_on_plank()),
    ]
}

fn inline(json: &str) -> WorldState {
    WorldState::from_json_str(json).unwrap_or_else(|e| panic!("inline world invalid: {e}"))
}
