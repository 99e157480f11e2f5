//! Human-readable descriptions of plan steps.

use blocksworld_kernel::operators::Action;
use blocksworld_kernel::world::{ObjectAttributes, ObjectId, Shape, Support, WorldState};

/// Describe `action` as performed from `state`.
///
/// ```text
/// Moving left
/// Picking up the small white ball
/// Dropping the small white ball on the large red table
/// ```
#[must_use]
pub fn narrate(state: &WorldState, action: Action) -> String {
    match action {
        Action::Left => "Moving left".to_string(),
        Action::Right => "Moving right".to_string(),
        Action::PickUp => match state.top_of(state.arm()) {
            Some(top) => format!("Picking up the {}", describe(state, top)),
            None => "Picking up nothing".to_string(),
        },
        Action::PutDown => {
            let Some(held) = state.held() else {
                return "Dropping nothing".to_string();
            };
            let what = describe(state, held);
            match state.support_at(state.arm()) {
                Support::Floor => format!("Dropping the {what} on the floor"),
                Support::Object(attrs) if attrs.shape == Shape::Box => {
                    format!("Dropping the {what} into the {}", attrs.describe())
                }
                Support::Object(attrs) => {
                    format!("Dropping the {what} on the {}", attrs.describe())
                }
            }
        }
    }
}

fn describe(state: &WorldState, id: &ObjectId) -> String {
    state
        .attributes(id)
        .map_or_else(|| id.to_string(), ObjectAttributes::describe)
}
