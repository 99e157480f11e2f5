//! Placement legality: which object may rest on which support.

use crate::world::object::{ObjectAttributes, Shape, Size, Support};

/// Whether `upper` may be put down on `lower`.
///
/// Rules, first match wins:
///
/// 1. Anything may rest on the floor.
/// 2. Nothing may rest on a ball.
/// 3. A box cannot hold a pyramid, brick or box of the same size or larger.
/// 4. A small box cannot rest on a small brick or a small pyramid.
/// 5. A large object cannot rest on a small one.
///
/// Everything else is legal. As an upper object a ball is unrestricted: it
/// may sit on a table, a plank, a brick or inside a box.
#[must_use]
pub fn can_stack(upper: &ObjectAttributes, lower: Support<'_>) -> bool {
    let lower = match lower {
        Support::Floor => return true,
        Support::Object(attrs) => attrs,
    };

    if lower.shape == Shape::Ball {
        return false;
    }

    if lower.shape == Shape::Box
        && matches!(upper.shape, Shape::Pyramid | Shape::Brick | Shape::Box)
        && upper.size >= lower.size
    {
        return false;
    }

    if upper.shape == Shape::Box
        && upper.size == Size::Small
        && lower.size == Size::Small
        && matches!(lower.shape, Shape::Brick | Shape::Pyramid)
    {
        return false;
    }

    !(upper.size == Size::Large && lower.size == Size::Small)
}
