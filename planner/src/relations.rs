//! Structural satisfaction of relations in a world state.

use blocksworld_kernel::world::{Location, ObjectId, WorldState};

use crate::goal::{Literal, Relation, Term};

/// Whether `literal` holds in `state`, honoring polarity.
#[must_use]
pub fn is_satisfied(state: &WorldState, literal: &Literal) -> bool {
    relation_holds(state, literal.relation, &literal.args) == literal.polarity
}

/// Whether `relation(args)` holds in `state`, ignoring polarity.
///
/// Malformed argument lists never hold. Binary relations between two objects
/// require both to be in columns; a held object is beside nothing.
#[must_use]
pub fn relation_holds(state: &WorldState, relation: Relation, args: &[Term]) -> bool {
    match (relation, args) {
        (Relation::Holding, [Term::Object(x)]) => state.is_holding(x),
        (Relation::OnTop | Relation::Inside, [Term::Object(x), Term::Floor]) => {
            matches!(state.locate(x), Some(Location::Column { row: 0, .. }))
        }
        (Relation::Above, [Term::Object(x), Term::Floor]) => {
            matches!(state.locate(x), Some(Location::Column { .. }))
        }
        (_, [Term::Object(x), Term::Object(y)]) if x != y => {
            let (Some((cx, rx)), Some((cy, ry))) = (placed(state, x), placed(state, y)) else {
                return false;
            };
            match relation {
                Relation::OnTop | Relation::Inside => cx == cy && rx == ry + 1,
                Relation::Above => cx == cy && rx > ry,
                Relation::Under => cx == cy && rx < ry,
                Relation::Beside => cx.abs_diff(cy) == 1,
                Relation::LeftOf => cx < cy,
                Relation::RightOf => cx > cy,
                Relation::Holding => false,
            }
        }
        _ => false,
    }
}

/// `(column, row)` of an object standing in a column.
pub(crate) fn placed(state: &WorldState, id: &ObjectId) -> Option<(usize, usize)> {
    match state.locate(id)? {
        Location::Column { column, row } => Some((column, row)),
        Location::Held => None,
    }
}
