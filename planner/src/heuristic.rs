//! Per-relation remaining-cost estimates.
//!
//! Every estimate is a lower bound on the number of primitive actions needed
//! to make the literal true. Building blocks, for an object `o`:
//!
//! - `mv(o)`: columns between the arm and `o`; 0 when `o` is held.
//! - `pickup(o)`: 0 when held, else 4 per object stacked above `o`, plus 2
//!   when the gripper holds something else (drop it, then pick `o`).
//! - `drop(o)`: 1 when held, else 4 per object above `o` plus the drop.
//!
//! Clearing one blocker costs at least a pick, a move away, a drop and a move
//! back, hence 4.

use blocksworld_kernel::world::{ObjectId, WorldState};
use blocksworld_search::Heuristic;

use crate::config::ConjunctionSemantics;
use crate::goal::{GoalFormula, Literal, Relation, Term};
use crate::relations::{is_satisfied, placed};

const CLEAR_COST: u64 = 4;

/// Estimated actions to satisfy `literal` from `state`.
///
/// A satisfied literal costs 0. An unsatisfied negative literal costs 1.
#[must_use]
pub fn literal_estimate(state: &WorldState, literal: &Literal) -> u64 {
    if is_satisfied(state, literal) {
        return 0;
    }
    if !literal.polarity {
        return 1;
    }
    Estimator { state }
        .positive(literal.relation, &literal.args)
        .unwrap_or(1)
}

/// Goal-level heuristic: the cheapest conjunction.
///
/// Under [`ConjunctionSemantics::FirstLiteral`] a conjunction is estimated by
/// its first literal; under [`ConjunctionSemantics::AllLiterals`] by its most
/// expensive literal.
#[derive(Debug, Clone, Copy)]
pub struct GoalHeuristic<'g> {
    goal: &'g GoalFormula,
    semantics: ConjunctionSemantics,
}

impl<'g> GoalHeuristic<'g> {
    #[must_use]
    pub const fn new(goal: &'g GoalFormula, semantics: ConjunctionSemantics) -> Self {
        Self { goal, semantics }
    }

    fn conjunction(&self, state: &WorldState, conjunction: &[Literal]) -> u64 {
        match self.semantics {
            ConjunctionSemantics::FirstLiteral => conjunction
                .first()
                .map_or(0, |literal| literal_estimate(state, literal)),
            ConjunctionSemantics::AllLiterals => conjunction
                .iter()
                .map(|literal| literal_estimate(state, literal))
                .max()
                .unwrap_or(0),
        }
    }
}

impl Heuristic<WorldState> for GoalHeuristic<'_> {
    fn estimate(&self, state: &WorldState) -> u64 {
        self.goal
            .disjuncts()
            .iter()
            .map(|conjunction| self.conjunction(state, conjunction))
            .min()
            .unwrap_or(0)
    }
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

struct Estimator<'s> {
    state: &'s WorldState,
}

impl Estimator<'_> {
    /// Column of `o`; the arm's column when held. `None` if absent.
    fn column(&self, o: &ObjectId) -> Option<usize> {
        if self.state.is_holding(o) {
            Some(self.state.arm())
        } else {
            placed(self.state, o).map(|(column, _)| column)
        }
    }

    fn mv(&self, o: &ObjectId) -> Option<u64> {
        self.column(o)
            .map(|column| count(self.state.arm().abs_diff(column)))
    }

    fn pickup(&self, o: &ObjectId) -> u64 {
        if self.state.is_holding(o) {
            return 0;
        }
        let swap = if self.state.held().is_some() { 2 } else { 0 };
        CLEAR_COST * count(self.state.items_above(o)) + swap
    }

    fn drop_onto(&self, o: &ObjectId) -> u64 {
        if self.state.is_holding(o) {
            return 1;
        }
        CLEAR_COST * count(self.state.items_above(o)) + 1
    }

    /// Estimate for an unsatisfied positive literal. `None` on malformed
    /// arguments or absent objects.
    fn positive(&self, relation: Relation, args: &[Term]) -> Option<u64> {
        match (relation, args) {
            (Relation::Holding, [Term::Object(x)]) => Some(self.mv(x)? + self.pickup(x)),
            (Relation::OnTop | Relation::Inside, [Term::Object(x), Term::Floor]) => {
                self.column(x)?;
                let arm = self.state.arm();
                let clear = self
                    .state
                    .columns()
                    .enumerate()
                    .map(|(i, column)| CLEAR_COST * count(column.len()) + count(arm.abs_diff(i)))
                    .min()?;
                Some(self.pickup(x) + clear + 1)
            }
            (Relation::OnTop | Relation::Inside, [Term::Object(x), Term::Object(y)]) => {
                self.on_top(x, y)
            }
            (Relation::Above, [Term::Object(x), Term::Floor]) => {
                self.column(x)?;
                Some(self.pickup(x) + 1)
            }
            (Relation::Above, [Term::Object(x), Term::Object(y)]) => self.above(x, y),
            (Relation::Under, [Term::Object(x), Term::Object(y)]) => self.above(y, x),
            (Relation::Beside, [Term::Object(x), Term::Object(y)]) => {
                let d = self.column(x)?.abs_diff(self.column(y)?);
                let gap = if d == 0 { 1 } else { d - 1 };
                self.horizontal(x, y, gap)
            }
            (Relation::LeftOf, [Term::Object(x), Term::Object(y)]) => self.left_of(x, y),
            (Relation::RightOf, [Term::Object(x), Term::Object(y)]) => self.left_of(y, x),
            _ => None,
        }
    }

    fn on_top(&self, x: &ObjectId, y: &ObjectId) -> Option<u64> {
        let mv_x = self.mv(x)?;
        let mv_y = self.mv(y)?;
        if let (Some((cx, rx)), Some((cy, ry))) = (placed(self.state, x), placed(self.state, y)) {
            if cx == cy {
                // Blockers above the lower of the two are cleared once.
                let lower = if rx < ry { x } else { y };
                let swap = if self.state.held().is_some() { 2 } else { 0 };
                return Some(CLEAR_COST * count(self.state.items_above(lower)) + swap + 1 + mv_x);
            }
        }
        Some(self.pickup(x) + self.drop_onto(y) + mv_x.max(mv_y))
    }

    fn above(&self, x: &ObjectId, y: &ObjectId) -> Option<u64> {
        Some(self.mv(x)?.max(self.mv(y)?) + self.pickup(x) + 1)
    }

    fn left_of(&self, x: &ObjectId, y: &ObjectId) -> Option<u64> {
        let cx = self.column(x)?;
        let cy = self.column(y)?;
        let gap = if cx < cy { 0 } else { cx - cy + 1 };
        self.horizontal(x, y, gap)
    }

    /// Move whichever object is cheaper to lift `gap` columns, then drop it.
    fn horizontal(&self, x: &ObjectId, y: &ObjectId, gap: usize) -> Option<u64> {
        let lift_x = self.pickup(x) + self.mv(x)?;
        let lift_y = self.pickup(y) + self.mv(y)?;
        Some(lift_x.min(lift_y) + count(gap) + 1)
    }
}
