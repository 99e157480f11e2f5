//! Planner failure taxonomy.

use std::time::Duration;

use blocksworld_kernel::operators::ActionError;

/// Typed failure for a planning request. Fail-closed: a failed request never
/// yields an empty or partial plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The formula has no conjunctions, or one of them is empty.
    #[error("goal formula is empty")]
    EmptyGoalFormula,

    /// A literal names an object that is not in the world. Detected before
    /// any search.
    #[error("goal references unknown object {id}")]
    UnknownObject { id: String },

    /// A literal can never be satisfied because of its shape: wrong arity,
    /// the floor in an impossible position, or an object related to itself.
    #[error("invalid literal {literal}: {reason}")]
    InvalidLiteral {
        literal: String,
        reason: &'static str,
    },

    #[error("search timed out after {elapsed:?} ({expansions} expansions)")]
    SearchTimeout { elapsed: Duration, expansions: u64 },

    /// Every reachable state was examined without satisfying the goal.
    #[error("no plan reaches the goal ({expansions} expansions)")]
    SearchExhausted { expansions: u64 },

    /// Path translation met a transition that is not one primitive action.
    #[error(transparent)]
    IllegalAction(#[from] ActionError),

    #[error("planner config error: {detail}")]
    Config { detail: String },
}
