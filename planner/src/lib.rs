//! Blocks-world planner: goal formulas, heuristics and orchestration.
//!
//! Takes a [`GoalFormula`] and an initial [`WorldState`], runs A* from
//! `blocksworld_search` over the state graph, and returns a [`Plan`] of
//! primitive action tokens (`l`, `r`, `p`, `d`) or a typed [`PlanError`].
//!
//! Natural-language parsing and reference resolution happen upstream; this
//! crate only consumes resolved formulas.
//!
//! [`WorldState`]: blocksworld_kernel::world::WorldState

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod goal;
pub mod graph;
pub mod heuristic;
pub mod narration;
pub mod planner;
pub mod relations;

pub use config::{ConjunctionSemantics, PlannerConfig};
pub use error::PlanError;
pub use goal::{GoalFormula, GoalParseError, Literal, Relation, Term};
pub use planner::{plan, plan_with_timeout, Plan, PlanStep, Planner, ALREADY_SATISFIED};
