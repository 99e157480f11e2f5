//! Planner: goal formula plus world in, action sequence out.
//!
//! # Pipeline
//!
//! ```text
//! validate_goal() → StateGraph + GoalHeuristic → search()
//!   → infer_action() per path step → Plan
//! ```

use std::time::Duration;

use blocksworld_kernel::operators::{infer_action, Action};
use blocksworld_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use blocksworld_kernel::world::WorldState;
use blocksworld_search::{search, SearchOutcome, SearchResult, SearchStats};
use tracing::{debug, info, warn};

use crate::config::{ConjunctionSemantics, PlannerConfig};
use crate::error::PlanError;
use crate::goal::{GoalFormula, Literal, Relation, Term};
use crate::graph::StateGraph;
use crate::heuristic::GoalHeuristic;
use crate::narration::narrate;
use crate::relations::is_satisfied;

/// Marker emitted in place of an empty plan.
pub const ALREADY_SATISFIED: &str = "That is already true!";

/// One entry of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Action(Action),
    /// Advisory description of the next action.
    Narration(String),
    /// The goal held in the initial state; no action is needed.
    AlreadySatisfied,
}

impl PlanStep {
    /// Plan token: the action letter, or the marker. `None` for narration.
    #[must_use]
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Self::Action(action) => Some(action.token()),
            Self::AlreadySatisfied => Some(ALREADY_SATISFIED),
            Self::Narration(_) => None,
        }
    }
}

/// A successful plan.
#[derive(Debug, Clone)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
    /// Number of primitive actions.
    pub cost: u64,
    pub stats: SearchStats,
}

impl Plan {
    /// Action tokens in order, or the single marker. Narration is skipped.
    #[must_use]
    pub fn tokens(&self) -> Vec<&'static str> {
        self.steps.iter().filter_map(PlanStep::token).collect()
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Action(action) => Some(*action),
            PlanStep::Narration(_) | PlanStep::AlreadySatisfied => None,
        })
    }

    #[must_use]
    pub fn is_already_satisfied(&self) -> bool {
        self.steps == [PlanStep::AlreadySatisfied]
    }

    /// Content hash of the token sequence.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::Plan, self.tokens().join(" ").as_bytes())
    }
}

/// Whether `state` satisfies `goal` under `semantics`.
#[must_use]
pub fn goal_satisfied(
    state: &WorldState,
    goal: &GoalFormula,
    semantics: ConjunctionSemantics,
) -> bool {
    goal.disjuncts().iter().any(|conjunction| match semantics {
        ConjunctionSemantics::FirstLiteral => conjunction
            .first()
            .is_some_and(|literal| is_satisfied(state, literal)),
        ConjunctionSemantics::AllLiterals => {
            !conjunction.is_empty() && conjunction.iter().all(|literal| is_satisfied(state, literal))
        }
    })
}

/// Structural checks run before any search.
///
/// # Errors
///
/// - [`PlanError::EmptyGoalFormula`] for no conjunctions or an empty one.
/// - [`PlanError::InvalidLiteral`] for wrong arity, misplaced floor, or an
///   object related to itself.
/// - [`PlanError::UnknownObject`] for an object absent from `state`.
pub fn validate_goal(goal: &GoalFormula, state: &WorldState) -> Result<(), PlanError> {
    if goal.disjuncts().is_empty() || goal.disjuncts().iter().any(Vec::is_empty) {
        return Err(PlanError::EmptyGoalFormula);
    }
    goal.literals()
        .try_for_each(|literal| validate_literal(literal, state))
}

fn validate_literal(literal: &Literal, state: &WorldState) -> Result<(), PlanError> {
    let invalid = |reason| PlanError::InvalidLiteral {
        literal: literal.to_string(),
        reason,
    };
    if literal.args.len() != literal.relation.arity() {
        return Err(invalid("wrong number of arguments"));
    }
    for id in literal.args.iter().filter_map(Term::as_object) {
        if state.locate(id).is_none() {
            return Err(PlanError::UnknownObject { id: id.to_string() });
        }
    }
    match (literal.relation, literal.args.as_slice()) {
        (_, [Term::Floor, ..]) => Err(invalid("the floor cannot be moved")),
        (Relation::OnTop | Relation::Inside | Relation::Above, [_, Term::Floor]) => Ok(()),
        (_, [_, Term::Floor]) => Err(invalid("relation cannot take the floor")),
        (_, [x, y]) if x == y => Err(invalid("an object cannot relate to itself")),
        _ => Ok(()),
    }
}

/// Plans goals against worlds under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    #[must_use]
    pub const fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a sequence of actions that makes `goal` true from `state`.
    ///
    /// # Errors
    ///
    /// Validation errors (see [`validate_goal`]) before searching;
    /// [`PlanError::SearchTimeout`] or [`PlanError::SearchExhausted`] when the
    /// search fails.
    pub fn plan(&self, goal: &GoalFormula, state: &WorldState) -> Result<Plan, PlanError> {
        validate_goal(goal, state)?;

        let world = state
            .fingerprint()
            .map_or_else(|e| e.to_string(), |hash| hash.to_string());
        info!(goal = %goal, goal_digest = %goal.digest(), world = %world, "planning");

        let semantics = self.config.conjunction;
        let graph = StateGraph::new(self.config.rules());
        let heuristic = GoalHeuristic::new(goal, semantics);
        let outcome = search(
            &graph,
            state.clone(),
            |node| goal_satisfied(node, goal, semantics),
            &heuristic,
            self.config.timeout,
        );

        match outcome {
            SearchOutcome::Found(result) => {
                let plan = self.translate(result)?;
                info!(
                    goal = %goal,
                    cost = plan.cost,
                    expansions = plan.stats.expansions,
                    digest = %plan.digest(),
                    "plan found"
                );
                Ok(plan)
            }
            SearchOutcome::TimedOut(stats) => {
                warn!(goal = %goal, expansions = stats.expansions, "planning timed out");
                Err(PlanError::SearchTimeout {
                    elapsed: stats.elapsed,
                    expansions: stats.expansions,
                })
            }
            SearchOutcome::Exhausted(stats) => {
                warn!(goal = %goal, expansions = stats.expansions, "goal unreachable");
                Err(PlanError::SearchExhausted {
                    expansions: stats.expansions,
                })
            }
        }
    }

    /// Plan every candidate interpretation independently.
    ///
    /// # Errors
    ///
    /// If no interpretation yields a plan, returns the error of the first one
    /// ([`PlanError::EmptyGoalFormula`] when `goals` is empty).
    pub fn plan_interpretations(
        &self,
        goals: &[GoalFormula],
        state: &WorldState,
    ) -> Result<Vec<Plan>, PlanError> {
        let mut plans = Vec::new();
        let mut first_error = None;
        for goal in goals {
            match self.plan(goal, state) {
                Ok(plan) => plans.push(plan),
                Err(e) => {
                    debug!(goal = %goal, error = %e, "interpretation failed");
                    first_error.get_or_insert(e);
                }
            }
        }
        if plans.is_empty() {
            Err(first_error.unwrap_or(PlanError::EmptyGoalFormula))
        } else {
            Ok(plans)
        }
    }

    fn translate(&self, result: SearchResult<WorldState>) -> Result<Plan, PlanError> {
        let SearchResult { path, cost, stats } = result;
        let mut steps = Vec::new();
        for pair in path.windows(2) {
            let action = infer_action(&pair[0], &pair[1])?;
            if self.config.narrate {
                steps.push(PlanStep::Narration(narrate(&pair[0], action)));
            }
            steps.push(PlanStep::Action(action));
        }
        if steps.is_empty() {
            steps.push(PlanStep::AlreadySatisfied);
        }
        Ok(Plan { steps, cost, stats })
    }
}

/// Plan with the default configuration.
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan(goal: &GoalFormula, state: &WorldState) -> Result<Plan, PlanError> {
    Planner::default().plan(goal, state)
}

/// Plan with the default configuration and an explicit timeout.
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan_with_timeout(
    goal: &GoalFormula,
    state: &WorldState,
    timeout: Duration,
) -> Result<Plan, PlanError> {
    Planner::new(PlannerConfig {
        timeout,
        ..PlannerConfig::default()
    })
    .plan(goal, state)
}
