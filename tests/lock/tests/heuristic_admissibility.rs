//! Brute-force heuristic and optimality lock.
//!
//! For every reachable state of each two-object fixture world, and every
//! well-formed literal over its objects (both polarities, floor variants
//! included), proves:
//!
//! 1. A satisfied literal estimates to 0.
//! 2. The estimate never exceeds the breadth-first distance to the literal.
//! 3. The planner's plan cost equals that distance, and the planner reports
//!    exhaustion exactly when no reachable state satisfies the literal.

use blocksworld_kernel::operators::ActionRules;
use blocksworld_kernel::world::WorldState;
use blocksworld_planner::heuristic::literal_estimate;
use blocksworld_planner::relations::is_satisfied;
use blocksworld_planner::{plan, GoalFormula, Literal, PlanError, Relation};
use lock_tests::fixtures::two_object_worlds;
use lock_tests::oracle::{distance, reachable};

/// Every literal the planner accepts over objects `a` and `b`.
fn literals() -> Vec<Literal> {
    let mut positive = Vec::new();
    for x in ["a", "b"] {
        positive.push(Literal::holding(x));
        for relation in Relation::ALL {
            match relation {
                Relation::Holding => {}
                Relation::OnTop | Relation::Inside | Relation::Above => {
                    positive.push(Literal::binary(relation, x, "floor"));
                    positive.push(Literal::binary(relation, x, other(x)));
                }
                _ => positive.push(Literal::binary(relation, x, other(x))),
            }
        }
    }
    positive
        .iter()
        .cloned()
        .chain(positive.iter().cloned().map(Literal::negated))
        .collect()
}

fn other(x: &str) -> &'static str {
    if x == "a" {
        "b"
    } else {
        "a"
    }
}

fn for_each_case(mut check: impl FnMut(&str, &WorldState, &Literal)) {
    let literals = literals();
    for (name, world) in two_object_worlds() {
        for state in reachable(&world, &ActionRules::default()) {
            for literal in &literals {
                check(name, &state, literal);
            }
        }
    }
}

#[test]
fn literal_set_covers_every_relation() {
    let literals = literals();
    for relation in Relation::ALL {
        assert!(literals.iter().any(|l| l.relation == relation), "{relation}");
    }
    assert_eq!(literals.len(), 2 * 2 * 11);
}

#[test]
fn satisfied_literals_estimate_zero() {
    for_each_case(|name, state, literal| {
        if is_satisfied(state, literal) {
            assert_eq!(
                literal_estimate(state, literal),
                0,
                "{name}: {literal} at {}",
                state.key()
            );
        }
    });
}

#[test]
fn estimates_never_exceed_true_distance() {
    let rules = ActionRules::default();
    let mut checked = 0_usize;
    for_each_case(|name, state, literal| {
        let Some(d) = distance(state, &rules, |s| is_satisfied(s, literal)) else {
            return;
        };
        let h = literal_estimate(state, literal);
        assert!(h <= d, "{name}: {literal} at {}: h={h} > d={d}", state.key());
        checked += 1;
    });
    assert!(checked > 1000, "only {checked} reachable cases");
}

#[test]
fn plans_are_optimal_on_two_object_worlds() {
    let rules = ActionRules::default();
    for_each_case(|name, state, literal| {
        let optimal = distance(state, &rules, |s| is_satisfied(s, literal));
        let outcome = plan(&GoalFormula::single(literal.clone()), state);
        match (optimal, outcome) {
            (Some(d), Ok(found)) => {
                assert_eq!(found.cost, d, "{name}: {literal} at {}", state.key());
                assert_eq!(found.is_already_satisfied(), d == 0);
            }
            (None, Err(PlanError::SearchExhausted { .. })) => {}
            (optimal, outcome) => panic!(
                "{name}: {literal} at {}: distance {optimal:?}, planner {outcome:?}",
                state.key()
            ),
        }
    });
}
