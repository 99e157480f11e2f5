//! Successor generation: which actions are legal, and what they produce.
//!
//! [`ActionRules`] carries the tunable physics (an optional column height
//! cap). The free functions [`legal_actions`] and [`apply`] use the default
//! rules.
//!
//! `apply` is pure. The successor shares every column with its parent except
//! the one under the arm on a pick-up or put-down, which is copied on write.

use std::sync::Arc;

use crate::operators::action::Action;
use crate::operators::stacking::can_stack;
use crate::world::state::WorldState;

/// An action was requested that is not legal in the current state.
///
/// Callers are expected to consult [`legal_actions`] first; this is a
/// programming-error class, not a planning outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("illegal action {action}: {reason}")]
    IllegalAction { action: Action, reason: &'static str },

    /// Two states are not one primitive action apart.
    #[error("no single action leads from {from} to {to}")]
    NoTransition { from: String, to: String },
}

/// Tunable action physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionRules {
    /// Maximum number of objects a column may hold after a put-down.
    /// `None` means unbounded.
    pub max_column_height: Option<usize>,
}

impl ActionRules {
    #[must_use]
    pub const fn with_max_column_height(max: usize) -> Self {
        Self {
            max_column_height: Some(max),
        }
    }

    /// Legal actions in `state`, in the fixed order left, right, pick-up,
    /// put-down.
    #[must_use]
    pub fn legal_actions(&self, state: &WorldState) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|a| self.check(state, *a).is_ok())
            .collect()
    }

    /// Whether `action` is legal in `state`.
    #[must_use]
    pub fn is_legal(&self, state: &WorldState, action: Action) -> bool {
        self.check(state, action).is_ok()
    }

    fn check(&self, state: &WorldState, action: Action) -> Result<(), &'static str> {
        let arm = state.arm();
        match action {
            Action::Left if arm == 0 => Err("arm is at the leftmost column"),
            Action::Right if arm + 1 >= state.column_count() => {
                Err("arm is at the rightmost column")
            }
            Action::Left | Action::Right => Ok(()),
            Action::PickUp if state.held().is_some() => Err("already holding an object"),
            Action::PickUp if state.column(arm).is_empty() => Err("column is empty"),
            Action::PickUp => Ok(()),
            Action::PutDown => {
                let held = state.held().ok_or("not holding anything")?;
                let attrs = state
                    .attributes(held)
                    .ok_or("held object has no attributes")?;
                if self
                    .max_column_height
                    .is_some_and(|max| state.column(arm).len() >= max)
                {
                    return Err("column is at maximum height");
                }
                if can_stack(attrs, state.support_at(arm)) {
                    Ok(())
                } else {
                    Err("placement violates stacking rules")
                }
            }
        }
    }

    /// Successor of `state` under `action`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] if `action` is not legal in
    /// `state` under these rules.
    pub fn apply(&self, state: &WorldState, action: Action) -> Result<WorldState, ActionError> {
        self.check(state, action)
            .map_err(|reason| ActionError::IllegalAction { action, reason })?;

        let arm = state.arm();
        let mut columns = state.column_handles().to_vec();
        let successor = match action {
            Action::Left => state.successor(columns, arm - 1, state.held().cloned()),
            Action::Right => state.successor(columns, arm + 1, state.held().cloned()),
            Action::PickUp => {
                let top = Arc::make_mut(&mut columns[arm]).pop();
                state.successor(columns, arm, top)
            }
            Action::PutDown => {
                if let Some(held) = state.held() {
                    Arc::make_mut(&mut columns[arm]).push(held.clone());
                }
                state.successor(columns, arm, None)
            }
        };
        Ok(successor)
    }
}

/// Legal actions under the default rules.
#[must_use]
pub fn legal_actions(state: &WorldState) -> Vec<Action> {
    ActionRules::default().legal_actions(state)
}

/// Apply `action` under the default rules.
///
/// # Errors
///
/// Returns [`ActionError::IllegalAction`] if `action` is not legal in `state`.
pub fn apply(state: &WorldState, action: Action) -> Result<WorldState, ActionError> {
    ActionRules::default().apply(state, action)
}

/// The single primitive action leading from `from` to `to`.
///
/// Any transition legal under a height cap is also legal without one, so the
/// default rules suffice.
///
/// # Errors
///
/// Returns [`ActionError::NoTransition`] if no legal action produces `to`.
pub fn infer_action(from: &WorldState, to: &WorldState) -> Result<Action, ActionError> {
    legal_actions(from)
        .into_iter()
        .find(|a| apply(from, *a).is_ok_and(|next| next == *to))
        .ok_or_else(|| ActionError::NoTransition {
            from: from.key().to_string(),
            to: to.key().to_string(),
        })
}
