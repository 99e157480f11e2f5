//! Operators module: the four primitive arm actions and their legality.
//!
//! Depends on `world`. Does not import from `proof`.

pub mod action;
pub mod apply;
pub mod stacking;

pub use action::{Action, ParseActionError};
pub use apply::{apply, infer_action, legal_actions, ActionError, ActionRules};
pub use stacking::can_stack;
