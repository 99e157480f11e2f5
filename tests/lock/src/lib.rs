//! Shared helpers for the cross-crate lock tests and the `plan_fixture`
//! binary.

pub mod fixtures;
pub mod oracle;
