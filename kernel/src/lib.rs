//! Blocks-world kernel: the world model and its primitive actions.
//!
//! # API Surface
//!
//! - [`world::WorldState`] -- validated, immutable world snapshot
//! - [`operators::apply::ActionRules`] -- legal actions and successor states
//! - [`proof::hash::canonical_hash`] -- domain-separated content hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `world` ← `operators`
//!
//! One-way only. `world` uses `proof` for fingerprints; `operators` builds
//! successors of `world` states.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod operators;
pub mod proof;
pub mod world;
