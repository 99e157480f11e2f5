//! Generic best-first (A*) search.
//!
//! This crate knows nothing about blocks. It depends on no other workspace
//! crate; `blocksworld_planner` instantiates it over world states.
//!
//! # Crate dependency graph
//!
//! ```text
//! blocksworld_kernel ─┐
//!                     ├─ blocksworld_planner
//! blocksworld_search ─┘
//! ```
//!
//! # Key types
//!
//! - [`SearchGraph`] -- successor edges plus a canonical dedup key
//! - [`Heuristic`] -- remaining-cost estimate; [`ZeroHeuristic`] is uniform cost
//! - [`search()`] -- the A* loop with a wall-clock deadline
//! - [`SearchOutcome`] -- found path, exhaustion or timeout, with [`SearchStats`]

#![forbid(unsafe_code)]

pub mod contract;
pub mod frontier;
pub mod node;
pub mod search;

pub use contract::{Edge, Heuristic, SearchGraph, ZeroHeuristic};
pub use search::{search, SearchOutcome, SearchResult, SearchStats};
