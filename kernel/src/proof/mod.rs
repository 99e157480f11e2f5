//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Used for world fingerprints and plan digests. Depends on nothing else in
//! the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
