//! Content hashes with domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Rendered as
//! `"sha256:<hex>"`.

use std::fmt;

use sha2::{Digest, Sha256};

pub use super::hash_domain::HashDomain;

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: exactly one `:` separator with non-empty text on both sides
/// (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` on a missing colon, empty algorithm or empty digest.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `data` under `domain`, returning raw bytes.
#[must_use]
pub fn raw_hash(domain: HashDomain, data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Canonical content hash of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let digest = hex::encode(raw_hash(domain, data));
    let full = format!("sha256:{digest}");
    ContentHash { colon: 6, full }
}
