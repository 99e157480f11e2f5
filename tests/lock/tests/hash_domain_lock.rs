//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected size (catches forgotten additions)
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `BLOCKSWORLD::*::V1\0` naming convention
//! 4. Digests match an independent SHA-256 over `domain || payload`
//! 5. No raw `BLOCKSWORLD::` domain literals outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use blocksworld_kernel::proof::canon::canonical_json_bytes;
use blocksworld_kernel::proof::hash::HashDomain;
use blocksworld_planner::{plan, GoalFormula};
use lock_tests::fixtures::ball_and_table;
use sha2::{Digest, Sha256};

fn independent_hash(domain: &[u8], payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(payload);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

// ---------------------------------------------------------------------------
// 1-3. Domain set shape
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_bytes_unique_and_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(seen.insert(bytes), "duplicate domain bytes: {domain}");
        assert!(bytes.ends_with(&[0]), "{domain} is not null-terminated");
        assert_eq!(
            bytes.iter().filter(|&&b| b == 0).count(),
            1,
            "{domain} has an interior null"
        );
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"BLOCKSWORLD::"), "{domain}");
        assert!(bytes.ends_with(b"::V1\0"), "{domain}");
    }
}

// ---------------------------------------------------------------------------
// 4. Independent recomputation
// ---------------------------------------------------------------------------

#[test]
fn plan_digest_matches_independent_sha256() {
    let goal: GoalFormula = "ontop(a,b)".parse().unwrap();
    let plan = plan(&goal, &ball_and_table()).unwrap();
    assert_eq!(
        plan.digest().as_str(),
        independent_hash(HashDomain::Plan.as_bytes(), b"p r r d")
    );
    assert_eq!(
        goal.digest().as_str(),
        independent_hash(HashDomain::GoalFormula.as_bytes(), b"ontop(a,b)")
    );
}

#[test]
fn world_fingerprint_matches_independent_sha256() {
    let world = ball_and_table();
    let canonical = br#"{"arm":0,"holding":null,"objects":{"a":{"color":"white","form":"ball","size":"small"},"b":{"color":"red","form":"table","size":"large"}},"stacks":[["a"],[],["b"]]}"#;
    assert_eq!(
        canonical_json_bytes(&world.to_json_value()).unwrap(),
        canonical.to_vec()
    );
    assert_eq!(
        world.fingerprint().unwrap().as_str(),
        independent_hash(HashDomain::WorldState.as_bytes(), canonical)
    );
}

// ---------------------------------------------------------------------------
// 5. No raw domain literals in production source
// ---------------------------------------------------------------------------

#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let pattern = "b\"BLOCKSWORLD::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();

    for crate_dir in ["kernel", "search", "planner"] {
        for path in rust_files(&root.join(crate_dir).join("src")) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {trimmed}", path.display(), i + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw BLOCKSWORLD:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(rust_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                results.push(path);
            }
        }
    }
    results
}
