//! Cross-process determinism.
//!
//! Spawns the `plan_fixture` binary under several environment variants and
//! asserts that all produce identical output. Plans, costs, expansion counts
//! and digests must not depend on cwd, locale or hash seeds.

use std::path::{Path, PathBuf};
use std::process::Command;

use lock_tests::fixtures::fixture_path;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// `plan_fixture` binary lives one level up.
fn binary_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(format!("plan_fixture{}", std::env::consts::EXE_SUFFIX));
    path
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .arg(fixture_path("small_world.json"))
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (work_dir={}, overrides={env_overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_three_env_variants() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let temp = tempfile::tempdir().unwrap();

    let baseline = run_variant(manifest_dir, &[]);
    let variants = [
        run_variant(temp.path(), &[("LC_ALL", "C")]),
        run_variant(temp.path(), &[("LANG", "tr_TR.UTF-8"), ("TZ", "Asia/Tokyo")]),
        run_variant(manifest_dir, &[("RUST_LOG", "trace"), ("HOME", "/nonexistent")]),
    ];
    for (i, output) in variants.iter().enumerate() {
        assert_eq!(&baseline, output, "variant {} diverged from baseline", i + 1);
    }
}

/// Output lines belonging to `goal`, up to the next `goal=` line.
fn plan_for<'a>(lines: &[&'a str], goal: &str) -> Vec<&'a str> {
    let header = format!("goal={goal}");
    let at = lines
        .iter()
        .position(|l| *l == header)
        .unwrap_or_else(|| panic!("goal {goal} missing from output"));
    lines[at + 1..]
        .iter()
        .take_while(|l| !l.starts_with("goal="))
        .copied()
        .collect()
}

#[test]
fn crossproc_output_pins_known_plans() {
    let output = run_variant(Path::new(env!("CARGO_MANIFEST_DIR")), &[]);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("world=sha256:"), "{}", lines[0]);
    assert_eq!(plan_for(&lines, "ontop(a,floor)")[..2], ["tokens=r r d", "cost=3"]);
    assert_eq!(plan_for(&lines, "inside(f,l)")[..2], ["tokens=r r d r p l l d", "cost=8"]);
    assert_eq!(
        plan_for(&lines, "ontop(e,floor)")[..3],
        ["tokens=That is already true!", "cost=0", "expansions=0"]
    );
    assert_eq!(
        plan_for(&lines, "ontop(z,floor)"),
        ["error=goal references unknown object z"]
    );
}
