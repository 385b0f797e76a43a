//! Cross-process determinism test for search runs.
//!
//! Spawns the `search_fixture` binary under 4 environment variants
//! and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("scenario_digest=sha256:"),
        "baseline output missing scenario_digest"
    );
    for prefix in ["best_cost", "first_match"] {
        assert!(
            baseline.contains(&format!("{prefix}.search_graph_digest=sha256:")),
            "baseline output missing {prefix}.search_graph_digest"
        );
        assert!(
            baseline.contains(&format!("{prefix}.termination_reason=goal_reached")),
            "baseline output missing {prefix}.termination_reason=goal_reached"
        );
        assert!(
            baseline.contains(&format!("{prefix}.path_len=19")),
            "baseline output missing {prefix}.path_len=19"
        );
    }
    for line in ["best_cost.total_nodes_created=35", "first_match.total_nodes_created=81"] {
        assert!(baseline.contains(line), "baseline output missing {line}");
    }

    // Variant 2: different cwd.
    let alt_cwd = std::env::temp_dir().to_string_lossy().to_string();
    let variant_cwd = run_variant(&alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    // Variant 4: spurious env vars, including a chatty log filter.
    let variant_noise = run_variant(
        &root,
        &[
            ("WAYPOINT_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars"
    );
}
