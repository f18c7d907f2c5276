//! Cross-process determinism: spawns `search_fixture` under environment
//! variants and asserts byte-identical stdout.

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

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir).args(args);
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
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[], &[]);

    for expected in [
        "case=diamond/ucs\n",
        "goal_path=A,B,D\n",
        "goal_cost=2\n",
        "case=road_map/ucs\n",
        "goal_path=Arad,Sibiu,Rimnicu Vilcea,Pitesti,Bucharest\n",
        "goal_cost=418\n",
        "case=road_map/ids:3\n",
        "trace_digest=sha256:",
        "report_digest=sha256:",
    ] {
        assert!(baseline.contains(expected), "baseline missing {expected:?}");
    }
    assert!(!baseline.contains("termination=frontier_exhausted"));

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(
        baseline,
        run_variant(alt_cwd, &[], &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[], &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    // Logging goes to stderr only.
    assert_eq!(
        baseline,
        run_variant(&root, &[], &[("RUST_LOG", "trace")]),
        "output differs when RUST_LOG=trace"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[],
            &[
                ("FRINGE_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_single_strategy_with_rendered_trace() {
    let root = workspace_root();
    let output = run_variant(&root, &["dls:1", "--render"], &[]);

    assert!(output.contains("case=diamond/dls:1\n"));
    assert!(output.contains("termination=frontier_exhausted\n"));
    assert!(output.contains("step 0 (limit 1): [A (0)]\n"));
    assert!(!output.contains("case=diamond/bfs"));
    assert_eq!(output, run_variant("/tmp", &["dls:1", "--render"], &[]));
}
