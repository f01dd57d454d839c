use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["showdown"];
    argv.extend_from_slice(args);
    let code = showdown_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn clear_env() {
    for key in [
        "SHOWDOWN_CONFIG",
        "SHOWDOWN_DIFFICULTY",
        "SHOWDOWN_SEED",
        "SHOWDOWN_MIN_RAISE",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn action(out: &str) -> &str {
    out.lines()
        .find_map(|l| l.strip_prefix("Action: "))
        .expect("action line")
}

#[test]
#[serial]
fn pocket_aces_raise_the_minimum() {
    clear_env();
    let (code, out, err) = run(&["decide", "--hole", "As Ah", "--difficulty", "hard", "--seed", "7"]);
    assert_eq!(code, 0, "stderr: {err}");
    assert!(out.contains("AI: HeuristicAI(hard)"));
    assert!(out.contains("Seed: 7"));
    assert_eq!(action(&out), "raise 20");

    let (_, out, _) = run(&[
        "decide", "--hole", "As Ah", "--difficulty", "hard", "--min-raise", "50",
    ]);
    assert_eq!(action(&out), "raise 50");
}

#[test]
#[serial]
fn junk_folds_to_a_big_bet() {
    clear_env();
    let (code, out, _) = run(&[
        "decide", "--hole", "7c 2d", "--difficulty", "hard", "--to-call", "100", "--pot", "150",
    ]);
    assert_eq!(code, 0);
    assert_eq!(action(&out), "fold");
}

#[test]
#[serial]
fn all_in_call_never_raises() {
    clear_env();
    for seed in 0..20u64 {
        let seed = seed.to_string();
        let (_, out, _) = run(&[
            "decide", "--hole", "As Ah", "--difficulty", "hard", "--to-call", "200", "--pot",
            "300", "--chips", "200", "--seed", &seed,
        ]);
        assert_eq!(action(&out), "call 200");
    }
}

#[test]
#[serial]
fn same_seed_same_answer() {
    clear_env();
    let args = [
        "decide", "--hole", "Jh Tc", "--board", "9d 8s 2c", "--to-call", "40", "--pot", "100",
        "--difficulty", "easy", "--seed", "99",
    ];
    let (code, first, _) = run(&args);
    assert_eq!(code, 0);
    let (_, second, _) = run(&args);
    assert_eq!(first, second);
}

#[test]
#[serial]
fn environment_supplies_defaults() {
    clear_env();
    unsafe {
        std::env::set_var("SHOWDOWN_DIFFICULTY", "hard");
        std::env::set_var("SHOWDOWN_MIN_RAISE", "40");
        std::env::set_var("SHOWDOWN_SEED", "3");
    }
    let (code, out, _) = run(&["decide", "--hole", "Ks Kh"]);
    clear_env();
    assert_eq!(code, 0);
    assert!(out.contains("AI: HeuristicAI(hard)"));
    assert!(out.contains("Seed: 3"));
    assert_eq!(action(&out), "raise 40");
}

#[test]
#[serial]
fn file_thresholds_apply_to_the_configured_difficulty() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("showdown.toml");
    fs::write(&path, "difficulty = \"hard\"\n\n[thresholds]\nraise = 11.0\n").unwrap();
    unsafe {
        std::env::set_var("SHOWDOWN_CONFIG", &path);
    }

    // aces can never reach 11, so they just check
    let (code, out, _) = run(&["decide", "--hole", "As Ah", "--seed", "1"]);
    assert_eq!(code, 0);
    assert_eq!(action(&out), "check");

    // a different difficulty uses its own preset
    let (_, out, _) = run(&["decide", "--hole", "As Ah", "--difficulty", "medium", "--seed", "1"]);
    clear_env();
    assert_eq!(action(&out), "raise 20");
}

#[test]
#[serial]
fn bad_arguments_exit_with_two() {
    clear_env();
    let cases: [(&[&str], &str); 4] = [
        (&["decide", "--hole", "As Ah", "--difficulty", "expert"], "Unknown difficulty"),
        (&["decide", "--hole", "As Ah", "--board", "As Kd Qc"], "duplicate card"),
        (&["decide", "--hole", "As Ah", "--board", "Kd Qc"], "Invalid input size"),
        (&["decide", "--hole", "As Ah", "--min-raise", "0"], "min-raise"),
    ];
    for (args, expected) in cases {
        let (code, out, err) = run(args);
        assert_eq!(code, 2, "{args:?}");
        assert!(out.is_empty());
        assert!(err.contains(expected), "{args:?}: {err}");
    }
}
