use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_smoke() {
    let output = run_sim(&["1", "hard", "easy"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert_eq!(v["first"]["name"], "hard AI");
    assert_eq!(v["second"]["name"], "easy AI");
    assert!(v["first"]["shots"].as_u64().unwrap() > 0);
}

#[test]
fn sim_binary_is_deterministic() {
    let a = run_sim(&["42"]);
    let b = run_sim(&["42"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn sim_binary_rejects_unknown_difficulty() {
    let output = run_sim(&["1", "nightmare"]);
    assert!(!output.status.success());
}
