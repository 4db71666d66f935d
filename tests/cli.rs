use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn batch_driver_answers_each_line() {
    Command::cargo_bin("knight-distance")
        .unwrap()
        .write_stdin("8 8 1 1 2 2\n8 8 4 4 4 5\n3 3 2 2 1 1\n4 4 1 1 4 1\n3 4 2 2 2 3\n")
        .assert()
        .success()
        .stdout("4\n3\nimpossible\n5\n5\n");
}

#[test]
fn batch_driver_rejects_a_bad_line() {
    Command::cargo_bin("knight-distance")
        .unwrap()
        .write_stdin("8 8 1 1 2 2\n8 8 one 1 2 2\n")
        .assert()
        .code(2)
        .stdout("4\n")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn verify_is_silent_on_agreement() {
    Command::cargo_bin("knight-verify")
        .unwrap()
        .args(["--max-rows", "6", "--max-cols", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked 30 boards up to 6x5: 0 mismatches"))
        .stdout(predicate::str::contains("Mistakes").not());
}

#[test]
fn verify_prints_the_summary_once() {
    Command::cargo_bin("knight-verify")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(["--max-rows", "3", "--max-cols", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked 9 boards").count(1))
        .stderr(predicate::str::contains("checked").not());
}

#[test]
fn verify_reads_config_and_emits_json() {
    let mut cfg = tempfile::NamedTempFile::new().unwrap();
    write!(cfg, r#"{{"max_rows": 4, "max_cols": 3}}"#).unwrap();

    let out = Command::cargo_bin("knight-verify")
        .unwrap()
        .arg("--config")
        .arg(cfg.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["config"]["max_rows"], 4);
    assert_eq!(v["summary"]["boards"], 12);
    assert_eq!(v["summary"]["reports"].as_array().unwrap().len(), 0);
}

#[test]
fn verify_rejects_an_empty_bound() {
    Command::cargo_bin("knight-verify")
        .unwrap()
        .args(["--max-rows", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_rows must be >= 1"));
}

#[test]
fn show_prints_both_grids() {
    Command::cargo_bin("knight-verify")
        .unwrap()
        .args(["--show", "3", "3", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("BFS true distance"))
        .stdout(predicate::str::contains("0  3  2"));
}

#[test]
fn show_reports_reach_and_eccentricity() {
    Command::cargo_bin("knight-verify")
        .unwrap()
        .args(["--show", "3", "3", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "board 3×3 from (1, 1): 8 reachable, eccentricity calc=4, bfs=4",
        ));

    Command::cargo_bin("knight-verify")
        .unwrap()
        .args(["--show", "8", "8", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "board 8×8 from (1, 1): 64 reachable, eccentricity calc=6, bfs=6",
        ));
}
