use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn collect_keys_output_right_answer() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("inputs/vault_86.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("has 86 steps"));
}

#[test]
fn collect_keys_show_order() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("inputs/vault_small.txt").arg("--show-order");

    cmd.assert()
        .success()
        .stdout(str::contains("has 8 steps").and(str::contains("order ab")));
}

#[test]
fn collect_keys_after_split_entrance() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("inputs/vault_split.txt");
    cmd.assert()
        .success()
        .stdout(str::contains("with 1 robot(s) has 26 steps"));

    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("inputs/vault_split.txt").arg("--split-entrance");
    cmd.assert()
        .success()
        .stdout(str::contains("with 4 robot(s) has 8 steps"));
}

#[test]
fn collect_keys_report_no_solution() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("inputs/vault_locked.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("No solution found"));
}

#[test]
fn collect_keys_reject_ragged_map() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("inputs/vault_ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 9 column(s) in each row, given 8."));
}
