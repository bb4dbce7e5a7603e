use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day5_part1").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert().success().stdout(str::contains("top crates are CMZ."));
}

#[test]
fn part1_rejects_moving_too_many_crates() {
    let mut cmd = Command::cargo_bin("day5_part1").unwrap();
    cmd.arg("bad_inputs.txt");

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("Stack 1 has 3 crate(s), can't move 4 of them."));
}

#[test]
fn part1_rejects_crates_beyond_labels() {
    let mut cmd = Command::cargo_bin("day5_part1").unwrap();
    cmd.arg("wide_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("has crates beyond the last labeled stack"));
}
