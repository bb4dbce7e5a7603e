use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert().success().stdout(str::contains("carries 24000 calories"));
}

#[test]
fn part1_rejects_invalid_calories() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("bad_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid text(2OO) for food calories"))
        .stderr(str::contains("line 3"));
}
