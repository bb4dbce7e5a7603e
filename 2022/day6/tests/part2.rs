use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::starts_with("19 character(s)"));
}

#[test]
fn part2_fails_without_marker() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.arg("bad_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("No sequence of 14 distinct characters"));
}
