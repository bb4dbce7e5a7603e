use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day3_part2").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert().success().stdout(str::contains("is 70."));
}

#[test]
fn part2_rejects_incomplete_group() {
    let mut cmd = Command::cargo_bin("day3_part2").unwrap();
    cmd.arg("bad_inputs.txt");

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("group #2"));
}
