use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day5_part2").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert().success().stdout(str::contains("top crates are MCD."));
}
