use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert().success().stdout(str::contains("carry 45000 calories"));
}
