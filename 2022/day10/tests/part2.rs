use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_image() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("steady_inputs.txt");

    let first_row = format!("##..###{}\n", ".".repeat(33));
    let other_row = format!("....###{}\n", ".".repeat(33));
    cmd.assert()
        .success()
        .stdout(str::contains(format!("{}{}", first_row, other_row.repeat(5))));
}

#[test]
fn part2_output_right_image_for_published_program() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("sample_inputs2.txt");

    let image = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....
";
    cmd.assert().success().stdout(str::contains(image));
}
