use day1::Elf;

#[test]
fn last_elf_needs_no_trailing_blank_line() {
    let elves = day1::read_elves("sample_inputs.txt").unwrap();
    assert_eq!(elves.len(), 5);
    assert_eq!(elves[4].total_calories(), 10000);
}

#[test]
fn top_calories_with_fewer_elves() {
    let elves = vec![Elf::new(vec![1, 2]), Elf::new(vec![10])];
    assert_eq!(day1::top_calories(&elves, 3), 13);
    assert_eq!(day1::top_calories(&elves, 1), 10);
    assert_eq!(day1::top_calories(&[], 3), 0);
}
