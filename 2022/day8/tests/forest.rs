use day8::{Direction, Error, ForestBuilder, Position};

#[test]
fn sample_scores() {
    let forest = day8::read_forest("sample_inputs.txt").unwrap();
    assert_eq!((forest.row_n(), forest.col_n()), (5, 5));

    let middle_five = Position::new(1, 2);
    assert_eq!(forest.viewing_distance(&middle_five, Direction::Up), 1);
    assert_eq!(forest.viewing_distance(&middle_five, Direction::Left), 1);
    assert_eq!(forest.viewing_distance(&middle_five, Direction::Right), 2);
    assert_eq!(forest.viewing_distance(&middle_five, Direction::Down), 2);
    assert_eq!(forest.scenic_score(&middle_five), 4);
    assert_eq!(forest.scenic_score(&Position::new(3, 2)), 8);
}

#[test]
fn sample_visibility() {
    let forest = day8::read_forest("sample_inputs.txt").unwrap();
    assert!(forest.is_visible(&Position::new(1, 1)));
    assert!(!forest.is_visible(&Position::new(1, 3)));
    assert!(!forest.is_visible(&Position::new(2, 2)));
    assert!(forest.is_visible_from(&Position::new(2, 1), Direction::Right));
}

#[test]
fn edge_trees_are_visible_with_zero_score() {
    let forest = day8::read_forest("sample_inputs.txt").unwrap();
    let corner = Position::new(0, 0);
    assert!(forest.is_visible(&corner));
    assert_eq!(forest.scenic_score(&corner), 0);
}

#[test]
fn grid_text_is_validated() {
    let mut builder = ForestBuilder::new();
    builder.add_row("123").unwrap();
    assert!(matches!(
        builder.add_row("1a3"),
        Err(Error::InvalidHeight('a'))
    ));
    assert!(matches!(
        builder.add_row("12"),
        Err(Error::InconsistentRow(3, 2))
    ));
}

#[test]
fn empty_forest_has_nothing_to_see() {
    let forest = ForestBuilder::new().build();
    assert_eq!(forest.visible_count(), 0);
    assert_eq!(forest.max_scenic_score(), 0);
}
