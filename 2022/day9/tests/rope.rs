use day9::{Direction, Error, Motion, Position, Rope, Vector};

fn sample_motions() -> Vec<Motion> {
    day9::read_motions("sample_inputs.txt").unwrap()
}

fn long_motions() -> Vec<Motion> {
    day9::read_motions("sample_inputs2.txt").unwrap()
}

#[test]
fn sample_tail_visits_for_both_lengths() {
    let motions = sample_motions();
    assert_eq!(day9::simulate(day9::head_moves(&motions), 2).unwrap(), 13);
    assert_eq!(day9::simulate(day9::head_moves(&motions), 10).unwrap(), 1);
}

#[test]
fn simulate_is_repeatable() {
    let motions = long_motions();
    let first = day9::simulate(day9::head_moves(&motions), 10).unwrap();
    let second = day9::simulate(day9::head_moves(&motions), 10).unwrap();
    assert_eq!(first, 36);
    assert_eq!(first, second);
}

#[test]
fn single_knot_counts_head_positions() {
    let motions = vec![Motion::new(Direction::Right, 4)];
    assert_eq!(day9::simulate(day9::head_moves(&motions), 1).unwrap(), 5);

    let back_and_forth = vec![
        Motion::new(Direction::Right, 2),
        Motion::new(Direction::Left, 2),
    ];
    assert_eq!(
        day9::simulate(day9::head_moves(&back_and_forth), 1).unwrap(),
        3
    );
}

#[test]
fn zero_length_rope_is_rejected() {
    assert!(matches!(
        day9::simulate(day9::head_moves(&sample_motions()), 0),
        Err(Error::InvalidRopeLength(0))
    ));
}

#[test]
fn non_unit_move_aborts_simulation() {
    let moves = vec![Vector::new(0, 1), Vector::new(1, 1), Vector::new(0, 1)];
    assert!(matches!(
        day9::simulate(moves, 2),
        Err(Error::InvalidMove(Vector { r: 1, c: 1 }))
    ));
    assert!(matches!(
        day9::simulate(vec![Vector::new(0, 0)], 2),
        Err(Error::InvalidMove(_))
    ));
    assert!(matches!(
        day9::simulate(vec![Vector::new(0, 2)], 2),
        Err(Error::InvalidMove(_))
    ));
}

#[test]
fn rejected_move_leaves_rope_untouched() {
    let mut rope = Rope::new(3).unwrap();
    rope.step(Vector::new(0, 1)).unwrap();
    let before = rope.knots().to_vec();
    assert!(rope.step(Vector::new(-1, -1)).is_err());
    assert_eq!(rope.knots(), before.as_slice());
}

#[test]
fn adjacent_knots_stay_touching() {
    let motions = long_motions();
    let mut rope = Rope::new(10).unwrap();
    for mv in day9::head_moves(&motions) {
        rope.step(mv).unwrap();
        for pair in rope.knots().windows(2) {
            assert!(pair[0].chebyshev_dist(&pair[1]) <= 1);
        }
    }
}

#[test]
fn follower_on_top_of_leader_does_not_move() {
    let mut rope = Rope::new(3).unwrap();
    rope.step(Vector::new(0, 1)).unwrap();
    assert_eq!(rope.head(), Position::new(0, 1));
    assert_eq!(rope.knots()[1], Position::ORIGIN);
    assert_eq!(rope.tail(), Position::ORIGIN);
}

#[test]
fn follower_steps_diagonally_toward_leader() {
    let mut rope = Rope::new(2).unwrap();
    rope.step(Vector::new(-1, 0)).unwrap();
    rope.step(Vector::new(0, 1)).unwrap();
    assert_eq!(rope.tail(), Position::ORIGIN);
    rope.step(Vector::new(0, 1)).unwrap();
    assert_eq!(rope.head(), Position::new(-1, 2));
    assert_eq!(rope.tail(), Position::new(-1, 1));
}

#[test]
fn knots_update_in_chain_order() {
    let mut rope = Rope::new(3).unwrap();
    for _ in 0..3 {
        rope.step(Vector::new(0, 1)).unwrap();
    }
    assert_eq!(
        rope.knots(),
        &[Position::new(0, 3), Position::new(0, 2), Position::new(0, 1)]
    );
}

#[test]
fn head_moves_expand_counts() {
    let motions = vec![
        Motion::new(Direction::Up, 2),
        Motion::new(Direction::Right, 1),
    ];
    let moves = day9::head_moves(&motions).collect::<Vec<_>>();
    assert_eq!(
        moves,
        vec![Vector::new(-1, 0), Vector::new(-1, 0), Vector::new(0, 1)]
    );
    assert_eq!(day9::head_moves(&motions).count(), 3);
}

#[test]
fn motion_text_is_validated() {
    assert_eq!(
        Motion::try_from("D 7").unwrap(),
        Motion::new(Direction::Down, 7)
    );
    assert!(matches!(
        Motion::try_from("X 3"),
        Err(Error::InvalidDirection(s)) if s == "X"
    ));
    assert!(matches!(
        Motion::try_from("R three"),
        Err(Error::InvalidStepCount(_))
    ));
    assert!(matches!(
        Motion::try_from("R 0"),
        Err(Error::InvalidStepCount(_))
    ));
    assert!(matches!(
        Motion::try_from("R"),
        Err(Error::InvalidMotionText(_))
    ));
}

#[test]
fn bad_direction_in_file_fails_reading() {
    let err = day9::read_motions("bad_inputs.txt").unwrap_err();
    assert!(format!("{:#}", err).contains("line 3"));
}
