use day4::{AssignmentPair, Error, SectionRange};

fn range(min: usize, max: usize) -> SectionRange {
    SectionRange::new(min, max).unwrap()
}

#[test]
fn containment_in_either_order() {
    assert!(AssignmentPair::new(range(2, 8), range(3, 7)).is_fully_contained());
    assert!(AssignmentPair::new(range(6, 6), range(4, 6)).is_fully_contained());
    assert!(AssignmentPair::new(range(3, 3), range(3, 3)).is_fully_contained());
    assert!(!AssignmentPair::new(range(2, 4), range(3, 7)).is_fully_contained());
}

#[test]
fn overlap_includes_touching_ends() {
    assert!(AssignmentPair::new(range(5, 7), range(7, 9)).is_overlapped());
    assert!(AssignmentPair::new(range(7, 9), range(5, 7)).is_overlapped());
    assert!(!AssignmentPair::new(range(2, 3), range(4, 5)).is_overlapped());
}

#[test]
fn pair_text_is_validated() {
    assert!(matches!(
        AssignmentPair::try_from("2-4;6-8"),
        Err(Error::InvalidPairText(_))
    ));
    assert!(matches!(
        AssignmentPair::try_from("9-1,2-3"),
        Err(Error::InvertedRange(9, 1))
    ));
    assert!(matches!(
        AssignmentPair::try_from("99999999999999999999999-1,2-3"),
        Err(Error::InvalidSectionId(_))
    ));
}
