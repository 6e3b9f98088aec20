use super::*;
use crate::types::Position;

#[test]
fn test_parse_square() {
    assert_eq!(parse_square("a1"), Some(Position::new(7, 0)));
    assert_eq!(parse_square("h8"), Some(Position::new(0, 7)));
    assert_eq!(parse_square("e2"), Some(Position::new(6, 4)));
    assert_eq!(parse_square("d8"), Some(Position::new(0, 3)));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!(parse_square(""), None);
    assert_eq!(parse_square("e"), None);
    assert_eq!(parse_square("e2x"), None);
    assert_eq!(parse_square("i1"), None);
    assert_eq!(parse_square("a0"), None);
    assert_eq!(parse_square("a9"), None);
    assert_eq!(parse_square("2e"), None);
}

#[test]
fn test_square_name() {
    assert_eq!(square_name(Position::new(7, 0)).as_deref(), Some("a1"));
    assert_eq!(square_name(Position::new(0, 7)).as_deref(), Some("h8"));
    assert_eq!(square_name(Position::new(6, 4)).as_deref(), Some("e2"));
}

#[test]
fn test_square_name_off_board() {
    assert_eq!(square_name(Position::new(-1, 0)), None);
    assert_eq!(square_name(Position::new(0, 8)), None);
    assert_eq!(square_name(Position::new(8, 3)), None);
}
