use crate::types::Position;

/// Parses an algebraic square name like "e2" for the standard 8x8 board.
/// Rank 1 is the bottom edge of the grid, so row = 8 - rank.
pub fn parse_square(s: &str) -> Option<Position> {
    let b = s.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let file = b[0];
    let rank = b[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Position::new((b'8' - rank) as i8, (file - b'a') as i8))
}

/// Algebraic name of a square on the standard 8x8 board; None off it.
pub fn square_name(pos: Position) -> Option<String> {
    if !(0..8).contains(&pos.row) || !(0..8).contains(&pos.col) {
        return None;
    }
    let file = (b'a' + pos.col as u8) as char;
    let rank = (b'8' - pos.row as u8) as char;
    Some(format!("{file}{rank}"))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
