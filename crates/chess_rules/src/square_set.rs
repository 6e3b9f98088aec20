use crate::types::Position;

/// Set of squares on one board, sized to that board's dimensions.
///
/// Destination generation returns one of these: a square is marked iff the
/// piece could move there. Built fresh on every query, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareSet {
    rows: u8,
    cols: u8,
    marks: Vec<bool>,
}

impl SquareSet {
    pub fn new(rows: u8, cols: u8) -> Self {
        SquareSet {
            rows,
            cols,
            marks: vec![false; rows as usize * cols as usize],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= 0 && pos.row < self.rows as i8 && pos.col >= 0 && pos.col < self.cols as i8 {
            Some(pos.row as usize * self.cols as usize + pos.col as usize)
        } else {
            None
        }
    }

    /// Marks a square. Off-board positions are ignored, so the set can
    /// never contain a square that does not exist.
    pub fn insert(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.marks[i] = true;
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => self.marks[i],
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the marked squares in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as usize;
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(move |(i, _)| Position::new((i / cols) as i8, (i % cols) as i8))
    }
}

#[cfg(test)]
#[path = "square_set_tests.rs"]
mod square_set_tests;
