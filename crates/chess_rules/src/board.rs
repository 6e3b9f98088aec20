use crate::error::ChessError;
use crate::types::*;

/// Playing surface plus the arena owning every piece record.
///
/// Squares hold handles into the arena rather than piece data, so a piece
/// keeps its identity across capture and undo. The en-passant rule depends
/// on that: it compares piece identities, not squares.
#[derive(Clone, Debug)]
pub struct Board {
    rows: u8,
    cols: u8,
    squares: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Board {
    pub fn new(rows: u8, cols: u8) -> Self {
        Board {
            rows,
            cols,
            squares: vec![None; rows as usize * cols as usize],
            pieces: Vec::new(),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_inside(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows as i8 && pos.col >= 0 && pos.col < self.cols as i8
    }

    pub fn validate_position(&self, pos: Position) -> Result<(), ChessError> {
        if self.is_inside(pos) {
            Ok(())
        } else {
            Err(ChessError::InvalidPosition(pos))
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// The piece standing on `pos`, or None when the square is empty or off
    /// the board.
    pub fn piece_at(&self, pos: Position) -> Option<PieceId> {
        if self.is_inside(pos) {
            self.squares[self.index(pos)]
        } else {
            None
        }
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    /// Creates a new piece in the arena, initially off the board.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color));
        id
    }

    /// Puts `id` down on `pos`. Fails if the square is off the board or
    /// already occupied.
    pub fn place(&mut self, id: PieceId, pos: Position) -> Result<(), ChessError> {
        self.validate_position(pos)?;
        if self.piece_at(pos).is_some() {
            return Err(ChessError::OccupiedSquare(pos));
        }
        let i = self.index(pos);
        self.squares[i] = Some(id);
        self.piece_mut(id).set_position(Some(pos));
        Ok(())
    }

    /// Lifts whatever stands on `pos` off the board and returns it.
    pub fn remove(&mut self, pos: Position) -> Option<PieceId> {
        if !self.is_inside(pos) {
            return None;
        }
        let i = self.index(pos);
        let id = self.squares[i].take()?;
        self.piece_mut(id).set_position(None);
        Some(id)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
