use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color captures en passant from: the row an enemy
    /// pawn lands on after a double step.
    pub fn en_passant_row(self) -> i8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    /// Last row in this color's direction of travel; pawns promote there.
    pub fn promotion_row(self, rows: u8) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => rows as i8 - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Board coordinate. Row 0 is the top edge (Black's back rank in the
/// standard layout), column 0 the left edge. Off-board values are
/// representable; `Board::is_inside` decides validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    pub fn offset(self, dr: i8, dc: i8) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Handle to one piece in a board's arena. Stays valid for the lifetime of
/// the board, across captures and undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Option<Position>,
    moves_made: u32,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            position: None,
            moves_made: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// None while the piece is off the board (captured, promoted away, or
    /// not yet placed).
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn has_moved(&self) -> bool {
        self.moves_made > 0
    }

    pub(crate) fn set_position(&mut self, pos: Option<Position>) {
        self.position = pos;
    }

    pub(crate) fn increment_moves(&mut self) {
        self.moves_made += 1;
    }

    pub(crate) fn decrement_moves(&mut self) {
        self.moves_made -= 1;
    }
}
