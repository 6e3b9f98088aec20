use crate::board::Board;
use crate::error::ChessError;
use crate::movegen::{self, MatchContext};
use crate::square_set::SquareSet;
use crate::types::*;

/// A full game of chess driven turn by turn.
///
/// All mutation goes through [`ChessMatch::play_turn`]; a turn either
/// commits completely or leaves the match exactly as it was. Once
/// `terminated` is true the game is over and the match should be dropped.
#[derive(Clone, Debug)]
pub struct ChessMatch {
    board: Board,
    all_pieces: Vec<PieceId>,
    captured: Vec<PieceId>,
    turn: u32,
    current_player: Color,
    in_check: bool,
    en_passant_target: Option<PieceId>,
    terminated: bool,
}

impl ChessMatch {
    /// Starts a match with the full standard layout, White to move.
    pub fn new() -> Self {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut setup = Vec::with_capacity(32);
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            setup.push((Position::new(0, col), kind, Color::Black));
            setup.push((Position::new(1, col), PieceKind::Pawn, Color::Black));
            setup.push((Position::new(6, col), PieceKind::Pawn, Color::White));
            setup.push((Position::new(7, col), kind, Color::White));
        }
        ChessMatch::from_pieces(setup).expect("standard layout fits an empty board")
    }

    /// Builds a match from an arbitrary arrangement on the standard 8x8
    /// board. White moves first and the check flag starts cleared.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, ChessError>
    where
        I: IntoIterator<Item = (Position, PieceKind, Color)>,
    {
        let mut board = Board::new(8, 8);
        let mut all_pieces = Vec::new();
        for (pos, kind, color) in pieces {
            let id = board.add_piece(kind, color);
            board.place(id, pos)?;
            all_pieces.push(id);
        }
        Ok(ChessMatch {
            board,
            all_pieces,
            captured: Vec::new(),
            turn: 1,
            current_player: Color::White,
            in_check: false,
            en_passant_target: None,
            terminated: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn terminated(&self) -> bool {
        self.terminated
    }

    pub fn en_passant_target(&self) -> Option<PieceId> {
        self.en_passant_target
    }

    /// Pieces of `color` captured so far, oldest first.
    pub fn captured_pieces(&self, color: Color) -> Vec<PieceId> {
        self.captured
            .iter()
            .copied()
            .filter(|&id| self.board.piece(id).color() == color)
            .collect()
    }

    /// Pieces of `color` still standing on the board.
    pub fn pieces_in_play(&self, color: Color) -> Vec<PieceId> {
        self.all_pieces
            .iter()
            .copied()
            .filter(|&id| self.board.piece(id).color() == color && !self.captured.contains(&id))
            .collect()
    }

    fn context(&self) -> MatchContext {
        MatchContext {
            en_passant_target: self.en_passant_target,
            in_check: self.in_check,
        }
    }

    /// Destination preview for the piece on `origin`, validated exactly the
    /// way `play_turn` validates its origin.
    pub fn legal_destinations_from(&self, origin: Position) -> Result<SquareSet, ChessError> {
        let id = self.validate_origin(origin)?;
        Ok(movegen::legal_destinations(&self.board, id, &self.context()))
    }

    fn validate_origin(&self, origin: Position) -> Result<PieceId, ChessError> {
        self.board.validate_position(origin)?;
        let id = match self.board.piece_at(origin) {
            Some(id) => id,
            None => return Err(ChessError::IllegalOrigin(origin)),
        };
        if self.board.piece(id).color() != self.current_player {
            return Err(ChessError::IllegalOrigin(origin));
        }
        if !movegen::has_any_destination(&self.board, id, &self.context()) {
            return Err(ChessError::IllegalOrigin(origin));
        }
        Ok(id)
    }

    fn validate_destination(
        &self,
        id: PieceId,
        origin: Position,
        destination: Position,
    ) -> Result<(), ChessError> {
        self.board.validate_position(destination)?;
        let destinations = movegen::legal_destinations(&self.board, id, &self.context());
        if !destinations.contains(destination) {
            return Err(ChessError::IllegalDestination {
                from: origin,
                to: destination,
            });
        }
        Ok(())
    }

    /// Plays one full turn for the current player.
    ///
    /// On success returns the captured piece, if any. On failure nothing
    /// has changed: a move that would leave the mover's own king in check
    /// is played and fully taken back before `SelfCheck` is reported.
    pub fn play_turn(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> Result<Option<PieceId>, ChessError> {
        let mover = self.validate_origin(origin)?;
        self.validate_destination(mover, origin, destination)?;

        let captured = self.execute_move(origin, destination);
        match self.is_in_check(self.current_player) {
            Ok(false) => {}
            Ok(true) => {
                self.undo_move(origin, destination, captured);
                return Err(ChessError::SelfCheck);
            }
            Err(e) => {
                self.undo_move(origin, destination, captured);
                return Err(e);
            }
        }

        let mover_kind = self.board.piece(mover).kind();
        let mover_color = self.board.piece(mover).color();

        // A pawn that just advanced two rows is capturable en passant for
        // exactly one turn.
        if mover_kind == PieceKind::Pawn && (destination.row - origin.row).abs() == 2 {
            self.en_passant_target = Some(mover);
        } else {
            self.en_passant_target = None;
        }

        // A pawn on its last row becomes a queen on the spot.
        if mover_kind == PieceKind::Pawn
            && destination.row == mover_color.promotion_row(self.board.rows())
        {
            self.promote(mover, destination);
        }

        let opponent = self.current_player.other();
        self.in_check = self.is_in_check(opponent)?;

        if self.in_check && self.is_checkmate(opponent)? {
            // Turn and player freeze on the mating move; the winner is
            // whoever delivered it.
            self.terminated = true;
        } else {
            self.turn += 1;
            self.current_player = opponent;
        }
        Ok(captured)
    }

    /// Mechanically plays `origin -> destination`, returning the captured
    /// piece if any. No legality checks; `play_turn` runs them first. A
    /// piece must stand on `origin`.
    pub fn execute_move(&mut self, origin: Position, destination: Position) -> Option<PieceId> {
        let mover = self
            .board
            .remove(origin)
            .expect("no piece on origin square");
        self.board.piece_mut(mover).increment_moves();
        let mover_kind = self.board.piece(mover).kind();

        let mut captured = self.board.remove(destination);
        self.board
            .place(mover, destination)
            .expect("destination cleared before placing the mover");

        // Castling: the king travels two columns and drags its rook across.
        if mover_kind == PieceKind::King && (destination.col - origin.col).abs() == 2 {
            let (rook_from, rook_to) = if destination.col > origin.col {
                (origin.offset(0, 3), origin.offset(0, 1))
            } else {
                (origin.offset(0, -4), origin.offset(0, -1))
            };
            let rook = self
                .board
                .remove(rook_from)
                .expect("castling rook on its corner square");
            self.board.piece_mut(rook).increment_moves();
            self.board
                .place(rook, rook_to)
                .expect("castling rook lands beside the king");
        }

        // En passant: a pawn capturing onto an empty square takes the pawn
        // beside the destination, not on it.
        if mover_kind == PieceKind::Pawn && origin.col != destination.col && captured.is_none() {
            captured = self.board.remove(Position::new(origin.row, destination.col));
        }

        if let Some(id) = captured {
            self.captured.push(id);
        }
        captured
    }

    /// Exactly reverses an `execute_move`, given the piece it captured.
    pub fn undo_move(
        &mut self,
        origin: Position,
        destination: Position,
        captured: Option<PieceId>,
    ) {
        let mover = self
            .board
            .remove(destination)
            .expect("moved piece on the destination square");
        self.board.piece_mut(mover).decrement_moves();
        let mover_kind = self.board.piece(mover).kind();
        let mover_color = self.board.piece(mover).color();

        if let Some(id) = captured {
            self.board
                .place(id, destination)
                .expect("destination free for the captured piece");
            if let Some(i) = self.captured.iter().position(|&c| c == id) {
                self.captured.remove(i);
            }
        }
        self.board
            .place(mover, origin)
            .expect("origin square free when undoing");

        // Reverse the castling rook shuffle.
        if mover_kind == PieceKind::King && (destination.col - origin.col).abs() == 2 {
            let (rook_from, rook_to) = if destination.col > origin.col {
                (origin.offset(0, 3), origin.offset(0, 1))
            } else {
                (origin.offset(0, -4), origin.offset(0, -1))
            };
            let rook = self
                .board
                .remove(rook_to)
                .expect("castling rook beside the king");
            self.board.piece_mut(rook).decrement_moves();
            self.board
                .place(rook, rook_from)
                .expect("castling rook corner is empty");
        }

        // An en-passant victim was put back on the capture destination
        // above; move it to the square it actually occupied, beside it.
        if mover_kind == PieceKind::Pawn
            && origin.col != destination.col
            && captured.is_some()
            && captured == self.en_passant_target
        {
            let pawn = self
                .board
                .remove(destination)
                .expect("restored pawn on the destination square");
            self.board
                .place(
                    pawn,
                    Position::new(mover_color.en_passant_row(), destination.col),
                )
                .expect("en-passant victim square is empty");
        }
    }

    /// Whether `color`'s king is attacked by any enemy piece in play.
    pub fn is_in_check(&self, color: Color) -> Result<bool, ChessError> {
        let king_square = self
            .pieces_in_play(color)
            .into_iter()
            .find(|&id| self.board.piece(id).kind() == PieceKind::King)
            .and_then(|id| self.board.piece(id).position());
        let king_square = match king_square {
            Some(pos) => pos,
            None => return Err(ChessError::MissingKing(color)),
        };

        let ctx = self.context();
        for id in self.pieces_in_play(color.other()) {
            if movegen::legal_destinations(&self.board, id, &ctx).contains(king_square) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True when `color` is in check and no move of theirs escapes it.
    /// Every candidate is played on the live board and taken back.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, ChessError> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }
        for id in self.pieces_in_play(color) {
            let origin = match self.board.piece(id).position() {
                Some(pos) => pos,
                None => continue,
            };
            let destinations = movegen::legal_destinations(&self.board, id, &self.context());
            for destination in destinations.positions() {
                let captured = self.execute_move(origin, destination);
                let still_in_check = self.is_in_check(color);
                self.undo_move(origin, destination, captured);
                if !still_in_check? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Swaps a pawn that reached its last row for a fresh queen on the same
    /// square.
    fn promote(&mut self, pawn: PieceId, square: Position) {
        let color = self.board.piece(pawn).color();
        self.board
            .remove(square)
            .expect("promoting pawn on its square");
        let queen = self.board.add_piece(PieceKind::Queen, color);
        self.board
            .place(queen, square)
            .expect("promotion square was just cleared");
        self.all_pieces.retain(|&id| id != pawn);
        self.all_pieces.push(queen);
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        ChessMatch::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
