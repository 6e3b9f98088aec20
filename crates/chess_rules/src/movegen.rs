use crate::board::Board;
use crate::square_set::SquareSet;
use crate::types::*;

/// Match-level facts the movement rules read: the pawn capturable en
/// passant this turn, and whether the side to move stands in check (which
/// rules castling out).
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchContext {
    pub en_passant_target: Option<PieceId>,
    pub in_check: bool,
}

/// Squares `id` could move to, ignoring whether the move would leave its
/// own king in check. That filter belongs to the match, which plays the
/// move and takes it back.
pub fn legal_destinations(board: &Board, id: PieceId, ctx: &MatchContext) -> SquareSet {
    let mut out = SquareSet::new(board.rows(), board.cols());
    let piece = board.piece(id);
    let from = match piece.position() {
        Some(pos) => pos,
        None => return out, // captured pieces go nowhere
    };

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece, from, ctx, &mut out),
        PieceKind::Knight => gen_knight(board, from, piece.color(), &mut out),
        PieceKind::Bishop => gen_slider(
            board,
            from,
            piece.color(),
            &mut out,
            &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
        ),
        PieceKind::Rook => gen_slider(
            board,
            from,
            piece.color(),
            &mut out,
            &[(1, 0), (-1, 0), (0, 1), (0, -1)],
        ),
        PieceKind::Queen => gen_slider(
            board,
            from,
            piece.color(),
            &mut out,
            &[
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
            ],
        ),
        PieceKind::King => {
            gen_king(board, from, piece.color(), &mut out);
            gen_castle(board, piece, from, ctx, &mut out);
        }
    }
    out
}

/// Whether `id` has at least one destination at all.
pub fn has_any_destination(board: &Board, id: PieceId, ctx: &MatchContext) -> bool {
    !legal_destinations(board, id, ctx).is_empty()
}

/// A square can be entered when it is on the board and not blocked by a
/// friendly piece.
fn can_enter(board: &Board, pos: Position, c: Color) -> bool {
    if !board.is_inside(pos) {
        return false;
    }
    match board.piece_at(pos) {
        None => true,
        Some(id) => board.piece(id).color() != c,
    }
}

fn free_square(board: &Board, pos: Position) -> bool {
    board.is_inside(pos) && board.piece_at(pos).is_none()
}

fn enemy_at(board: &Board, pos: Position, c: Color) -> bool {
    match board.piece_at(pos) {
        Some(id) => board.piece(id).color() != c,
        None => false,
    }
}

fn gen_pawn(board: &Board, piece: &Piece, from: Position, ctx: &MatchContext, out: &mut SquareSet) {
    let c = piece.color();
    let dir = c.forward();

    // Forward one square, and two on the pawn's first move.
    let one = from.offset(dir, 0);
    if free_square(board, one) {
        out.insert(one);
        let two = from.offset(2 * dir, 0);
        if !piece.has_moved() && free_square(board, two) {
            out.insert(two);
        }
    }

    // Diagonal captures.
    for dc in [-1, 1] {
        let to = from.offset(dir, dc);
        if enemy_at(board, to, c) {
            out.insert(to);
        }
    }

    // En passant: beside an enemy pawn that just advanced two squares, the
    // capture lands on the square behind it.
    if let Some(target) = ctx.en_passant_target {
        if from.row == c.en_passant_row() {
            for dc in [-1, 1] {
                let side = from.offset(0, dc);
                if enemy_at(board, side, c) && board.piece_at(side) == Some(target) {
                    out.insert(side.offset(dir, 0));
                }
            }
        }
    }
}

fn gen_knight(board: &Board, from: Position, c: Color, out: &mut SquareSet) {
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (dr, dc) in deltas {
        let to = from.offset(dr, dc);
        if can_enter(board, to, c) {
            out.insert(to);
        }
    }
}

fn gen_slider(board: &Board, from: Position, c: Color, out: &mut SquareSet, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut to = from.offset(dr, dc);
        while board.is_inside(to) {
            match board.piece_at(to) {
                None => out.insert(to),
                Some(id) if board.piece(id).color() != c => {
                    // A blocked ray still reaches the blocker when it is an
                    // enemy piece.
                    out.insert(to);
                    break;
                }
                _ => break,
            }
            to = to.offset(dr, dc);
        }
    }
}

fn gen_king(board: &Board, from: Position, c: Color, out: &mut SquareSet) {
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (dr, dc) in deltas {
        let to = from.offset(dr, dc);
        if can_enter(board, to, c) {
            out.insert(to);
        }
    }
}

fn gen_castle(
    board: &Board,
    piece: &Piece,
    from: Position,
    ctx: &MatchContext,
    out: &mut SquareSet,
) {
    // An unmoved king that is not currently in check may castle. The
    // squares the king crosses are not tested for enemy attack.
    if piece.has_moved() || ctx.in_check {
        return;
    }
    let c = piece.color();

    // Short side: rook three columns over, two empty squares between.
    if castling_rook_ready(board, from.offset(0, 3), c)
        && free_square(board, from.offset(0, 1))
        && free_square(board, from.offset(0, 2))
    {
        out.insert(from.offset(0, 2));
    }

    // Long side: rook four columns over, three empty squares between.
    if castling_rook_ready(board, from.offset(0, -4), c)
        && free_square(board, from.offset(0, -1))
        && free_square(board, from.offset(0, -2))
        && free_square(board, from.offset(0, -3))
    {
        out.insert(from.offset(0, -2));
    }
}

/// An unmoved rook of our color stands on `pos`.
fn castling_rook_ready(board: &Board, pos: Position, c: Color) -> bool {
    match board.piece_at(pos) {
        Some(id) => {
            let p = board.piece(id);
            p.kind() == PieceKind::Rook && p.color() == c && !p.has_moved()
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
