//! Complete games driven through the public turn API
//!
//! Each test plays a real game move by move and checks the end state:
//! - Fool's mate (fastest possible checkmate)
//! - Scholar's mate (queen and bishop against f7)
//! - Both sides castling in one game
//! - An en passant capture out of the opening

use chess_rules::{parse_square, ChessError, ChessMatch, Color, PieceKind, Position};

fn sq(name: &str) -> Position {
    parse_square(name).unwrap_or_else(|| panic!("bad square name '{}'", name))
}

/// Plays moves given as "e2e4"-style origin/destination pairs.
fn play(m: &mut ChessMatch, moves: &[&str]) {
    for mv in moves {
        let origin = sq(&mv[..2]);
        let destination = sq(&mv[2..]);
        m.play_turn(origin, destination)
            .unwrap_or_else(|e| panic!("move '{}' rejected: {}", mv, e));
    }
}

fn kind_at(m: &ChessMatch, name: &str) -> Option<(PieceKind, Color)> {
    m.board().piece_at(sq(name)).map(|id| {
        let piece = m.board().piece(id);
        (piece.kind(), piece.color())
    })
}

// =============================================================================
// Checkmate Games
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut m = ChessMatch::new();
    play(&mut m, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(m.terminated(), "queen to h4 is checkmate");
    assert!(m.in_check());
    // The match freezes on the mating move: Black delivered it and wins.
    assert_eq!(m.current_player(), Color::Black);
    assert_eq!(m.turn(), 4);
    assert_eq!(kind_at(&m, "h4"), Some((PieceKind::Queen, Color::Black)));
}

#[test]
fn test_scholars_mate() {
    let mut m = ChessMatch::new();
    play(
        &mut m,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert!(m.terminated(), "queen takes f7 is checkmate");
    assert!(m.in_check());
    assert_eq!(m.current_player(), Color::White);
    assert_eq!(m.turn(), 7);
    assert_eq!(kind_at(&m, "f7"), Some((PieceKind::Queen, Color::White)));
    // The f7 pawn is the only capture of the game.
    assert_eq!(m.captured_pieces(Color::Black).len(), 1);
    assert!(m.captured_pieces(Color::White).is_empty());
}

#[test]
fn test_check_cleared_by_blocking_piece() {
    let mut m = ChessMatch::new();
    play(&mut m, &["d2d4", "e7e6", "h2h3", "f8b4"]);

    assert!(m.in_check(), "the bishop on b4 checks along the open diagonal");
    assert!(!m.terminated(), "the check can still be blocked");
    assert_eq!(m.current_player(), Color::White);

    // A reply that ignores the check is rejected outright.
    let err = m.play_turn(sq("a2"), sq("a3")).unwrap_err();
    assert_eq!(err, ChessError::SelfCheck);

    play(&mut m, &["c2c3"]);
    assert!(!m.in_check());
    assert_eq!(m.current_player(), Color::Black);
}

// =============================================================================
// Special Moves
// =============================================================================

#[test]
fn test_both_sides_castle_short() {
    let mut m = ChessMatch::new();
    play(
        &mut m,
        &[
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f8e7", "d2d3", "e8g8",
        ],
    );

    assert_eq!(kind_at(&m, "g1"), Some((PieceKind::King, Color::White)));
    assert_eq!(kind_at(&m, "f1"), Some((PieceKind::Rook, Color::White)));
    assert_eq!(kind_at(&m, "g8"), Some((PieceKind::King, Color::Black)));
    assert_eq!(kind_at(&m, "f8"), Some((PieceKind::Rook, Color::Black)));
    assert_eq!(kind_at(&m, "e1"), None);
    assert_eq!(kind_at(&m, "h1"), None);
    assert_eq!(kind_at(&m, "e8"), None);
    assert_eq!(kind_at(&m, "h8"), None);

    assert_eq!(m.turn(), 11);
    assert_eq!(m.current_player(), Color::White);
    assert!(!m.in_check());
    assert!(!m.terminated());
}

#[test]
fn test_castling_rights_lost_after_king_moves() {
    let mut m = ChessMatch::new();
    // White clears the short side, shuffles the king, and returns it home.
    play(
        &mut m,
        &[
            "g1f3", "a7a6", "g2g3", "b7b6", "f1g2", "c7c6", "e1f1", "d7d6", "f1e1", "e7e6",
        ],
    );

    let destinations = m.legal_destinations_from(sq("e1")).unwrap();
    assert!(
        !destinations.contains(sq("g1")),
        "a king that has moved can never castle"
    );
}

#[test]
fn test_en_passant_in_a_real_opening() {
    let mut m = ChessMatch::new();
    play(&mut m, &["e2e4", "a7a6", "e4e5", "d7d5"]);

    // The d-pawn just double-stepped past e5; take it in passing.
    let victim = m.board().piece_at(sq("d5")).unwrap();
    assert_eq!(m.en_passant_target(), Some(victim));

    play(&mut m, &["e5d6"]);

    assert_eq!(kind_at(&m, "d6"), Some((PieceKind::Pawn, Color::White)));
    assert_eq!(kind_at(&m, "d5"), None, "the bypassed pawn is gone");
    assert_eq!(m.captured_pieces(Color::Black), vec![victim]);
    assert_eq!(m.pieces_in_play(Color::Black).len(), 15);
    assert_eq!(m.en_passant_target(), None);
}

#[test]
fn test_en_passant_refused_one_turn_later() {
    let mut m = ChessMatch::new();
    play(&mut m, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);

    // White let the moment pass; d5 can no longer be taken in passing.
    let err = m.play_turn(sq("e5"), sq("d6")).unwrap_err();
    assert_eq!(
        err,
        ChessError::IllegalDestination {
            from: sq("e5"),
            to: sq("d6"),
        }
    );
}
