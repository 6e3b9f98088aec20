//! Randomized playout stress tests
//!
//! Many full games are played with randomly chosen legal moves, checking
//! after every turn that the match never drifts out of shape:
//! - each side keeps exactly one king in play
//! - pieces in play and captured pieces always account for all sixteen
//! - the board grid and the piece records agree square by square
//! - the check flag matches a fresh attack scan

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use chess_rules::{ChessError, ChessMatch, Color, PieceKind, Position};

const PLAYOUT_SEEDS: u64 = 32;
const PLAYOUT_TURNS: u32 = 120;

/// Every (origin, destination) pair the current player could try, shuffled.
/// Pairs that would expose the king are still included; `play_turn` is the
/// one that gets to refuse them.
fn candidate_moves(m: &ChessMatch, rng: &mut StdRng) -> Vec<(Position, Position)> {
    let mut candidates = Vec::new();
    for id in m.pieces_in_play(m.current_player()) {
        let origin = match m.board().piece(id).position() {
            Some(pos) => pos,
            None => continue,
        };
        if let Ok(destinations) = m.legal_destinations_from(origin) {
            for destination in destinations.positions() {
                candidates.push((origin, destination));
            }
        }
    }
    candidates.shuffle(rng);
    candidates
}

fn check_invariants(m: &ChessMatch) {
    for color in [Color::White, Color::Black] {
        let in_play = m.pieces_in_play(color);
        let captured = m.captured_pieces(color);
        assert_eq!(
            in_play.len() + captured.len(),
            16,
            "{} piece count drifted",
            color
        );

        let kings = in_play
            .iter()
            .filter(|&&id| m.board().piece(id).kind() == PieceKind::King)
            .count();
        assert_eq!(kings, 1, "{} must keep exactly one king in play", color);

        for id in in_play {
            let pos = m
                .board()
                .piece(id)
                .position()
                .expect("piece in play must stand on a square");
            assert_eq!(
                m.board().piece_at(pos),
                Some(id),
                "board grid and piece record disagree on {}",
                pos
            );
        }
        for id in captured {
            assert_eq!(
                m.board().piece(id).position(),
                None,
                "captured piece still on the board"
            );
        }
    }

    if !m.terminated() {
        assert_eq!(
            m.in_check(),
            m.is_in_check(m.current_player()).unwrap(),
            "check flag out of sync with the board"
        );
    }
}

/// Plays one random game, returning the match and how many turns it ran.
fn random_playout(seed: u64, max_turns: u32) -> (ChessMatch, u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = ChessMatch::new();
    let mut played = 0;

    'game: while played < max_turns && !m.terminated() {
        let candidates = candidate_moves(&m, &mut rng);
        for (origin, destination) in candidates {
            match m.play_turn(origin, destination) {
                Ok(_) => {
                    check_invariants(&m);
                    played += 1;
                    continue 'game;
                }
                Err(ChessError::SelfCheck) => continue,
                Err(e) => panic!("seed {}: move {} -> {} failed: {}", seed, origin, destination, e),
            }
        }
        // Every candidate walks into check; the game is stuck, stop here.
        break;
    }
    (m, played)
}

fn snapshot(m: &ChessMatch) -> Vec<(i8, i8, PieceKind, Color, u32)> {
    let mut out = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            if let Some(id) = m.board().piece_at(Position::new(row, col)) {
                let piece = m.board().piece(id);
                out.push((row, col, piece.kind(), piece.color(), piece.moves_made()));
            }
        }
    }
    out
}

#[test]
fn test_random_playouts_hold_invariants() {
    (0..PLAYOUT_SEEDS).into_par_iter().for_each(|seed| {
        let (m, played) = random_playout(seed, PLAYOUT_TURNS);
        check_invariants(&m);
        if m.terminated() {
            assert!(m.in_check(), "a terminated game ends on a check");
            assert!(m
                .is_in_check(m.current_player().other())
                .expect("both kings survive a playout"));
        }
        println!(
            "seed {:02}: {} turns, terminated={}",
            seed,
            played,
            m.terminated()
        );
    });
}

#[test]
fn test_playouts_are_deterministic() {
    let (a, played_a) = random_playout(7, 40);
    let (b, played_b) = random_playout(7, 40);

    assert_eq!(played_a, played_b);
    assert_eq!(snapshot(&a), snapshot(&b));
    assert_eq!(a.turn(), b.turn());
    assert_eq!(a.current_player(), b.current_player());
}

#[test]
fn test_opening_position_has_twenty_moves() {
    let m = ChessMatch::new();
    let mut total = 0;
    for id in m.pieces_in_play(Color::White) {
        let origin = m.board().piece(id).position().unwrap();
        if let Ok(destinations) = m.legal_destinations_from(origin) {
            total += destinations.len();
        }
    }
    // Sixteen pawn moves plus four knight hops.
    assert_eq!(total, 20);
}
