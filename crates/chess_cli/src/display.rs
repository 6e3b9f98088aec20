//! Terminal rendering: the board grid, captures, and game status

use chess_rules::{ChessMatch, Color, PieceKind, Position, SquareSet};

use crate::config::DisplayConfig;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";
const RESET: &str = "\x1b[0m";
const BLACK_PIECES: &str = "\x1b[33m";
const HIGHLIGHT: &str = "\x1b[100m";

pub struct Renderer {
    config: DisplayConfig,
}

impl Renderer {
    pub fn new(config: DisplayConfig) -> Self {
        Renderer { config }
    }

    pub fn clear_screen(&self) {
        if self.config.clear_screen {
            print!("{}", CLEAR_SCREEN);
        }
    }

    /// Board, captures, and whose turn it is.
    pub fn render_match(&self, m: &ChessMatch) {
        self.render_board(m, None);
        println!("Taken from White: {}", self.captured_line(m, Color::White));
        println!("Taken from Black: {}", self.captured_line(m, Color::Black));
        println!();
        let check = if m.in_check() { " (in check)" } else { "" };
        println!("Turn {}: {} to move{}", m.turn(), m.current_player(), check);
        println!();
    }

    /// Board only, optionally with a destination set marked on it.
    pub fn render_board(&self, m: &ChessMatch, highlights: Option<&SquareSet>) {
        for line in self.board_lines(m, highlights) {
            println!("{}", line);
        }
    }

    fn board_lines(&self, m: &ChessMatch, highlights: Option<&SquareSet>) -> Vec<String> {
        let mut lines = Vec::with_capacity(10);
        for row in 0..8 {
            let mut line = format!("{} ", 8 - row);
            for col in 0..8 {
                let pos = Position::new(row, col);
                let marked = highlights.map_or(false, |h| h.contains(pos));
                line.push(' ');
                line.push_str(&self.cell(m, pos, marked));
            }
            lines.push(line);
        }
        lines.push(String::new());
        lines.push("   a b c d e f g h".to_string());
        lines
    }

    fn cell(&self, m: &ChessMatch, pos: Position, marked: bool) -> String {
        let drawn = match m.board().piece_at(pos) {
            Some(id) => {
                let piece = m.board().piece(id);
                let ch = glyph(piece.kind(), piece.color(), self.config.unicode_pieces);
                if self.config.color && piece.color() == Color::Black {
                    format!("{}{}{}", BLACK_PIECES, ch, RESET)
                } else {
                    ch.to_string()
                }
            }
            None if marked && !self.config.color => "*".to_string(),
            None => "-".to_string(),
        };
        if marked && self.config.color {
            format!("{}{}{}", HIGHLIGHT, drawn, RESET)
        } else {
            drawn
        }
    }

    fn captured_line(&self, m: &ChessMatch, color: Color) -> String {
        let glyphs: Vec<String> = m
            .captured_pieces(color)
            .iter()
            .map(|&id| {
                glyph(m.board().piece(id).kind(), color, self.config.unicode_pieces).to_string()
            })
            .collect();
        format!("[{}]", glyphs.join(" "))
    }
}

/// Piece symbol: unicode chess glyphs, or letters with lowercase for Black.
fn glyph(kind: PieceKind, color: Color, unicode: bool) -> char {
    if unicode {
        match (color, kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    } else {
        let ch = match kind {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        };
        match color {
            Color::White => ch,
            Color::Black => ch.to_ascii_lowercase(),
        }
    }
}
