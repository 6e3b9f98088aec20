use thiserror::Error;

use crate::types::{Color, Position};

/// Errors surfaced by board and match operations.
///
/// Every gameplay variant leaves the match exactly as it was before the
/// failed call, so callers can report the message and ask again.
/// `MissingKing` is the exception: it means the position itself is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("position {0} is outside the board")]
    InvalidPosition(Position),

    #[error("square {0} is already occupied")]
    OccupiedSquare(Position),

    #[error("no playable piece on {0}")]
    IllegalOrigin(Position),

    #[error("the piece on {from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },

    #[error("that move would leave your own king in check")]
    SelfCheck,

    #[error("no {0} king on the board")]
    MissingKing(Color),
}
