pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod square_set;
pub mod types;

// Re-export the whole playing surface (board, match driver, move rules)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use square_set::*;
pub use types::*;
