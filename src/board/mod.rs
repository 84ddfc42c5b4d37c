mod bitboard;
#[allow(clippy::module_inception)]
mod board;
mod color;
mod movegen;
mod othellomove;
mod perft;
mod square;

pub use bitboard::{BitBoard, Direction, EMPTY};
pub use board::Board;
pub use color::Color;
pub use movegen::{flips, legal_targets, MoveGen};
pub use othellomove::OthelloMove;
pub use perft::perft;
pub use square::{Square, ALL_SQUARES};
