use thiserror::Error;

use crate::board::{Color, Square};

/// Errors produced while parsing squares, moves and board strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("invalid side `{0}`, expected X or O")]
    InvalidSide(String),

    #[error("board string needs 64 cells, got {0}")]
    BoardLength(usize),

    #[error("invalid cell character `{0}`")]
    InvalidCell(char),

    #[error("board string is missing the side to move")]
    MissingSide,
}

/// Errors produced when a move cannot be played on a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("{color:?} cannot play {square}: nothing to flip")]
    Illegal { square: Square, color: Color },

    #[error("it is {expected:?}'s turn, not {got:?}'s")]
    WrongSide { expected: Color, got: Color },

    #[error("{0:?} cannot pass while holding a legal move")]
    IllegalPass(Color),
}

/// Errors that end a game between two agents early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{name} plays {got:?} but sits in the {seat:?} seat")]
    SeatMismatch { name: String, seat: Color, got: Color },

    #[error("{name} returned no move with {legal} legal moves available")]
    NoMove { name: String, legal: usize },

    #[error("{name} played an illegal move: {source}")]
    IllegalMove {
        name: String,
        #[source]
        source: MoveError,
    },
}

/// Errors raised while interpreting a protocol command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Syntax(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
