use std::fmt;

use crate::agent::Agent;
use crate::board::{Board, Color, OthelloMove};
use crate::error::GameError;

/// One turn of a game: a placement, or a pass by a side with nothing to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Move(OthelloMove),
    Pass(Color),
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Move(mv) => write!(f, "{}", mv),
            Turn::Pass(_) => write!(f, "pass"),
        }
    }
}

/// Finished game: every turn played, the last position and who won.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub turns: Vec<Turn>,
    pub final_board: Board,
    pub winner: Option<Color>,
}

impl GameRecord {
    /// (black discs, white discs)
    pub fn score(&self) -> (u32, u32) {
        (
            self.final_board.count(Color::Black),
            self.final_board.count(Color::White),
        )
    }
}

/// Turn manager. Asks the side to move for a placement, passes for a side
/// that has none, and stops once neither side can move.
pub struct Game {
    board: Board,
    turns: Vec<Turn>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            turns: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Play one turn with `agent`, which must sit on the side to move.
    pub fn step(&mut self, agent: &mut dyn Agent) -> Result<Turn, GameError> {
        let side = self.board.side_to_move();
        if agent.side() != side {
            return Err(GameError::SeatMismatch {
                name: agent.name().to_string(),
                seat: side,
                got: agent.side(),
            });
        }

        let legal = self.board.legal_moves(side);
        let turn = if legal.is_empty() {
            self.board = self.board.pass();
            Turn::Pass(side)
        } else {
            let mv = agent.select_move(&self.board).ok_or_else(|| GameError::NoMove {
                name: agent.name().to_string(),
                legal: legal.len(),
            })?;
            self.board = self
                .board
                .try_move(mv)
                .map_err(|source| GameError::IllegalMove {
                    name: agent.name().to_string(),
                    source,
                })?;
            Turn::Move(mv)
        };

        log::debug!("{} ({}) -> {}", agent.name(), side, turn);
        self.turns.push(turn);
        Ok(turn)
    }

    /// Play until neither side can move.
    pub fn play(
        mut self,
        black: &mut dyn Agent,
        white: &mut dyn Agent,
    ) -> Result<GameRecord, GameError> {
        for (seat, agent) in [(Color::Black, &*black), (Color::White, &*white)] {
            if agent.side() != seat {
                return Err(GameError::SeatMismatch {
                    name: agent.name().to_string(),
                    seat,
                    got: agent.side(),
                });
            }
        }

        while !self.is_over() {
            match self.board.side_to_move() {
                Color::Black => self.step(black)?,
                Color::White => self.step(white)?,
            };
        }

        let winner = self.board.winner();
        let record = GameRecord {
            turns: self.turns,
            final_board: self.board,
            winner,
        };
        let (b, w) = record.score();
        log::info!(
            "game over after {} turns: {} {} - {} {}",
            record.turns.len(),
            black.name(),
            b,
            w,
            white.name()
        );
        Ok(record)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
