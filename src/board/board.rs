use std::fmt;
use std::str::FromStr;

use super::bitboard::{BitBoard, EMPTY};
use super::color::Color;
use super::movegen::{flips, legal_targets, MoveGen};
use super::othellomove::OthelloMove;
use super::square::{Square, ALL_SQUARES};
use crate::error::{MoveError, ParseError};
use crate::types::MoveList;

/// The board representation. Copy
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    discs: [BitBoard; 2], // per color
    side_to_move: Color,
}

impl Board {
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn discs(&self, color: Color) -> BitBoard {
        self.discs[color.to_index()]
    }

    pub fn occupied(&self) -> BitBoard {
        self.discs[0] | self.discs[1]
    }

    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self.discs(c).contains(sq))
    }

    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).popcnt()
    }

    pub fn empty_count(&self) -> u32 {
        64 - self.occupied().popcnt()
    }

    /// Legal placements for `color`, in ascending square order.
    pub fn legal_moves(&self, color: Color) -> MoveList<OthelloMove> {
        MoveGen::new_legal(self, color).collect()
    }

    pub fn mobility(&self, color: Color) -> u32 {
        legal_targets(self.discs(color), self.discs(!color)).popcnt()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        !legal_targets(self.discs(color), self.discs(!color)).is_empty()
    }

    /// Check if move is legal in the current position (for its own color, ignoring turn)
    pub fn is_legal(&self, mv: OthelloMove) -> bool {
        legal_targets(self.discs(mv.color()), self.discs(!mv.color())).contains(mv.square())
    }

    /// Discs that would flip if `color` placed on `sq`.
    pub fn flips(&self, color: Color, sq: Square) -> BitBoard {
        if self.occupied().contains(sq) {
            return EMPTY;
        }
        flips(self.discs(color), self.discs(!color), sq)
    }

    /// The game is over once neither side can place a disc.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    /// Color with more discs, `None` on equal counts. Meaningful once the game is over.
    pub fn winner(&self) -> Option<Color> {
        let black = self.count(Color::Black);
        let white = self.count(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Make move and return resulting board. Does not validate legality
    ///
    /// Places the disc, flips every bracketed opponent disc, and hands the turn
    /// to the opponent of the mover. The opponent may have no reply; passing is
    /// left to the caller.
    pub fn make_move_new(&self, mv: OthelloMove) -> Board {
        let us = mv.color();
        let them = !us;
        let placed = BitBoard::from_square(mv.square());
        let flipped = flips(self.discs(us), self.discs(them), mv.square());

        let mut b = *self;
        b.discs[us.to_index()] |= placed | flipped;
        b.discs[them.to_index()] ^= flipped;
        b.side_to_move = them;
        b
    }

    /// Validated version of `make_move_new`: the move must be for the side to
    /// move and must flip at least one disc.
    pub fn try_move(&self, mv: OthelloMove) -> Result<Board, MoveError> {
        if mv.color() != self.side_to_move {
            return Err(MoveError::WrongSide {
                expected: self.side_to_move,
                got: mv.color(),
            });
        }
        if self.occupied().contains(mv.square()) {
            return Err(MoveError::Occupied(mv.square()));
        }
        if !self.is_legal(mv) {
            return Err(MoveError::Illegal {
                square: mv.square(),
                color: mv.color(),
            });
        }
        Ok(self.make_move_new(mv))
    }

    /// Hand the turn over without placing a disc. Does not validate.
    pub fn pass(&self) -> Board {
        let mut b = *self;
        b.side_to_move = !self.side_to_move;
        b
    }

    /// Validated pass: only allowed when the side to move has no placement.
    pub fn try_pass(&self) -> Result<Board, MoveError> {
        if self.has_legal_move(self.side_to_move) {
            return Err(MoveError::IllegalPass(self.side_to_move));
        }
        Ok(self.pass())
    }

    /// Compact text form: 64 cells a1..h8 (`X`, `O`, `-`), a space, and the side to move.
    pub fn to_board_string(&self) -> String {
        let mut s: String = ALL_SQUARES
            .iter()
            .map(|&sq| self.color_on(sq).map_or('-', Color::to_char))
            .collect();
        s.push(' ');
        s.push(self.side_to_move.to_char());
        s
    }
}

impl Default for Board {
    /// Standard opening: d4/e5 white, d5/e4 black, black to move.
    fn default() -> Self {
        let sq = |row, col| BitBoard::from_square(Square::make_square(row, col));
        Board {
            discs: [sq(3, 4) | sq(4, 3), sq(3, 3) | sq(4, 4)],
            side_to_move: Color::Black,
        }
    }
}

// --- board string parsing ---

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut parts = s.split_whitespace();
        let cells = parts.next().unwrap_or("");
        let count = cells.chars().count();
        if count != 64 {
            return Err(ParseError::BoardLength(count));
        }

        let mut discs = [EMPTY; 2];
        for (sq, ch) in ALL_SQUARES.iter().zip(cells.chars()) {
            match ch {
                'X' | 'x' | '*' => discs[Color::Black.to_index()] |= BitBoard::from_square(*sq),
                'O' | 'o' => discs[Color::White.to_index()] |= BitBoard::from_square(*sq),
                '-' | '.' => {}
                other => return Err(ParseError::InvalidCell(other)),
            }
        }

        let side_to_move = parts.next().ok_or(ParseError::MissingSide)?.parse()?;

        Ok(Board { discs, side_to_move })
    }
}

// --- grid output (Display) ---

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8 {
            write!(f, "{}", row + 1)?;
            for col in 0..8 {
                let ch = self
                    .color_on(Square::make_square(row, col))
                    .map_or('-', Color::to_char);
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "X: {}  O: {}  to move: {}",
            self.count(Color::Black),
            self.count(Color::White),
            self.side_to_move.to_char()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str, color: Color) -> OthelloMove {
        OthelloMove::new(s.parse().unwrap(), color)
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.color_on("d4".parse().unwrap()), Some(Color::White));
        assert_eq!(board.color_on("e4".parse().unwrap()), Some(Color::Black));
    }

    #[test]
    fn test_board_string_roundtrip_startpos() {
        let board = Board::default();
        let s = board.to_board_string();
        assert_eq!(
            s,
            "---------------------------OX------XO--------------------------- X"
        );
        assert_eq!(s.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO X".parse::<Board>(), Err(ParseError::BoardLength(2)));
        let bad_cell = format!("{}? X", "-".repeat(63));
        assert_eq!(bad_cell.parse::<Board>(), Err(ParseError::InvalidCell('?')));
        assert_eq!("-".repeat(64).parse::<Board>(), Err(ParseError::MissingSide));
    }

    #[test]
    fn test_make_move_flips() {
        let board = Board::default().make_move_new(mv("d3", Color::Black));
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
        assert_eq!(board.color_on("d4".parse().unwrap()), Some(Color::Black));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_make_move_does_not_touch_parent() {
        let parent = Board::default();
        let _child = parent.make_move_new(mv("d3", Color::Black));
        assert_eq!(parent, Board::default());
    }

    #[test]
    fn test_try_move_rejects_bad_moves() {
        let board = Board::default();
        assert_eq!(
            board.try_move(mv("e3", Color::White)),
            Err(MoveError::WrongSide { expected: Color::Black, got: Color::White })
        );
        assert_eq!(
            board.try_move(mv("d4", Color::Black)),
            Err(MoveError::Occupied("d4".parse().unwrap()))
        );
        assert_eq!(
            board.try_move(mv("a1", Color::Black)),
            Err(MoveError::Illegal { square: Square::new(0), color: Color::Black })
        );
        assert!(board.try_move(mv("c4", Color::Black)).is_ok());
    }

    #[test]
    fn test_try_pass() {
        let board = Board::default();
        assert_eq!(board.try_pass(), Err(MoveError::IllegalPass(Color::Black)));

        // black has no discs left to anchor a line
        let stuck: Board = format!("O{} X", "-".repeat(63)).parse().unwrap();
        let passed = stuck.try_pass().unwrap();
        assert_eq!(passed.side_to_move(), Color::White);
    }

    #[test]
    fn test_game_over_and_winner() {
        let board: Board = format!("{}{} O", "X".repeat(40), "O".repeat(24)).parse().unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Color::Black));

        let drawn: Board = format!("{}{} X", "X".repeat(32), "O".repeat(32)).parse().unwrap();
        assert!(drawn.is_game_over());
        assert_eq!(drawn.winner(), None);

        assert!(!Board::default().is_game_over());
    }

    #[test]
    fn test_flips_on_occupied_square() {
        let board = Board::default();
        assert!(board.flips(Color::Black, "d4".parse().unwrap()).is_empty());
        assert_eq!(board.flips(Color::Black, "d3".parse().unwrap()).popcnt(), 1);
    }

    #[test]
    fn test_display_grid() {
        let text = Board::default().to_string();
        assert!(text.starts_with("  a b c d e f g h\n"));
        assert!(text.contains("4 - - - O X - - -"));
        assert!(text.ends_with("X: 2  O: 2  to move: X"));
    }
}
