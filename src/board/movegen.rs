use super::bitboard::{BitBoard, BitBoardIter, Direction, EMPTY};
use super::board::Board;
use super::color::Color;
use super::othellomove::OthelloMove;
use super::square::Square;

/// Squares where `own` may place a disc: empty, and closing at least one line
/// of `opp` discs against an `own` disc.
pub fn legal_targets(own: BitBoard, opp: BitBoard) -> BitBoard {
    let empty = !(own | opp);
    let mut targets = EMPTY;

    for dir in Direction::ALL {
        // a line holds at most six opponent discs between two squares
        let mut run = own.shift(dir) & opp;
        for _ in 0..5 {
            run |= run.shift(dir) & opp;
        }
        targets |= run.shift(dir) & empty;
    }

    targets
}

/// Discs of `opp` that flip when `own` places on `sq`. Empty if the placement is illegal.
pub fn flips(own: BitBoard, opp: BitBoard, sq: Square) -> BitBoard {
    let origin = BitBoard::from_square(sq);
    let mut flipped = EMPTY;

    for dir in Direction::ALL {
        let mut line = EMPTY;
        let mut cursor = origin.shift(dir);
        while !(cursor & opp).is_empty() {
            line |= cursor;
            cursor = cursor.shift(dir);
        }
        if !(cursor & own).is_empty() {
            flipped |= line;
        }
    }

    flipped
}

/// Legal move generator. Yields placements in ascending square order (a1 first).
pub struct MoveGen {
    targets: BitBoardIter,
    color: Color,
}

impl MoveGen {
    /// generate all legal placements for `color` on `board`
    pub fn new_legal(board: &Board, color: Color) -> Self {
        let targets = legal_targets(board.discs(color), board.discs(!color));
        MoveGen {
            targets: targets.iter(),
            color,
        }
    }
}

impl Iterator for MoveGen {
    type Item = OthelloMove;

    #[inline]
    fn next(&mut self) -> Option<OthelloMove> {
        self.targets.next().map(|sq| OthelloMove::new(sq, self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(moves: impl Iterator<Item = OthelloMove>) -> Vec<String> {
        moves.map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_startpos_black_moves() {
        let board = Board::default();
        assert_eq!(names(MoveGen::new_legal(&board, Color::Black)), ["d3", "c4", "f5", "e6"]);
    }

    #[test]
    fn test_startpos_white_moves() {
        let board = Board::default();
        assert_eq!(names(MoveGen::new_legal(&board, Color::White)), ["e3", "f4", "c5", "d6"]);
    }

    #[test]
    fn test_flips_single_line() {
        let board = Board::default();
        let d3: Square = "d3".parse().unwrap();
        let flipped = flips(board.discs(Color::Black), board.discs(Color::White), d3);
        let squares: Vec<String> = flipped.iter().map(|s| s.to_string()).collect();
        assert_eq!(squares, ["d4"]);
    }

    #[test]
    fn test_flips_illegal_is_empty() {
        let board = Board::default();
        let a1 = Square::new(0);
        assert!(flips(board.discs(Color::Black), board.discs(Color::White), a1).is_empty());
    }

    #[test]
    fn test_flips_multiple_directions() {
        // black to a1 closes lines east, north and north-east at once
        let board: Board = concat!(
            "-OX-----",
            "OO------",
            "X-X-----",
            "--------",
            "--------",
            "--------",
            "--------",
            "-------- X"
        )
        .parse()
        .unwrap();
        let flipped = flips(board.discs(Color::Black), board.discs(Color::White), Square::new(0));
        let mut squares: Vec<String> = flipped.iter().map(|s| s.to_string()).collect();
        squares.sort();
        assert_eq!(squares, ["a2", "b1", "b2"]);
    }

    #[test]
    fn test_line_needs_anchor() {
        // black can close b1 from c1, white has nothing on the far side of a1
        let board: Board = concat!(
            "XO------",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "-------- X"
        )
        .parse()
        .unwrap();
        assert_eq!(names(MoveGen::new_legal(&board, Color::Black)), ["c1"]);
        assert_eq!(MoveGen::new_legal(&board, Color::White).count(), 0);
    }
}

// Move generation is a dumb7fill: from every own disc, slide through contiguous opponent discs
// in each direction, and an empty square just past such a run is a legal placement.
