use crate::board::{BitBoard, Board, Color};
use crate::rules::Evaluator;
use crate::types::{Score, WIN_SCORE};

/// Static weight of owning each square, indexed a1..h8.
/// Corners are stable, the squares touching them hand corners to the opponent.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [Score; 64] = [
    100.0, -20.0, 10.0,  5.0,  5.0, 10.0, -20.0, 100.0,
    -20.0, -50.0, -2.0, -2.0, -2.0, -2.0, -50.0, -20.0,
     10.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,  10.0,
      5.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,   5.0,
      5.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,   5.0,
     10.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,  10.0,
    -20.0, -50.0, -2.0, -2.0, -2.0, -2.0, -50.0, -20.0,
    100.0, -20.0, 10.0,  5.0,  5.0, 10.0, -20.0, 100.0,
];

pub const MOBILITY_WEIGHT: Score = 5.0;
pub const CORNER_WEIGHT: Score = 25.0;
pub const PARITY_WEIGHT: Score = 10.0;
/// from this many empty squares on, raw disc count starts to matter
pub const ENDGAME_EMPTIES: u32 = 14;

/// Positional + mobility heuristic for Othello.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl Evaluator<Board> for Heuristic {
    fn evaluate(&self, state: &Board, perspective: Color) -> Score {
        evaluate(state, perspective)
    }
}

fn weighted(discs: BitBoard) -> Score {
    discs.iter().map(|sq| SQUARE_WEIGHTS[sq.to_index()]).sum()
}

fn corners(discs: BitBoard) -> Score {
    discs.iter().filter(|sq| sq.is_corner()).count() as Score
}

/// Evaluates board from the perspective of `perspective`, regardless of side to move.
/// Finished games score beyond any heuristic value.
pub fn evaluate(board: &Board, perspective: Color) -> Score {
    let own = board.discs(perspective);
    let opp = board.discs(!perspective);
    let disc_diff = own.popcnt() as Score - opp.popcnt() as Score;

    let own_mobility = board.mobility(perspective);
    let opp_mobility = board.mobility(!perspective);

    if own_mobility == 0 && opp_mobility == 0 {
        return if disc_diff > 0.0 {
            WIN_SCORE + disc_diff
        } else if disc_diff < 0.0 {
            -WIN_SCORE + disc_diff
        } else {
            0.0
        };
    }

    let positional = weighted(own) - weighted(opp);
    let mobility = MOBILITY_WEIGHT * (own_mobility as Score - opp_mobility as Score);
    let corner_diff = CORNER_WEIGHT * (corners(own) - corners(opp));
    let parity = if board.empty_count() <= ENDGAME_EMPTIES {
        PARITY_WEIGHT * disc_diff
    } else {
        0.0
    };

    positional + mobility + corner_diff + parity
}
