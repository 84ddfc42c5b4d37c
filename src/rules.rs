use crate::board::{Board, Color, OthelloMove};
use crate::types::{MoveList, Score};

pub trait Rules {
    type State;
    type Move: Copy;

    /// Legal moves for `side`, in the order the search must visit them.
    /// Empty when `side` cannot move. At most `MAX_MOVES` (64) moves fit in a
    /// `MoveList`; games with wider positions overflow it.
    fn legal_moves(&self, state: &Self::State, side: Color) -> MoveList<Self::Move>;

    /// Position after `mv`. Must leave `state` untouched.
    fn apply(&self, state: &Self::State, mv: Self::Move) -> Self::State;
}

pub trait Evaluator<S> {
    /// Static score of `state`, higher is better for `perspective`. Must be
    /// defined for every reachable state, finished games included.
    fn evaluate(&self, state: &S, perspective: Color) -> Score;
}

/// Othello move generation and move application on [`Board`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OthelloRules;

impl Rules for OthelloRules {
    type State = Board;
    type Move = OthelloMove;

    fn legal_moves(&self, state: &Board, side: Color) -> MoveList<OthelloMove> {
        state.legal_moves(side)
    }

    fn apply(&self, state: &Board, mv: OthelloMove) -> Board {
        state.make_move_new(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ALL_SQUARES;
    use crate::types::MAX_MOVES;

    #[test]
    fn test_othello_rules_follow_board() {
        let board = Board::default();
        let rules = OthelloRules;
        let moves = rules.legal_moves(&board, Color::Black);
        assert_eq!(moves.len(), 4);
        let child = rules.apply(&board, moves[0]);
        assert_eq!(child, board.make_move_new(moves[0]));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_move_list_fits_every_square() {
        let moves = OthelloRules.legal_moves(&Board::default(), Color::Black);
        assert_eq!(moves.capacity(), MAX_MOVES);
        assert_eq!(MAX_MOVES, ALL_SQUARES.len());
    }

    #[test]
    fn test_othello_rules_ignore_side_to_move() {
        // the search alternates sides itself, so white gets moves on a black-to-move board
        let board = Board::default();
        assert_eq!(OthelloRules.legal_moves(&board, Color::White).len(), 4);
    }
}

// The search never looks inside a state or a move. It asks `Rules` for ordered legal moves and
// derived states, and an `Evaluator` for static scores, so any two-player game can plug in.
