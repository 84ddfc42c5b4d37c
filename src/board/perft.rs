use super::board::Board;

/// Count leaf positions `depth` plies below `board`.
///
/// A side with no placement passes, and the pass uses up one ply. A finished
/// game counts as a single leaf no matter how much depth remains.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = board.side_to_move();
    let moves = board.legal_moves(side);

    if moves.is_empty() {
        if !board.has_legal_move(!side) {
            return 1;
        }
        return perft(&board.pass(), depth - 1);
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&board.make_move_new(mv), depth - 1))
        .sum()
}
