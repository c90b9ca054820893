//! One-ply successor enumeration for the search.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::legal_move_apply::MoveReport;
use crate::move_generation::legal_move_generator::generate_piece_moves;

/// A board reached by exactly one legal move, with the move that produced it.
#[derive(Debug, Clone)]
pub struct Successor {
    pub report: MoveReport,
    pub board: Board,
}

/// Every board reachable by one move of `side`: pieces in row-major order,
/// destinations in generation order. Each successor is an independent clone.
pub fn generate_successors(board: &Board, side: Side) -> CheckersResult<Vec<Successor>> {
    let mut successors = Vec::new();

    for piece in board.pieces_of(side) {
        let moves = generate_piece_moves(board, &piece);
        for &destination in moves.destinations() {
            let mut next = board.clone();
            let report = next.apply_move_set(&moves, destination)?;
            successors.push(Successor {
                report,
                board: next,
            });
        }
    }

    Ok(successors)
}
