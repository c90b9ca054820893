//! Successor-tree node counting with alternating sides.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::search::successors::generate_successors;

/// Number of leaf boards `depth` plies below `board`, `side` moving first.
pub fn perft(board: &Board, side: Side, depth: u8) -> CheckersResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for successor in generate_successors(board, side)? {
        nodes += perft(&successor.board, side.opposite(), depth - 1)?;
    }

    Ok(nodes)
}
