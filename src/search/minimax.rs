//! Plain minimax without pruning.
//!
//! Same enumeration order, leaf rule and last-equal-wins tie-break as the
//! alpha-beta search, so it serves as the reference the pruned search must
//! agree with on score.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::search::alpha_beta::{side_to_move, SearchResult};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::successors::{generate_successors, Successor};

pub fn minimax(board: &Board, depth: u8, maximizing: bool) -> CheckersResult<SearchResult> {
    let mut nodes = 0u64;
    let (score, best) = minimax_inner(board, &MaterialScorer, depth, maximizing, &mut nodes)?;
    Ok(SearchResult {
        score,
        best,
        depth,
        nodes,
    })
}

fn minimax_inner<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> CheckersResult<(f64, Option<Successor>)> {
    *nodes += 1;

    if depth == 0 || board.check_winner().is_some() {
        return Ok((scorer.score(board), None));
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for successor in generate_successors(board, side_to_move(maximizing))? {
        let (score, _) = minimax_inner(&successor.board, scorer, depth - 1, !maximizing, nodes)?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
        if score == best {
            best_move = Some(successor);
        }
    }

    Ok((best, best_move))
}
