//! Fixed-depth minimax search with alpha-beta pruning over cloned boards.
//!
//! White is the maximizing side and Red the minimizing one, matching the sign
//! of `Board::evaluate`. Every explored branch owns its own board clone.
//!
//! Ties go to the *last* successor whose score equals the running best, and a
//! level with no successors returns the infinite sentinel with no board. The
//! latter cannot happen below a non-terminal parent because `check_winner`
//! reports any side without moves before the search expands it.

use log::{debug, trace};

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::successors::{generate_successors, Successor};

pub const MAXIMIZING_SIDE: Side = Side::White;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub score: f64,
    /// Chosen successor; `None` at a leaf or when the side to move had no move.
    pub best: Option<Successor>,
    pub depth: u8,
    pub nodes: u64,
}

/// Side whose moves are expanded at a maximizing or minimizing level.
#[inline]
pub const fn side_to_move(maximizing: bool) -> Side {
    if maximizing {
        MAXIMIZING_SIDE
    } else {
        MAXIMIZING_SIDE.opposite()
    }
}

/// Searches `board` with the material evaluation.
pub fn search(
    board: &Board,
    depth: u8,
    maximizing: bool,
    alpha: f64,
    beta: f64,
) -> CheckersResult<SearchResult> {
    search_with_scorer(board, &MaterialScorer, depth, maximizing, alpha, beta)
}

pub fn search_with_scorer<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    alpha: f64,
    beta: f64,
) -> CheckersResult<SearchResult> {
    debug!(
        "alpha-beta search started: depth {depth}, {} to move",
        side_to_move(maximizing).name()
    );

    let mut nodes = 0u64;
    let (score, best) = alpha_beta(board, scorer, depth, maximizing, alpha, beta, &mut nodes)?;

    debug!(
        "alpha-beta search finished: score {score}, {nodes} nodes, move {}",
        best.as_ref()
            .map_or_else(|| "none".to_owned(), |s| s.report.to_string())
    );

    Ok(SearchResult {
        score,
        best,
        depth,
        nodes,
    })
}

fn alpha_beta<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    nodes: &mut u64,
) -> CheckersResult<(f64, Option<Successor>)> {
    *nodes += 1;

    if depth == 0 || board.check_winner().is_some() {
        return Ok((scorer.score(board), None));
    }

    let successors = generate_successors(board, side_to_move(maximizing))?;
    let mut best_move = None;

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for successor in successors {
            let (score, _) =
                alpha_beta(&successor.board, scorer, depth - 1, false, alpha, beta, nodes)?;
            best = best.max(score);
            alpha = alpha.max(best);
            if score == best {
                best_move = Some(successor);
            }
            if beta <= alpha {
                trace!("beta cutoff at depth {depth}: alpha {alpha} >= beta {beta}");
                break;
            }
        }
        Ok((best, best_move))
    } else {
        let mut best = f64::INFINITY;
        for successor in successors {
            let (score, _) =
                alpha_beta(&successor.board, scorer, depth - 1, true, alpha, beta, nodes)?;
            best = best.min(score);
            beta = beta.min(best);
            if score == best {
                best_move = Some(successor);
            }
            if beta <= alpha {
                trace!("alpha cutoff at depth {depth}: beta {beta} <= alpha {alpha}");
                break;
            }
        }
        Ok((best, best_move))
    }
}
