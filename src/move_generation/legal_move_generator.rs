//! Per-piece legal move generation.
//!
//! Simple steps go to adjacent empty diagonals in the piece's allowed vertical
//! directions. Captures jump an adjacent opponent onto the empty square behind
//! it and keep jumping from each landing in the same vertical direction, so a
//! chain never reverses. Every landing of a chain is a destination. Captures
//! are compulsory per piece: once a piece can capture, its simple steps are
//! dropped. The whole-board rule (any capturing piece must be the one to move)
//! is not applied.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coordinate, Piece, PieceId, Side};
use crate::move_generation::move_set::MoveSet;

/// Right, then left.
const HORIZONTAL_DIRECTIONS: [isize; 2] = [1, -1];

pub fn generate_piece_moves(board: &Board, piece: &Piece) -> MoveSet {
    let size = board.size();
    let mut moves = MoveSet::new(piece.id, piece.position);

    for &dr in piece.vertical_directions() {
        for dc in HORIZONTAL_DIRECTIONS {
            if let Some(adjacent) = piece.position.offset(dr, dc, 1, size) {
                if board.occupant(adjacent).is_none() {
                    moves.push_step(adjacent);
                }
            }
        }
        collect_jumps(board, piece.side, piece.position, dr, &[], &mut moves);
    }

    if moves.has_captures() {
        moves.retain_captures();
    }

    moves
}

fn collect_jumps(
    board: &Board,
    side: Side,
    from: Coordinate,
    dr: isize,
    path: &[Coordinate],
    moves: &mut MoveSet,
) {
    let size = board.size();

    for dc in HORIZONTAL_DIRECTIONS {
        let over = from.offset(dr, dc, 1, size);
        let landing = from.offset(dr, dc, 2, size);
        let (Some(over), Some(landing)) = (over, landing) else {
            continue;
        };

        let jumps_opponent = board.occupant(over).is_some_and(|piece| piece.side != side);
        if !jumps_opponent || board.occupant(landing).is_some() {
            continue;
        }

        let mut captured = Vec::with_capacity(path.len() + 1);
        captured.extend_from_slice(path);
        captured.push(over);

        moves.push_capture(landing, captured.clone());
        collect_jumps(board, side, landing, dr, &captured, moves);
    }
}

/// True as soon as one piece of `side` has a destination.
pub fn side_has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .iter()
        .any(|piece| !generate_piece_moves(board, piece).is_empty())
}

impl Board {
    /// Legal destinations of `piece` without recording them as pending.
    pub fn legal_moves(&self, piece: PieceId) -> CheckersResult<MoveSet> {
        let piece = self.piece(piece).ok_or_else(|| missing_piece(piece))?;
        Ok(generate_piece_moves(self, piece))
    }

    /// Legal destinations of `piece`, recorded as the pending generation that a
    /// following `apply_move` for this piece is checked against.
    pub fn valid_destinations(&mut self, piece: PieceId) -> CheckersResult<MoveSet> {
        let moves = self.legal_moves(piece)?;
        self.pending = Some(moves.clone());
        Ok(moves)
    }
}

pub(crate) fn missing_piece(piece: PieceId) -> CheckersError {
    CheckersError::IllegalMove(format!("piece {} is not on the board", piece.0))
}
