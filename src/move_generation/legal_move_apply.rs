//! Move application: relocation, removal of jumped pieces and promotion.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coordinate, PieceId, Side};
use crate::move_generation::legal_move_generator::missing_piece;
use crate::move_generation::move_set::MoveSet;

/// What a successfully applied move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub piece: PieceId,
    pub side: Side,
    pub from: Coordinate,
    pub to: Coordinate,
    /// Squares emptied by the jump chain, in capture order.
    pub captured: Vec<Coordinate>,
    pub promoted: bool,
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.side.name(), self.from, self.to)?;
        if !self.captured.is_empty() {
            write!(f, " capturing {}", self.captured.len())?;
        }
        if self.promoted {
            write!(f, " (crowned)")?;
        }
        Ok(())
    }
}

impl Board {
    /// Moves `piece` to `destination`, which must be part of the generation
    /// recorded by the last `valid_destinations` call for this piece.
    pub fn apply_move(
        &mut self,
        piece: PieceId,
        destination: Coordinate,
    ) -> CheckersResult<MoveReport> {
        let moves = self
            .pending
            .as_ref()
            .filter(|moves| moves.piece == piece)
            .cloned()
            .ok_or_else(|| {
                CheckersError::IllegalMove(format!(
                    "no destinations were generated for piece {}",
                    piece.0
                ))
            })?;

        self.apply_move_set(&moves, destination)
    }

    /// Moves the piece of `moves` to `destination` using the capture mapping
    /// carried by `moves` itself.
    pub fn apply_move_set(
        &mut self,
        moves: &MoveSet,
        destination: Coordinate,
    ) -> CheckersResult<MoveReport> {
        let piece = *self.piece(moves.piece).ok_or_else(|| missing_piece(moves.piece))?;

        if piece.position != moves.origin {
            return Err(CheckersError::IllegalMove(format!(
                "piece {} moved since its destinations were generated",
                piece.id.0
            )));
        }
        if !moves.contains(destination) {
            return Err(CheckersError::IllegalMove(format!(
                "{destination} is not a valid destination for the piece on {}",
                piece.position
            )));
        }

        self.relocate(piece.id, destination)?;

        let captured = moves
            .captured_by(destination)
            .iter()
            .filter_map(|&square| self.remove_at(square))
            .map(|removed| removed.position)
            .collect();

        let last_row = self.size() - 1;
        let promoted =
            (destination.row == 0 || destination.row == last_row) && self.promote(piece.id);

        self.pending = None;

        Ok(MoveReport {
            piece: piece.id,
            side: piece.side,
            from: piece.position,
            to: destination,
            captured,
            promoted,
        })
    }
}
