//! Terminal position detection.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{GameOutcome, Side};
use crate::move_generation::legal_move_generator::side_has_legal_move;

impl Board {
    /// `Winner(side)` when the opponent has no pieces or no legal move, `Draw`
    /// when neither side can move, `None` while the game goes on.
    ///
    /// Piece counts are checked first; the move scan stops at the first piece
    /// that can move.
    pub fn check_winner(&self) -> Option<GameOutcome> {
        if self.piece_count(Side::Red) == 0 {
            return Some(GameOutcome::Winner(Side::White));
        }
        if self.piece_count(Side::White) == 0 {
            return Some(GameOutcome::Winner(Side::Red));
        }

        let white_can_move = side_has_legal_move(self, Side::White);
        let red_can_move = side_has_legal_move(self, Side::Red);

        match (red_can_move, white_can_move) {
            (false, false) => Some(GameOutcome::Draw),
            (true, false) => Some(GameOutcome::Winner(Side::Red)),
            (false, true) => Some(GameOutcome::Winner(Side::White)),
            (true, true) => None,
        }
    }
}
