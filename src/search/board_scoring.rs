//! Static evaluation used at search leaves.

use crate::game_state::board::Board;

pub trait BoardScorer: Send + Sync {
    /// Score with White as the maximizing side: positive favours White.
    fn score(&self, board: &Board) -> f64;
}

/// Piece difference plus half a point per king difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, board: &Board) -> f64 {
        board.evaluate()
    }
}
