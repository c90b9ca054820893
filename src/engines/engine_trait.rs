//! Engine abstraction layer used by the game session.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped behind a single trait interface.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::search::successors::Successor;

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineParams {
    /// Overrides the engine's configured search depth.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Successor to adopt; `None` when `side` had no legal move.
    pub chosen: Option<Successor>,
    pub score: Option<f64>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &EngineParams,
    ) -> CheckersResult<EngineOutput>;
}
