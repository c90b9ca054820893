//! Random-move engine.
//!
//! Selects uniformly among every successor of the side to move. Useful for
//! diagnostics, integration testing, and as a trivial opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, EngineParams};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::search::successors::generate_successors;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        _params: &EngineParams,
    ) -> CheckersResult<EngineOutput> {
        let successors = generate_successors(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine successors {}",
            successors.len()
        ));

        if successors.is_empty() {
            return Ok(out);
        }

        let picked = successors.choose(&mut self.rng).ok_or_else(|| {
            CheckersError::IllegalMove("failed to choose a random move".to_owned())
        })?;

        out.score = Some(picked.board.evaluate());
        out.chosen = Some(picked.clone());
        Ok(out)
    }
}
