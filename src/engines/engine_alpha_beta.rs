//! Fixed-depth alpha-beta engine.
//!
//! Searches with the full `(-inf, +inf)` window at the configured depth. It
//! maximizes when playing White and minimizes when playing Red, matching the
//! sign of the material evaluation.

use crate::engines::engine_trait::{Engine, EngineOutput, EngineParams};
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::checkers_types::Side;
use crate::search::alpha_beta::{search, MAXIMIZING_SIDE};

pub struct AlphaBetaEngine {
    default_depth: u8,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth: default_depth.max(1),
        }
    }

    pub fn depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "PlumCheckers AlphaBeta"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &EngineParams,
    ) -> CheckersResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let maximizing = side == MAXIMIZING_SIDE;

        let result = search(board, depth, maximizing, f64::NEG_INFINITY, f64::INFINITY)?;

        let mut out = EngineOutput {
            score: Some(result.score),
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info string alpha_beta depth {} nodes {} score {}",
            result.depth, result.nodes, result.score
        ));

        match result.best {
            Some(best) => {
                out.info_lines
                    .push(format!("info string alpha_beta best {}", best.report));
                out.chosen = Some(best);
            }
            None => out
                .info_lines
                .push("info string alpha_beta no legal move".to_owned()),
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::AlphaBetaEngine;
    use crate::engines::engine_trait::{Engine, EngineParams};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Coordinate, Side};
    use crate::utils::diagram_parser::parse_board;

    #[test]
    fn engine_plays_for_either_side() {
        let board = parse_board(
            "r......./......../..r...../...w..../......../......../......../......w.",
        )
        .unwrap();
        let mut engine = AlphaBetaEngine::new(1);

        let red = engine
            .choose_move(&board, Side::Red, &EngineParams::default())
            .unwrap();
        let red_move = red.chosen.expect("red can move");
        assert_eq!(red_move.report.side, Side::Red);
        assert_eq!(red_move.report.to, Coordinate::new(4, 4));

        let white = engine
            .choose_move(&board, Side::White, &EngineParams::default())
            .unwrap();
        let white_move = white.chosen.expect("white can move");
        assert_eq!(white_move.report.side, Side::White);
        assert_eq!(white_move.report.captured, vec![Coordinate::new(2, 2)]);
    }

    #[test]
    fn terminal_board_yields_no_move() {
        let board = parse_board("..../..../..w./....").unwrap();
        let out = AlphaBetaEngine::default()
            .choose_move(&board, Side::White, &EngineParams::default())
            .unwrap();
        assert!(out.chosen.is_none());
        assert_eq!(out.score, Some(1.0));
        assert!(out.info_lines.iter().any(|line| line.contains("no legal move")));
    }

    #[test]
    fn depth_parameter_overrides_the_default() {
        assert_eq!(AlphaBetaEngine::default().depth(), 3);
        assert_eq!(AlphaBetaEngine::new(0).depth(), 1);

        let board = Board::new_game(8).unwrap();
        let mut engine = AlphaBetaEngine::new(4);
        assert_eq!(engine.depth(), 4);
        let out = engine
            .choose_move(&board, Side::White, &EngineParams { depth: Some(1) })
            .unwrap();
        assert!(out.info_lines[0].contains("depth 1"));
        assert!(out.chosen.is_some());
    }
}
