//! Turn-taking game session between a human side and an engine side.
//!
//! Owns the live board and the selection/highlight state a front-end needs.
//! Human moves go through `select` then `move_selected`; the engine's reply is
//! triggered with `play_ai_turn`. Every completed turn switches sides and
//! polls `check_winner` on the board that results from it.

use log::{debug, info};

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, EngineParams};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{EngineKind, GameConfig};
use crate::game_state::checkers_types::{Coordinate, GameOutcome, Piece, PieceId, Side};
use crate::move_generation::legal_move_apply::MoveReport;

pub const HUMAN_SIDE: Side = Side::Red;
pub const AI_SIDE: Side = Side::White;

/// Engine matching `config.engine`.
pub fn engine_for(config: &GameConfig) -> Box<dyn Engine> {
    match config.engine {
        EngineKind::AlphaBeta => Box::new(AlphaBetaEngine::new(config.search_depth)),
        EngineKind::Random => match config.seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

/// What `play_ai_turn` did.
#[derive(Debug, Clone)]
pub struct AiTurn {
    /// Move played, `None` when the engine side had nothing to play.
    pub report: Option<MoveReport>,
    pub score: Option<f64>,
    pub info_lines: Vec<String>,
}

pub struct GameSession {
    config: GameConfig,
    board: Board,
    to_move: Side,
    selected: Option<PieceId>,
    highlighted: Vec<Coordinate>,
    outcome: Option<GameOutcome>,
    engine: Box<dyn Engine>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> CheckersResult<Self> {
        let engine = engine_for(&config);
        Self::with_engine(config, engine)
    }

    pub fn with_engine(config: GameConfig, engine: Box<dyn Engine>) -> CheckersResult<Self> {
        config.validate()?;
        let board = Board::new_game(config.board_size)?;
        Self::from_board(config, board, engine)
    }

    /// Session continuing from an arbitrary position, human to move.
    pub fn from_board(
        config: GameConfig,
        board: Board,
        engine: Box<dyn Engine>,
    ) -> CheckersResult<Self> {
        if board.size() != config.board_size {
            return Err(CheckersError::InvalidConfig(format!(
                "board is {}x{} but the configuration asks for {}",
                board.size(),
                board.size(),
                config.board_size
            )));
        }

        info!(
            "new session: {}x{} board, engine {}",
            config.board_size,
            config.board_size,
            engine.name()
        );

        let outcome = board.check_winner();
        Ok(Self {
            config,
            board,
            to_move: HUMAN_SIDE,
            selected: None,
            highlighted: Vec::new(),
            outcome,
            engine,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn selected(&self) -> Option<Piece> {
        self.selected.and_then(|id| self.board.piece(id).copied())
    }

    pub fn highlighted(&self) -> &[Coordinate] {
        &self.highlighted
    }

    /// Selects the piece on `(row, col)` when it belongs to the human side and
    /// returns its destinations. Any other square clears the selection and
    /// returns an empty list.
    pub fn select(&mut self, row: usize, col: usize) -> CheckersResult<Vec<Coordinate>> {
        self.ensure_human_turn()?;
        let occupant = self.board.piece_at(row, col)?;
        self.clear_selection();

        let Some(piece) = occupant.filter(|p| p.side == HUMAN_SIDE) else {
            debug!("selection cleared at ({row}, {col})");
            return Ok(Vec::new());
        };

        let moves = self.board.valid_destinations(piece.id)?;
        self.selected = Some(piece.id);
        self.highlighted = moves.destinations().to_vec();
        debug!(
            "selected {} with {} destinations",
            piece.position,
            self.highlighted.len()
        );
        Ok(self.highlighted.clone())
    }

    /// Moves the selected piece to `(row, col)`.
    ///
    /// Returns `Ok(None)` and drops the selection when nothing is selected or
    /// the square is not highlighted, so a front-end can treat the click as a
    /// fresh selection attempt.
    pub fn move_selected(&mut self, row: usize, col: usize) -> CheckersResult<Option<MoveReport>> {
        self.ensure_human_turn()?;
        let destination = Coordinate::new(row, col);
        if !self.board.contains(destination) {
            return Err(CheckersError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            });
        }

        let Some(piece) = self.selected else {
            return Ok(None);
        };
        if !self.highlighted.contains(&destination) {
            self.clear_selection();
            return Ok(None);
        }

        let report = self.board.apply_move(piece, destination)?;
        info!("{report}");
        self.finish_turn();
        Ok(Some(report))
    }

    /// Lets the engine play for the AI side. A `None` move leaves the board as
    /// it was; the turn passes back either way.
    pub fn play_ai_turn(&mut self) -> CheckersResult<AiTurn> {
        if let Some(outcome) = self.outcome {
            return Err(CheckersError::IllegalMove(format!("game is over: {outcome}")));
        }
        if self.to_move != AI_SIDE {
            return Err(CheckersError::IllegalMove(format!(
                "it is {}'s turn",
                self.to_move.name()
            )));
        }

        let params = EngineParams {
            depth: Some(self.config.search_depth),
        };
        let EngineOutput {
            chosen,
            score,
            info_lines,
        } = self.engine.choose_move(&self.board, AI_SIDE, &params)?;

        for line in &info_lines {
            debug!("{line}");
        }

        let report = match chosen {
            Some(successor) => {
                info!("{}", successor.report);
                self.board = successor.board;
                Some(successor.report)
            }
            None => {
                info!("{} has no legal move", AI_SIDE.name());
                None
            }
        };

        self.finish_turn();
        Ok(AiTurn {
            report,
            score,
            info_lines,
        })
    }

    /// Starts over with the same configuration and engine.
    pub fn reset(&mut self) -> CheckersResult<()> {
        self.board = Board::new_game(self.config.board_size)?;
        self.to_move = HUMAN_SIDE;
        self.outcome = None;
        self.clear_selection();
        self.engine.new_game();
        info!("session reset");
        Ok(())
    }

    fn finish_turn(&mut self) {
        self.clear_selection();
        self.to_move = self.to_move.opposite();
        self.outcome = self.board.check_winner();
        if let Some(outcome) = self.outcome {
            info!("game over: {outcome}");
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    fn ensure_human_turn(&self) -> CheckersResult<()> {
        if let Some(outcome) = self.outcome {
            return Err(CheckersError::IllegalMove(format!("game is over: {outcome}")));
        }
        if self.to_move != HUMAN_SIDE {
            return Err(CheckersError::IllegalMove(format!(
                "it is {}'s turn",
                self.to_move.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSession, AI_SIDE, HUMAN_SIDE};
    use crate::engines::engine_random::RandomEngine;
    use crate::errors::CheckersError;
    use crate::game_state::checkers_rules::{EngineKind, GameConfig};
    use crate::game_state::checkers_types::{Coordinate, GameOutcome, Side};
    use crate::utils::diagram_parser::parse_board;

    fn small_config() -> GameConfig {
        GameConfig::new(8, 2).unwrap()
    }

    #[test]
    fn human_plays_first_and_turns_alternate() {
        let mut session = GameSession::new(small_config()).unwrap();
        assert_eq!(session.side_to_move(), HUMAN_SIDE);

        let destinations = session.select(2, 1).unwrap();
        assert_eq!(
            destinations,
            vec![Coordinate::new(3, 2), Coordinate::new(3, 0)]
        );
        assert_eq!(session.highlighted(), destinations.as_slice());

        let report = session.move_selected(3, 2).unwrap().expect("move applies");
        assert_eq!(report.from, Coordinate::new(2, 1));
        assert_eq!(session.side_to_move(), AI_SIDE);
        assert!(session.highlighted().is_empty());

        let turn = session.play_ai_turn().unwrap();
        assert_eq!(turn.report.expect("white replies").side, Side::White);
        assert_eq!(session.side_to_move(), HUMAN_SIDE);
    }

    #[test]
    fn selecting_an_opponent_or_empty_square_clears_selection() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.select(2, 1).unwrap();
        assert!(session.selected().is_some());

        assert!(session.select(5, 0).unwrap().is_empty());
        assert!(session.selected().is_none());
        assert!(session.select(4, 4).unwrap().is_empty());
        assert!(session.highlighted().is_empty());
    }

    #[test]
    fn unhighlighted_destination_drops_the_selection_without_moving() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.select(2, 1).unwrap();
        assert!(session.move_selected(4, 1).unwrap().is_none());
        assert!(session.selected().is_none());
        assert_eq!(session.side_to_move(), HUMAN_SIDE);
        assert!(session.board().piece_at(2, 1).unwrap().is_some());

        assert!(session.move_selected(3, 2).unwrap().is_none());
    }

    #[test]
    fn off_board_coordinates_are_errors() {
        let mut session = GameSession::new(small_config()).unwrap();
        assert!(matches!(
            session.select(8, 0),
            Err(CheckersError::OutOfBounds { .. })
        ));
        assert!(matches!(
            session.move_selected(0, 9),
            Err(CheckersError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn out_of_turn_requests_are_rejected() {
        let mut session = GameSession::new(small_config()).unwrap();
        assert!(matches!(
            session.play_ai_turn(),
            Err(CheckersError::IllegalMove(_))
        ));

        session.select(2, 1).unwrap();
        session.move_selected(3, 0).unwrap();
        assert!(matches!(
            session.select(2, 3),
            Err(CheckersError::IllegalMove(_))
        ));
    }

    #[test]
    fn winning_capture_ends_the_game_and_blocks_moves() {
        let config = GameConfig::new(4, 1).unwrap();
        let board = parse_board("..../r.../.w../....").unwrap();
        let engine = Box::new(RandomEngine::with_seed(3));
        let mut session = GameSession::from_board(config, board, engine).unwrap();
        assert!(session.outcome().is_none());

        assert_eq!(session.select(1, 0).unwrap(), vec![Coordinate::new(3, 2)]);
        let report = session.move_selected(3, 2).unwrap().expect("capture");
        assert_eq!(report.captured, vec![Coordinate::new(2, 1)]);
        assert!(report.promoted);
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Side::Red)));

        assert!(matches!(
            session.play_ai_turn(),
            Err(CheckersError::IllegalMove(_))
        ));
    }

    #[test]
    fn ai_outcome_is_read_from_the_new_board() {
        let config = GameConfig::new(4, 1).unwrap();
        // After red steps to (1, 2) white captures it and red has nothing left.
        let board = parse_board("...r/..../.w../w...").unwrap();
        let mut session =
            GameSession::from_board(config, board, Box::new(RandomEngine::with_seed(9))).unwrap();

        session.select(0, 3).unwrap();
        session.move_selected(1, 2).unwrap().expect("red steps");
        assert!(session.outcome().is_none());

        let turn = session.play_ai_turn().unwrap();
        let report = turn.report.expect("white captures");
        assert_eq!(report.captured, vec![Coordinate::new(1, 2)]);
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Side::White)));
    }

    #[test]
    fn reset_restores_the_starting_position() {
        let config = GameConfig {
            engine: EngineKind::Random,
            seed: Some(11),
            ..small_config()
        };
        let mut session = GameSession::new(config).unwrap();
        session.select(2, 1).unwrap();
        session.move_selected(3, 2).unwrap();
        session.play_ai_turn().unwrap();

        session.reset().unwrap();
        assert_eq!(session.side_to_move(), HUMAN_SIDE);
        assert!(session.outcome().is_none());
        assert_eq!(session.board().piece_count(Side::Red), 12);
        assert_eq!(session.board().piece_count(Side::White), 12);
        assert!(session.board().piece_at(2, 1).unwrap().is_some());
    }

    #[test]
    fn board_size_must_match_the_configuration() {
        let board = parse_board("..../..../..../....").unwrap();
        let result = GameSession::from_board(
            small_config(),
            board,
            Box::new(RandomEngine::with_seed(0)),
        );
        assert!(matches!(result, Err(CheckersError::InvalidConfig(_))));
    }
}
