//! Canonical checkers-rule constants and game configuration.
//!
//! Board dimension and search depth are fixed literals in classic play; here
//! they are defaults of `GameConfig` so front-ends can override them.

use crate::errors::{CheckersError, CheckersResult};

/// Board dimension used when nothing else is configured (Canadian checkers).
pub const DEFAULT_BOARD_SIZE: usize = 12;
/// Plies searched by the alpha-beta engine when nothing else is configured.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 26;
pub const MAX_SEARCH_DEPTH: u8 = 8;

/// Value of a king on top of its value as a piece.
pub const KING_BONUS: f64 = 0.5;

/// Number of starting rows each side fills, leaving two empty rows between them.
#[inline]
pub const fn starting_rows_per_side(board_size: usize) -> usize {
    (board_size - 2) / 2
}

/// Playable (dark) squares: `col % 2 == (row + 1) % 2`.
#[inline]
pub const fn is_playable_square(row: usize, col: usize) -> bool {
    col % 2 == (row + 1) % 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    AlphaBeta,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub search_depth: u8,
    pub engine: EngineKind,
    /// Seed for engines that use randomness; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            search_depth: DEFAULT_SEARCH_DEPTH,
            engine: EngineKind::AlphaBeta,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, search_depth: u8) -> CheckersResult<Self> {
        let config = Self {
            board_size,
            search_depth,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CheckersResult<()> {
        validate_board_size(self.board_size)?;
        if self.search_depth == 0 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(CheckersError::InvalidConfig(format!(
                "search depth {} is outside 1..={MAX_SEARCH_DEPTH}",
                self.search_depth
            )));
        }
        Ok(())
    }
}

pub fn validate_board_size(board_size: usize) -> CheckersResult<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
        Ok(())
    } else {
        Err(CheckersError::InvalidBoardSize(board_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_canadian_board_at_depth_three() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 12);
        assert_eq!(config.search_depth, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        assert_eq!(
            GameConfig::new(3, 3).unwrap_err(),
            CheckersError::InvalidBoardSize(3)
        );
        assert!(matches!(
            GameConfig::new(8, 0),
            Err(CheckersError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(8, 2).is_ok());
    }

    #[test]
    fn starting_rows_leave_two_empty_rows() {
        assert_eq!(starting_rows_per_side(12), 5);
        assert_eq!(starting_rows_per_side(8), 3);
        assert_eq!(starting_rows_per_side(4), 1);
    }
}
