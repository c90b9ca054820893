//! Error types shared by the board engine, search and session layers.

use thiserror::Error;

pub type CheckersResult<T> = Result<T, CheckersError>;

/// Every recoverable failure the engine reports. None of these terminate the
/// process; callers decide whether to retry with new input or leave the board
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// A coordinate outside the `size x size` grid.
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Destination not in the piece's last generated set, or piece not on the board.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("unsupported board size {0}")]
    InvalidBoardSize(usize),
    /// A text diagram that could not be turned into a board.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
