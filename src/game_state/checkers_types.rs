//! Core value types of the board engine.

pub use crate::game_state::board::Board;

/// One of the two players. Red starts next to row 0 and moves towards higher
/// rows; White starts next to the last row and moves towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    White,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::White => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::White,
            Side::White => Side::Red,
        }
    }

    /// Row delta of a non-king step.
    #[inline]
    pub const fn forward(self) -> isize {
        match self {
            Side::Red => 1,
            Side::White => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::White => "white",
        }
    }
}

/// Zero-indexed `(row, col)` square, row 0 at the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Square reached by stepping `(dr, dc)` times `steps`, if it stays on a
    /// `size x size` board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, steps: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr * steps)?;
        let col = self.col.checked_add_signed(dc * steps)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stable handle of a piece inside a board's arena. Clones of a board keep the
/// same ids, so an id found on one board addresses the same piece on its copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub position: Coordinate,
    pub king: bool,
}

impl Piece {
    /// Vertical directions this piece may step or jump in, forward first.
    pub fn vertical_directions(&self) -> &'static [isize] {
        match (self.side, self.king) {
            (Side::Red, false) => &[1],
            (Side::White, false) => &[-1],
            (Side::Red, true) => &[1, -1],
            (Side::White, true) => &[-1, 1],
        }
    }
}

/// Terminal result of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(side) => write!(f, "{} wins", side.name()),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}
