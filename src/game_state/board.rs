//! Board state: a flat grid of piece handles over an arena of piece records.
//!
//! `Board` is the central model of the engine. Live and king counters are
//! maintained incrementally by every mutation instead of being recomputed by
//! scanning. Cloning produces a fully independent copy (grid, arena, counters
//! and pending generation), which is what the search relies on for branch
//! isolation.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{
    is_playable_square, starting_rows_per_side, validate_board_size, DEFAULT_BOARD_SIZE,
    KING_BONUS,
};
use crate::game_state::checkers_types::{Coordinate, Piece, PieceId, Side};
use crate::move_generation::move_set::MoveSet;

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    // Row-major, `size * size` entries.
    cells: Vec<Option<PieceId>>,
    // Indexed by `PieceId`; `None` once captured.
    pieces: Vec<Option<Piece>>,
    live: [usize; 2],
    kings: [usize; 2],
    // Result of the last `valid_destinations` call, scoped to one piece.
    pub(crate) pending: Option<MoveSet>,
}

impl Default for Board {
    fn default() -> Self {
        // The default size holds 60 pieces, far inside the id range.
        Self::new_game(DEFAULT_BOARD_SIZE).unwrap_or_else(|_| Self::blank(DEFAULT_BOARD_SIZE))
    }
}

impl Board {
    /// Board of dimension `size` with no pieces on it.
    pub fn empty(size: usize) -> CheckersResult<Self> {
        validate_board_size(size)?;
        Ok(Self::blank(size))
    }

    /// Board of dimension `size` in the standard starting arrangement.
    pub fn new_game(size: usize) -> CheckersResult<Self> {
        let mut board = Self::empty(size)?;
        board.setup_starting_position()?;
        Ok(board)
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            pieces: Vec::new(),
            live: [0; 2],
            kings: [0; 2],
            pending: None,
        }
    }

    fn setup_starting_position(&mut self) -> CheckersResult<()> {
        let rows = starting_rows_per_side(self.size);
        for row in 0..self.size {
            let side = if row < rows {
                Side::Red
            } else if row >= self.size - rows {
                Side::White
            } else {
                continue;
            };
            for col in (0..self.size).filter(|&col| is_playable_square(row, col)) {
                self.insert_piece(side, Coordinate::new(row, col), false)?;
            }
        }
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    /// The piece on `(row, col)`, if any.
    pub fn piece_at(&self, row: usize, col: usize) -> CheckersResult<Option<Piece>> {
        let coordinate = Coordinate::new(row, col);
        if !self.contains(coordinate) {
            return Err(CheckersError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.occupant(coordinate).copied())
    }

    /// Looks a piece up by handle; `None` once it has been captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    /// Live pieces of `side` in row-major order.
    pub fn pieces_of(&self, side: Side) -> Vec<Piece> {
        self.cells
            .iter()
            .filter_map(|cell| cell.and_then(|id| self.piece(id)))
            .filter(|piece| piece.side == side)
            .copied()
            .collect()
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.live[side.index()]
    }

    #[inline]
    pub fn king_count(&self, side: Side) -> usize {
        self.kings[side.index()]
    }

    /// Generation recorded by the last `valid_destinations` call, if unconsumed.
    #[inline]
    pub fn pending_moves(&self) -> Option<&MoveSet> {
        self.pending.as_ref()
    }

    /// Puts a new piece on an empty square. Used to build positions.
    pub fn place_piece(
        &mut self,
        side: Side,
        coordinate: Coordinate,
        king: bool,
    ) -> CheckersResult<PieceId> {
        if !self.contains(coordinate) {
            return Err(CheckersError::OutOfBounds {
                row: coordinate.row,
                col: coordinate.col,
                size: self.size,
            });
        }
        if self.occupant(coordinate).is_some() {
            return Err(CheckersError::InvalidLayout(format!(
                "square {coordinate} is already occupied"
            )));
        }
        self.pending = None;
        self.insert_piece(side, coordinate, king)
    }

    /// Ids are never reused, so the arena runs out after `u16::MAX + 1` pieces.
    fn insert_piece(
        &mut self,
        side: Side,
        position: Coordinate,
        king: bool,
    ) -> CheckersResult<PieceId> {
        let id = u16::try_from(self.pieces.len()).map(PieceId).map_err(|_| {
            CheckersError::InvalidLayout(format!(
                "a board holds at most {} piece ids",
                u32::from(u16::MAX) + 1
            ))
        })?;
        self.pieces.push(Some(Piece {
            id,
            side,
            position,
            king,
        }));
        let cell = self.cell_index(position);
        self.cells[cell] = Some(id);
        self.live[side.index()] += 1;
        if king {
            self.kings[side.index()] += 1;
        }
        Ok(id)
    }

    /// Static material score; positive favours White, negative favours Red.
    pub fn evaluate(&self) -> f64 {
        let pieces = self.piece_count(Side::White) as f64 - self.piece_count(Side::Red) as f64;
        let kings = self.king_count(Side::White) as f64 - self.king_count(Side::Red) as f64;
        pieces + KING_BONUS * kings
    }

    #[inline]
    fn cell_index(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.size + coordinate.col
    }

    /// Occupant of an in-bounds square.
    #[inline]
    pub(crate) fn occupant(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.cells[self.cell_index(coordinate)].and_then(|id| self.piece(id))
    }

    /// Moves a live piece to an empty in-bounds square.
    pub(crate) fn relocate(&mut self, id: PieceId, destination: Coordinate) -> CheckersResult<()> {
        let origin = self
            .piece(id)
            .map(|piece| piece.position)
            .ok_or_else(|| CheckersError::IllegalMove(format!("piece {} is not on the board", id.0)))?;
        let from = self.cell_index(origin);
        let to = self.cell_index(destination);
        self.cells.swap(from, to);
        if let Some(piece) = self.pieces[id.index()].as_mut() {
            piece.position = destination;
        }
        Ok(())
    }

    /// Removes whatever stands on `coordinate`, keeping the counters in step.
    pub(crate) fn remove_at(&mut self, coordinate: Coordinate) -> Option<Piece> {
        let cell = self.cell_index(coordinate);
        let id = self.cells[cell].take()?;
        let piece = self.pieces[id.index()].take()?;
        self.live[piece.side.index()] -= 1;
        if piece.king {
            self.kings[piece.side.index()] -= 1;
        }
        Some(piece)
    }

    /// Crowns a live piece. Returns `false` when it already was a king.
    pub(crate) fn promote(&mut self, id: PieceId) -> bool {
        match self.pieces.get_mut(id.index()).and_then(Option::as_mut) {
            Some(piece) if !piece.king => {
                piece.king = true;
                self.kings[piece.side.index()] += 1;
                true
            }
            _ => false,
        }
    }
}
