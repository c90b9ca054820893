//! Screen-position to board-square translation for pointer front-ends.

use crate::game_state::checkers_types::Coordinate;

/// Square under pixel `(x, y)` when every square is `square_size` pixels
/// wide, or `None` if the point falls outside a `board_size` board.
pub fn square_from_pixel(
    x: usize,
    y: usize,
    square_size: usize,
    board_size: usize,
) -> Option<Coordinate> {
    if square_size == 0 {
        return None;
    }
    let row = y / square_size;
    let col = x / square_size;
    (row < board_size && col < board_size).then(|| Coordinate::new(row, col))
}
