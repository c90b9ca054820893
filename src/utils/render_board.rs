//! Terminal-oriented board renderer.
//!
//! Draws the grid with row and column indices, piece glyphs from the diagram
//! alphabet and `*` on highlighted destination squares.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Coordinate;
use crate::utils::diagram_generator::piece_to_diagram_char;

const EMPTY: char = '·';
const HIGHLIGHT: char = '*';

/// Render the board with `highlights` marked, row 0 at the top.
pub fn render_board(board: &Board, highlights: &[Coordinate]) -> String {
    let size = board.size();
    let mut lines = Vec::with_capacity(size + 1);

    let mut header = String::from("   ");
    for col in 0..size {
        header.push_str(&format!("{col:>3}"));
    }
    lines.push(header);

    for row in 0..size {
        let mut line = format!("{row:>2} ");
        for col in 0..size {
            let coordinate = Coordinate::new(row, col);
            let glyph = match board.occupant(coordinate) {
                Some(piece) => piece_to_diagram_char(piece),
                None if highlights.contains(&coordinate) => HIGHLIGHT,
                None => EMPTY,
            };
            line.push_str(&format!("{glyph:>3}"));
        }
        lines.push(line);
    }

    lines.join("\n")
}
