//! Board-to-text-diagram generator, the inverse of `diagram_parser`.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coordinate, Piece, Side};

pub fn board_to_diagram(board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity(size * (size + 1));

    for row in 0..size {
        if row > 0 {
            out.push('/');
        }
        for col in 0..size {
            out.push(
                board
                    .occupant(Coordinate::new(row, col))
                    .map_or('.', piece_to_diagram_char),
            );
        }
    }

    out
}

pub(crate) fn piece_to_diagram_char(piece: &Piece) -> char {
    match (piece.side, piece.king) {
        (Side::Red, false) => 'r',
        (Side::Red, true) => 'R',
        (Side::White, false) => 'w',
        (Side::White, true) => 'W',
    }
}

#[cfg(test)]
mod tests {
    use super::board_to_diagram;
    use crate::game_state::board::Board;
    use crate::utils::diagram_parser::parse_board;

    #[test]
    fn starting_position_diagram_on_six_by_six() {
        let board = Board::new_game(6).unwrap();
        assert_eq!(
            board_to_diagram(&board),
            ".r.r.r/r.r.r./....../....../.w.w.w/w.w.w."
        );
    }

    #[test]
    fn parsed_diagram_renders_back_unchanged() {
        let diagram = "R.../..w./.r../...W";
        let board = parse_board(diagram).unwrap();
        assert_eq!(board_to_diagram(&board), diagram);
    }
}
