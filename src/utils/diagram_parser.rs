//! Text-diagram-to-Board parser.
//!
//! A diagram lists the rows from row 0 downwards, separated by `/` or line
//! breaks. Each row has one character per column: `.` empty, `r`/`R` red
//! man/king, `w`/`W` white man/king. The board dimension is the number of rows
//! and every row must be exactly that long.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coordinate, Side};

pub fn parse_board(diagram: &str) -> CheckersResult<Board> {
    let rows: Vec<&str> = diagram
        .split(|ch| ch == '/' || ch == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();

    let size = rows.len();
    let mut board = Board::empty(size)?;

    for (row, row_str) in rows.iter().enumerate() {
        let width = row_str.chars().count();
        if width != size {
            return Err(CheckersError::InvalidLayout(format!(
                "row {row} has {width} squares, expected {size}"
            )));
        }

        for (col, ch) in row_str.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let (side, king) = piece_from_diagram_char(ch).ok_or_else(|| {
                CheckersError::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;
            board.place_piece(side, Coordinate::new(row, col), king)?;
        }
    }

    Ok(board)
}

fn piece_from_diagram_char(ch: char) -> Option<(Side, bool)> {
    match ch {
        'r' => Some((Side::Red, false)),
        'R' => Some((Side::Red, true)),
        'w' => Some((Side::White, false)),
        'W' => Some((Side::White, true)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_board;
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::Side;

    #[test]
    fn parses_pieces_kings_and_counts() {
        let board = parse_board("r.../.W../..../...w").expect("diagram should parse");
        assert_eq!(board.size(), 4);
        assert_eq!(board.piece_count(Side::Red), 1);
        assert_eq!(board.piece_count(Side::White), 2);
        assert_eq!(board.king_count(Side::White), 1);

        let king = board.piece_at(1, 1).unwrap().expect("king on (1, 1)");
        assert!(king.king);
        assert_eq!(king.side, Side::White);
    }

    #[test]
    fn accepts_line_separated_rows() {
        let board = parse_board(
            "
            .r..
            ....
            ....
            w...
            ",
        )
        .expect("diagram should parse");
        assert_eq!(board.piece_count(Side::Red), 1);
        assert_eq!(board.piece_count(Side::White), 1);
    }

    #[test]
    fn rejects_ragged_rows_and_unknown_pieces() {
        assert!(matches!(
            parse_board("..../.../..../...."),
            Err(CheckersError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_board("..../.k../..../...."),
            Err(CheckersError::InvalidLayout(_))
        ));
    }
}
