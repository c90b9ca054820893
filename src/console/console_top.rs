//! Line-oriented console front-end and command loop.
//!
//! Parses player commands, drives a `GameSession` and prints the board after
//! every change. The engine answers automatically after each human move.
//!
//! Commands:
//! - `show` prints the board with the current highlights
//! - `select <row> <col>` picks a red piece and lists its destinations
//! - `move <row> <col>` moves the selected piece
//! - `click <x> <y>` selects or moves by pixel position
//! - `moves` lists the highlighted destinations
//! - `eval` prints the material evaluation
//! - `new` starts over, `help` lists commands, `quit` exits

use std::io::{self, BufRead, Write};

use chrono::Local;
use log::{info, warn};

use crate::errors::CheckersResult;
use crate::game_state::checkers_types::Coordinate;
use crate::session::game_session::{GameSession, AI_SIDE, HUMAN_SIDE};
use crate::utils::coordinates::square_from_pixel;
use crate::utils::render_board::render_board;

/// Side length of the square window `click` coordinates refer to.
pub const WINDOW_SIZE_PX: usize = 720;

/// Pixel size of one square when a `board_size` board fills the window.
pub const fn square_size_px(board_size: usize) -> usize {
    WINDOW_SIZE_PX / board_size
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn run_stdio_loop(session: GameSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(session);

    console.write_banner(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    info!("console closed");
    Ok(())
}

pub struct ConsoleState {
    session: GameSession,
    square_size: usize,
}

impl ConsoleState {
    pub fn new(session: GameSession) -> Self {
        let square_size = square_size_px(session.board().size());
        Self {
            session,
            square_size,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn write_banner(&self, out: &mut impl Write) -> io::Result<()> {
        let config = self.session.config();
        writeln!(
            out,
            "plum_checkers {} | {}x{} board | engine {} depth {} | {}",
            env!("CARGO_PKG_VERSION"),
            config.board_size,
            config.board_size,
            self.session.engine_name(),
            config.search_depth,
            Local::now().format(TIMESTAMP_FORMAT)
        )?;
        writeln!(
            out,
            "you play {}, moving first; type 'help' for commands",
            HUMAN_SIDE.name()
        )?;
        self.write_board(out)
    }

    /// Handles one input line; `Ok(true)` asks the loop to stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "show" | "board" => self.write_board(out)?,
            "select" => match parse_pair(&args) {
                Some((row, col)) => self.handle_select(row, col, out)?,
                None => writeln!(out, "usage: select <row> <col>")?,
            },
            "move" => match parse_pair(&args) {
                Some((row, col)) => self.handle_move(row, col, out)?,
                None => writeln!(out, "usage: move <row> <col>")?,
            },
            "click" => match parse_pair(&args) {
                Some((x, y)) => self.handle_click(x, y, out)?,
                None => writeln!(out, "usage: click <x> <y>")?,
            },
            "moves" => {
                let highlighted = self.session.highlighted();
                if highlighted.is_empty() {
                    writeln!(out, "no piece selected")?;
                } else {
                    writeln!(out, "destinations: {}", format_squares(highlighted))?;
                }
            }
            "eval" => {
                writeln!(out, "evaluation {:+.1}", self.session.board().evaluate())?;
            }
            "new" => match self.session.reset() {
                Ok(()) => self.write_board(out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "help" => write_help(out)?,
            "quit" | "exit" => return Ok(true),
            _ => writeln!(out, "unknown command '{cmd}', type 'help'")?,
        }

        Ok(false)
    }

    fn handle_select(&mut self, row: usize, col: usize, out: &mut impl Write) -> io::Result<()> {
        match self.session.select(row, col) {
            Ok(destinations) if destinations.is_empty() => {
                writeln!(out, "nothing to move on ({row}, {col})")
            }
            Ok(destinations) => {
                writeln!(out, "destinations: {}", format_squares(&destinations))?;
                self.write_board(out)
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn handle_move(&mut self, row: usize, col: usize, out: &mut impl Write) -> io::Result<()> {
        match self.session.move_selected(row, col) {
            Ok(Some(report)) => {
                writeln!(out, "{report}")?;
                self.after_human_move(out)
            }
            Ok(None) => writeln!(out, "not a legal destination; select a piece again"),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    /// A click moves the selected piece when it hits a highlighted square and
    /// otherwise becomes a new selection.
    fn handle_click(&mut self, x: usize, y: usize, out: &mut impl Write) -> io::Result<()> {
        let size = self.session.board().size();
        let square = square_from_pixel(x, y, self.square_size, size);
        let Some(Coordinate { row, col }) = square else {
            return writeln!(out, "click ({x}, {y}) is outside the board");
        };

        if self.session.selected().is_some() {
            match self.session.move_selected(row, col) {
                Ok(Some(report)) => {
                    writeln!(out, "{report}")?;
                    return self.after_human_move(out);
                }
                Ok(None) => {}
                Err(err) => return writeln!(out, "error: {err}"),
            }
        }

        self.handle_select(row, col, out)
    }

    fn after_human_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.session.outcome().is_some() {
            self.write_board(out)?;
            return self.write_game_over(out);
        }

        match self.reply() {
            Ok(line) => writeln!(out, "{line}")?,
            Err(err) => {
                warn!("engine turn failed: {err}");
                writeln!(out, "error: {err}")?;
            }
        }

        self.write_board(out)?;
        if self.session.outcome().is_some() {
            self.write_game_over(out)?;
        }
        Ok(())
    }

    fn reply(&mut self) -> CheckersResult<String> {
        let turn = self.session.play_ai_turn()?;
        Ok(match turn.report {
            Some(report) => match turn.score {
                Some(score) => format!("{report} (score {score:+.1})"),
                None => report.to_string(),
            },
            None => format!("{} has no legal move", AI_SIDE.name()),
        })
    }

    fn write_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            render_board(self.session.board(), self.session.highlighted())
        )?;
        let board = self.session.board();
        writeln!(
            out,
            "red {} ({} kings) | white {} ({} kings) | {} to move",
            board.piece_count(HUMAN_SIDE),
            board.king_count(HUMAN_SIDE),
            board.piece_count(AI_SIDE),
            board.king_count(AI_SIDE),
            self.session.side_to_move().name()
        )
    }

    fn write_game_over(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(outcome) = self.session.outcome() {
            writeln!(
                out,
                "game over: {outcome} at {}; type 'new' to play again",
                Local::now().format(TIMESTAMP_FORMAT)
            )?;
        }
        Ok(())
    }
}

fn parse_pair(args: &[&str]) -> Option<(usize, usize)> {
    match args {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

fn format_squares(squares: &[Coordinate]) -> String {
    squares
        .iter()
        .map(Coordinate::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "show               print the board")?;
    writeln!(out, "select <row> <col> pick one of your pieces")?;
    writeln!(out, "move <row> <col>   move the selected piece")?;
    writeln!(out, "click <x> <y>      select or move by pixel position")?;
    writeln!(out, "moves              list highlighted destinations")?;
    writeln!(out, "eval               material evaluation, positive favours white")?;
    writeln!(out, "new                start a new game")?;
    writeln!(out, "quit               leave")
}

#[cfg(test)]
mod tests {
    use super::{square_size_px, ConsoleState};
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_rules::GameConfig;
    use crate::game_state::checkers_types::Side;
    use crate::session::game_session::GameSession;
    use crate::utils::diagram_parser::parse_board;

    fn console(size: usize) -> ConsoleState {
        let config = GameConfig::new(size, 1).unwrap();
        ConsoleState::new(GameSession::new(config).unwrap())
    }

    fn run(console: &mut ConsoleState, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = console.handle_command(line, &mut out).unwrap();
        (quit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn select_lists_destinations_and_move_triggers_the_reply() {
        let mut console = console(8);

        let (_, text) = run(&mut console, "select 2 1");
        assert!(text.contains("destinations: (3, 2) (3, 0)"), "{text}");

        let (_, text) = run(&mut console, "move 3 2");
        assert!(text.contains("red (2, 1) -> (3, 2)"), "{text}");
        assert!(text.contains("white ("), "{text}");
        assert!(text.contains("red to move"), "{text}");
        assert_eq!(console.session().side_to_move(), Side::Red);
    }

    #[test]
    fn bad_input_is_reported_without_quitting() {
        let mut console = console(8);
        for (line, expected) in [
            ("select 2", "usage: select"),
            ("move a b", "usage: move"),
            ("select 9 9", "error: coordinate (9, 9)"),
            ("move 3 2", "not a legal destination"),
            ("select 3 0", "nothing to move on"),
            ("fly", "unknown command 'fly'"),
        ] {
            let (quit, text) = run(&mut console, line);
            assert!(!quit);
            assert!(text.contains(expected), "{line}: {text}");
        }
        assert_eq!(console.session().side_to_move(), Side::Red);
    }

    #[test]
    fn click_selects_then_moves() {
        let mut console = console(12);
        let px = |i: usize| i * square_size_px(12) + 1;

        let (_, text) = run(&mut console, &format!("click {} {}", px(1), px(4)));
        assert!(text.contains("destinations: (5, 2) (5, 0)"), "{text}");

        let (_, text) = run(&mut console, &format!("click {} {}", px(0), px(5)));
        assert!(text.contains("red (4, 1) -> (5, 0)"), "{text}");

        let (_, text) = run(&mut console, "click 5000 10");
        assert!(text.contains("outside the board"), "{text}");
    }

    #[test]
    fn click_squares_follow_the_configured_board_size() {
        assert_eq!(square_size_px(12), 60);
        assert_eq!(square_size_px(8), 90);

        let mut console = console(8);
        let (_, text) = run(&mut console, "click 91 181");
        assert!(text.contains("destinations: (3, 2) (3, 0)"), "{text}");

        let (_, text) = run(&mut console, "click 719 719");
        assert!(text.contains("nothing to move on (7, 7)"), "{text}");
        let (_, text) = run(&mut console, "click 720 10");
        assert!(text.contains("outside the board"), "{text}");
    }

    #[test]
    fn clicking_another_piece_switches_the_selection() {
        let mut console = console(12);
        let px = |i: usize| i * square_size_px(12) + 1;

        run(&mut console, &format!("click {} {}", px(1), px(4)));
        let (_, text) = run(&mut console, &format!("click {} {}", px(3), px(4)));
        assert!(text.contains("destinations: (5, 4) (5, 2)"), "{text}");
        let selected = console.session().selected().expect("piece selected");
        assert_eq!((selected.position.row, selected.position.col), (4, 3));
    }

    #[test]
    fn winning_move_prints_the_game_over_report() {
        let config = GameConfig::new(4, 1).unwrap();
        let board = parse_board("..../r.../.w../....").unwrap();
        let session =
            GameSession::from_board(config, board, Box::new(RandomEngine::with_seed(5))).unwrap();
        let mut console = ConsoleState::new(session);

        run(&mut console, "select 1 0");
        let (_, text) = run(&mut console, "move 3 2");
        assert!(text.contains("capturing 1"), "{text}");
        assert!(text.contains("game over: red wins"), "{text}");

        let (_, text) = run(&mut console, "select 3 2");
        assert!(text.contains("error: illegal move: game is over"), "{text}");
    }

    #[test]
    fn eval_new_and_quit() {
        let mut console = console(8);
        let (_, text) = run(&mut console, "eval");
        assert!(text.contains("evaluation +0.0"), "{text}");

        run(&mut console, "select 2 1");
        run(&mut console, "move 3 2");
        let (_, text) = run(&mut console, "new");
        assert!(text.contains("red 12 (0 kings) | white 12 (0 kings) | red to move"));

        let (quit, _) = run(&mut console, "quit");
        assert!(quit);
    }

    #[test]
    fn banner_names_the_engine_and_board() {
        let console = console(8);
        let mut out = Vec::new();
        console.write_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("8x8 board"));
        assert!(text.contains("PlumCheckers AlphaBeta depth 1"));
    }
}
