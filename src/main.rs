use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::error;

use plum_checkers::console::console_top::run_stdio_loop;
use plum_checkers::game_state::checkers_rules::{
    EngineKind, GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_SEARCH_DEPTH,
};
use plum_checkers::session::game_session::GameSession;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    AlphaBeta,
    Random,
}

/// Play checkers against a fixed-depth alpha-beta engine on the console.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board dimension (squares per side).
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Plies searched by the alpha-beta engine.
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    #[arg(long, value_enum, default_value_t = EngineArg::AlphaBeta)]
    engine: EngineArg,

    /// Seed for the random engine.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            board_size: self.size,
            search_depth: self.depth,
            engine: match self.engine {
                EngineArg::AlphaBeta => EngineKind::AlphaBeta,
                EngineArg::Random => EngineKind::Random,
            },
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let session = match GameSession::new(cli.config()) {
        Ok(session) => session,
        Err(err) => {
            error!("cannot start a game: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_stdio_loop(session) {
        error!("console i/o failed: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
