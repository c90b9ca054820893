//! Crate root module declarations for the Plum Checkers project.
//!
//! Exposes the board engine (game state, move generation), the alpha-beta
//! search, the engines built on it, the turn-taking session and the console
//! front-end so the binary, tests and benchmarks share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
}

pub mod move_generation {
    pub mod game_outcome;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_set;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod minimax;
    pub mod successors;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod coordinates;
    pub mod diagram_generator;
    pub mod diagram_parser;
    pub mod render_board;
}
