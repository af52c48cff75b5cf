pub mod config;
pub mod engine;
pub mod logger;

pub use engine::tictactoe::{Board, Outcome, Side, evaluate, select_move};
