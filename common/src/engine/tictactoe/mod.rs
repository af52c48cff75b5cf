mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{
    BOARD_SIZE, BOARD_WIDTH, Board, BoardParseError, LINES, get_available_moves, is_valid_move,
};
pub use bot::{
    BotInput, DRAW_SCORE, O_WIN_SCORE, X_WIN_SCORE, best_move, calculate_move, minimax,
    outcome_score, pick_best, score_move, score_moves, select_move,
};
pub use game_state::{GamePhase, MoveError, TicTacToeGameState};
pub use types::{Mark, Outcome, Score, Side, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
