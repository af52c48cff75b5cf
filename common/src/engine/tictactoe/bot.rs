use super::board::{BOARD_SIZE, Board, get_available_moves, is_valid_move};
use super::game_state::TicTacToeGameState;
use super::types::{Outcome, Side};
use super::win_detector::evaluate;

pub const O_WIN_SCORE: i32 = 1;
pub const X_WIN_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub side: Side,
}

impl BotInput {
    /// Returns `None` once the game is finished.
    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        state.current_side().map(|side| Self {
            board: state.board,
            side,
        })
    }
}

pub fn calculate_move(input: BotInput) -> Option<usize> {
    best_move(&input.board, input.side)
}

/// Best cell for the computer (O). `None` when the board is already decided.
pub fn select_move(board: &Board) -> Option<usize> {
    best_move(board, Side::O)
}

/// Full-depth minimax from `side`'s point of view. O keeps the highest value,
/// X the lowest, and ties go to the lowest index.
pub fn best_move(board: &Board, side: Side) -> Option<usize> {
    if evaluate(board).is_terminal() {
        return None;
    }
    pick_best(&score_moves(board, side), side)
}

pub fn score_moves(board: &Board, side: Side) -> [Option<i32>; BOARD_SIZE] {
    let mut scores = [None; BOARD_SIZE];
    for index in get_available_moves(board) {
        scores[index] = score_move(board, index, side);
    }
    scores
}

/// Value of `side` playing `index`, with the opponent to move next.
pub fn score_move(board: &Board, index: usize, side: Side) -> Option<i32> {
    if !is_valid_move(board, index) {
        return None;
    }
    let next = board.with_mark(index, side);
    Some(minimax(&next, side == Side::X))
}

/// Scans in index order so that concurrently computed scores resolve ties
/// the same way as a sequential search.
pub fn pick_best(scores: &[Option<i32>; BOARD_SIZE], side: Side) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = match side {
        Side::O => i32::MIN,
        Side::X => i32::MAX,
    };

    for (index, score) in scores.iter().enumerate() {
        let Some(score) = *score else {
            continue;
        };
        let better = match side {
            Side::O => score > best_score,
            Side::X => score < best_score,
        };
        if better {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

pub fn outcome_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(Side::O) => Some(O_WIN_SCORE),
        Outcome::Win(Side::X) => Some(X_WIN_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::InProgress => None,
    }
}

pub fn minimax(board: &Board, is_maximizing: bool) -> i32 {
    if let Some(score) = outcome_score(evaluate(board)) {
        return score;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            let next = board.with_mark(index, Side::O);
            max_eval = max_eval.max(minimax(&next, false));
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            let next = board.with_mark(index, Side::X);
            min_eval = min_eval.min(minimax(&next, true));
        }
        min_eval
    }
}
