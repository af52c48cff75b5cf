use std::fmt;

use super::board::{BOARD_SIZE, Board, is_valid_move};
use super::bot::select_move;
use super::types::{Outcome, Score, Side, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingX,
    AwaitingO,
    Finished(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    NotYourTurn { expected: Side },
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { index } => {
                write!(f, "Cell {} is outside the board (0-{})", index, BOARD_SIZE - 1)
            }
            MoveError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            MoveError::NotYourTurn { expected } => write!(f, "It is {}'s turn", expected),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// One game between the human (X) and the computer (O), plus the running tally.
/// X always opens.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub phase: GamePhase,
    pub last_move: Option<usize>,
    pub score: Score,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::AwaitingX,
            last_move: None,
            score: Score::default(),
        }
    }

    pub fn current_side(&self) -> Option<Side> {
        match self.phase {
            GamePhase::AwaitingX => Some(Side::X),
            GamePhase::AwaitingO => Some(Side::O),
            GamePhase::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            GamePhase::Finished(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_))
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, side: Side, index: usize) -> Result<Outcome, MoveError> {
        let expected = self.current_side().ok_or(MoveError::GameOver)?;

        if side != expected {
            return Err(MoveError::NotYourTurn { expected });
        }

        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { index });
        }

        if !is_valid_move(&self.board, index) {
            return Err(MoveError::CellOccupied { index });
        }

        self.board = self.board.with_mark(index, side);
        self.last_move = Some(index);

        let outcome = evaluate(&self.board);
        self.phase = match outcome {
            Outcome::InProgress => match side {
                Side::X => GamePhase::AwaitingO,
                Side::O => GamePhase::AwaitingX,
            },
            finished => {
                self.score.record(finished);
                GamePhase::Finished(finished)
            }
        };

        Ok(outcome)
    }

    /// Runs the search on the current board and plays its answer as O.
    pub fn play_computer_turn(&mut self) -> Result<(usize, Outcome), MoveError> {
        match self.phase {
            GamePhase::AwaitingO => {}
            GamePhase::AwaitingX => return Err(MoveError::NotYourTurn { expected: Side::X }),
            GamePhase::Finished(_) => return Err(MoveError::GameOver),
        }

        let index = select_move(&self.board).ok_or(MoveError::GameOver)?;
        let outcome = self.place_mark(Side::O, index)?;
        Ok((index, outcome))
    }

    /// Clears the board for a new game. The score is kept.
    pub fn start_next_game(&mut self) {
        self.board = Board::new();
        self.phase = GamePhase::AwaitingX;
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::types::Mark;

    fn play(state: &mut TicTacToeGameState, moves: &[(Side, usize)]) -> Outcome {
        let mut outcome = Outcome::InProgress;
        for &(side, index) in moves {
            outcome = state.place_mark(side, index).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_game_awaits_x() {
        let state = TicTacToeGameState::new();

        assert_eq!(state.phase, GamePhase::AwaitingX);
        assert_eq!(state.current_side(), Some(Side::X));
        assert!(state.board.is_empty());
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();

        state.place_mark(Side::X, 0).unwrap();
        assert_eq!(state.phase, GamePhase::AwaitingO);
        assert_eq!(state.last_move, Some(0));

        state.place_mark(Side::O, 4).unwrap();
        assert_eq!(state.phase, GamePhase::AwaitingX);
    }

    #[test]
    fn test_wrong_side_rejected() {
        let mut state = TicTacToeGameState::new();

        let result = state.place_mark(Side::O, 0);

        assert_eq!(result, Err(MoveError::NotYourTurn { expected: Side::X }));
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Side::X, 0).unwrap();
        state.place_mark(Side::O, 4).unwrap();

        let result = state.place_mark(Side::X, 4);

        assert_eq!(result, Err(MoveError::CellOccupied { index: 4 }));
        assert_eq!(state.phase, GamePhase::AwaitingX);
        assert_eq!(state.board.get(4), Some(Mark::O));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut state = TicTacToeGameState::new();

        let result = state.place_mark(Side::X, 9);

        assert_eq!(result, Err(MoveError::OutOfRange { index: 9 }));
    }

    #[test]
    fn test_win_finishes_game_and_scores_once() {
        let mut state = TicTacToeGameState::new();

        let outcome = play(
            &mut state,
            &[(Side::X, 0), (Side::O, 3), (Side::X, 1), (Side::O, 4), (Side::X, 2)],
        );

        assert_eq!(outcome, Outcome::Win(Side::X));
        assert_eq!(state.phase, GamePhase::Finished(Outcome::Win(Side::X)));
        assert_eq!(state.score.x_wins, 1);
        assert_eq!(state.winning_line().unwrap().cells, [0, 1, 2]);
        assert_eq!(state.place_mark(Side::O, 5), Err(MoveError::GameOver));
        assert_eq!(state.score.x_wins, 1);
    }

    #[test]
    fn test_draw_leaves_score_untouched() {
        let mut state = TicTacToeGameState::new();

        let outcome = play(
            &mut state,
            &[
                (Side::X, 0),
                (Side::O, 1),
                (Side::X, 2),
                (Side::O, 4),
                (Side::X, 3),
                (Side::O, 5),
                (Side::X, 7),
                (Side::O, 6),
                (Side::X, 8),
            ],
        );

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_computer_turn_blocks() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[(Side::X, 0), (Side::O, 4), (Side::X, 1)]);

        let (index, outcome) = state.play_computer_turn().unwrap();

        assert_eq!(index, 2);
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(state.phase, GamePhase::AwaitingX);
    }

    #[test]
    fn test_computer_turn_requires_o() {
        let mut state = TicTacToeGameState::new();

        let result = state.play_computer_turn();

        assert_eq!(result, Err(MoveError::NotYourTurn { expected: Side::X }));
    }

    #[test]
    fn test_next_game_keeps_score() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(Side::X, 3), (Side::O, 0), (Side::X, 4), (Side::O, 1), (Side::X, 8), (Side::O, 2)],
        );
        assert_eq!(state.score.o_wins, 1);

        state.start_next_game();

        assert_eq!(state.phase, GamePhase::AwaitingX);
        assert!(state.board.is_empty());
        assert_eq!(state.last_move, None);
        assert_eq!(state.score.o_wins, 1);
    }

    #[test]
    fn test_human_never_beats_computer_when_playing_in_order() {
        let mut state = TicTacToeGameState::new();

        for _ in 0..5 {
            while !state.is_finished() {
                match state.phase {
                    GamePhase::AwaitingX => {
                        let index = (0..BOARD_SIZE)
                            .find(|&i| is_valid_move(&state.board, i))
                            .unwrap();
                        state.place_mark(Side::X, index).unwrap();
                    }
                    GamePhase::AwaitingO => {
                        state.play_computer_turn().unwrap();
                    }
                    GamePhase::Finished(_) => unreachable!(),
                }
            }
            assert_ne!(state.outcome(), Outcome::Win(Side::X));
            state.start_next_game();
        }

        assert_eq!(state.score.x_wins, 0);
    }
}
