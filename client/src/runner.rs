use std::io;
use std::time::Duration;

use common::engine::tictactoe::{GamePhase, MoveError, Outcome, Side, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::bot_turn::compute_move;
use crate::config::Config;
use crate::input::{Command, HELP_TEXT, parse_command};
use crate::render::{outcome_message, render_board, render_score, turn_prompt};

#[derive(Debug, Clone)]
pub struct RunnerSettings {
    pub result_delay: Duration,
    pub show_score: bool,
    pub parallel_search: bool,
}

impl From<&Config> for RunnerSettings {
    fn from(config: &Config) -> Self {
        Self {
            result_delay: Duration::from_millis(config.display.result_delay_ms),
            show_score: config.display.show_score,
            parallel_search: config.search.parallel,
        }
    }
}

/// Drives games between a human reading from `input` and the computer, until
/// the human quits or the input ends.
pub struct GameRunner<R, W> {
    lines: Lines<R>,
    output: W,
    state: TicTacToeGameState,
    settings: RunnerSettings,
}

impl<R, W> GameRunner<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, settings: RunnerSettings) -> Self {
        Self {
            lines: input.lines(),
            output,
            state: TicTacToeGameState::new(),
            settings,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> io::Result<()> {
        self.write_line("Tic-tac-toe: you are X, the computer is O.").await?;
        self.write_line(HELP_TEXT).await?;
        self.show_board().await?;

        loop {
            match self.state.phase {
                GamePhase::AwaitingO => self.play_computer_turn().await?,
                GamePhase::Finished(outcome) => self.finish_game(outcome).await?,
                GamePhase::AwaitingX => {
                    self.write(&turn_prompt(Side::X)).await?;
                    let Some(line) = self.lines.next_line().await? else {
                        self.write_line("").await?;
                        break;
                    };

                    match parse_command(&line) {
                        Ok(Command::Quit) => break,
                        Ok(Command::Place(index)) => self.play_human_turn(index).await?,
                        Ok(Command::Restart) => {
                            log!("Game restarted by player");
                            self.state.start_next_game();
                            self.write_line("New game.").await?;
                            self.show_board().await?;
                        }
                        Ok(Command::Score) => {
                            let score = render_score(&self.state.score);
                            self.write_line(&score).await?;
                        }
                        Ok(Command::Help) => self.write_line(HELP_TEXT).await?,
                        Err(message) => self.write_line(&message).await?,
                    }
                }
            }
        }

        let score = render_score(&self.state.score);
        self.write_line("Final score:").await?;
        self.write_line(&score).await?;
        self.write_line("Bye!").await
    }

    async fn play_human_turn(&mut self, index: usize) -> io::Result<()> {
        match self.state.place_mark(Side::X, index) {
            Ok(_) => {
                log!("X placed on cell {}", index);
                self.show_board().await
            }
            Err(MoveError::CellOccupied { index }) => {
                self.write_line(&format!("Cell {} is already taken", index + 1)).await
            }
            Err(e) => self.write_line(&e.to_string()).await,
        }
    }

    async fn play_computer_turn(&mut self) -> io::Result<()> {
        self.write_line(&turn_prompt(Side::O)).await?;

        let index = compute_move(self.state.board, self.settings.parallel_search)
            .await?
            .ok_or_else(|| io::Error::other("search found no move on an open board"))?;
        self.state
            .place_mark(Side::O, index)
            .map_err(io::Error::other)?;

        log!("O placed on cell {} (board {})", index, self.state.board);
        self.write_line(&format!("Computer plays cell {}", index + 1)).await?;
        self.show_board().await
    }

    async fn finish_game(&mut self, outcome: Outcome) -> io::Result<()> {
        if !self.settings.result_delay.is_zero() {
            tokio::time::sleep(self.settings.result_delay).await;
        }

        log!("Game finished: {:?}, score {}", outcome, self.state.score);
        if let Some(message) = outcome_message(outcome) {
            self.write_line(&message).await?;
        }
        if self.settings.show_score {
            let score = render_score(&self.state.score);
            self.write_line(&score).await?;
        }

        self.state.start_next_game();
        self.write_line("New game.").await?;
        self.show_board().await
    }

    async fn show_board(&mut self) -> io::Result<()> {
        let line = self.state.winning_line();
        let board = render_board(&self.state.board, line.as_ref());
        self.write_line(&board).await
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> RunnerSettings {
        RunnerSettings {
            result_delay: Duration::ZERO,
            show_score: true,
            parallel_search: true,
        }
    }

    async fn run_script(script: &str) -> (String, TicTacToeGameState) {
        let mut runner = GameRunner::new(script.as_bytes(), Vec::new(), test_settings());
        runner.run().await.unwrap();
        let state = runner.state().clone();
        let output = String::from_utf8(runner.into_output()).unwrap();
        (output, state)
    }

    #[tokio::test]
    async fn test_quit_prints_final_score() {
        let (output, state) = run_script("q\n").await;

        assert!(output.contains(" 1 | 2 | 3 "));
        assert!(output.contains("Final score:\nPlayer X: 0\nPlayer O: 0\nBye!"));
        assert!(state.board.is_empty());
    }

    #[tokio::test]
    async fn test_end_of_input_stops_runner() {
        let (output, _) = run_script("").await;

        assert!(output.ends_with("Bye!\n"));
    }

    #[tokio::test]
    async fn test_computer_answers_each_move() {
        let (output, state) = run_script("5\nq\n").await;

        assert!(output.contains("Computer plays cell 1"));
        assert_eq!(state.phase, GamePhase::AwaitingX);
        assert_eq!(state.board.to_string(), "O...X....");
    }

    #[tokio::test]
    async fn test_taken_cell_is_ignored() {
        let (output, state) = run_script("5\n5\n1\nq\n").await;

        assert!(output.contains("Cell 5 is already taken"));
        assert!(output.contains("Cell 1 is already taken"));
        assert_eq!(state.board.to_string(), "O...X....");
    }

    #[tokio::test]
    async fn test_bad_input_reports_and_keeps_turn() {
        let (output, state) = run_script("abc\n12\nq\n").await;

        assert!(output.contains("Unknown command 'abc'"));
        assert!(output.contains("Cell 12 does not exist"));
        assert!(state.board.is_empty());
    }

    #[tokio::test]
    async fn test_restart_clears_board() {
        let (output, state) = run_script("1\nn\nq\n").await;

        assert!(output.contains("New game."));
        assert!(state.board.is_empty());
        assert_eq!(state.phase, GamePhase::AwaitingX);
    }

    #[tokio::test]
    async fn test_games_finish_and_human_never_wins() {
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(4) + "q\n";

        let (output, state) = run_script(&script).await;

        assert!(output.contains("Player O wins!") || output.contains("It's a tie!"));
        assert!(!output.contains("Player X wins!"));
        assert_eq!(state.score.x_wins, 0);
    }

    #[tokio::test]
    async fn test_sequential_search_plays_same_game() {
        let script = "5\n9\nq\n";
        let mut runner = GameRunner::new(
            script.as_bytes(),
            Vec::new(),
            RunnerSettings {
                parallel_search: false,
                ..test_settings()
            },
        );
        runner.run().await.unwrap();
        let sequential = runner.state().board;

        let (_, parallel) = run_script(script).await;

        assert_eq!(sequential, parallel.board);
    }
}
