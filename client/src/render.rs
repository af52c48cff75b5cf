use common::engine::tictactoe::{BOARD_WIDTH, Board, Mark, Outcome, Score, Side, WinningLine};

/// Empty cells show their 1-9 number. Cells of a winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_WIDTH)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_WIDTH + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                        taken => taken.to_char(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_score(score: &Score) -> String {
    format!("Player X: {}\nPlayer O: {}", score.x_wins, score.o_wins)
}

pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Win(side) => Some(format!("Player {} wins!", side)),
        Outcome::Draw => Some("It's a tie!".to_string()),
        Outcome::InProgress => None,
    }
}

pub fn turn_prompt(side: Side) -> String {
    match side {
        Side::X => "Your move (X), pick a cell 1-9: ".to_string(),
        Side::O => "Computer (O) is thinking...".to_string(),
    }
}
