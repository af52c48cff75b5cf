use super::board::{Board, LINES};
use super::types::{Mark, Outcome, Side, WinningLine};

pub fn check_win(board: &Board) -> Option<Side> {
    check_win_with_line(board).map(|line| line.side)
}

/// First line in `LINES` order whose three cells hold the same side.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark == Mark::Empty {
            continue;
        }
        if cells[b] == mark && cells[c] == mark {
            return mark.side().map(|side| WinningLine::new(side, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(side) = check_win(board) {
        return Outcome::Win(side);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
